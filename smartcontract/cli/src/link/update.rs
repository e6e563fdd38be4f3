use crate::{
    doublezerocommand::CliCommand,
    poll_for_activation::poll_for_link_activated,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
    validators::{
        validate_code, validate_parse_bandwidth, validate_parse_delay_ms,
        validate_parse_delay_override_ms, validate_parse_jitter_ms, validate_parse_mtu,
        validate_pubkey, validate_pubkey_or_code,
    },
};
use clap::Args;
use doublezero_sdk::commands::{
    contributor::get::GetContributorCommand,
    link::{get::GetLinkCommand, update::UpdateLinkCommand},
};
use doublezero_serviceability::state::link::LinkDesiredStatus;
use eyre::eyre;
use std::io::Write;

#[derive(Args, Debug)]
pub struct UpdateLinkCliCommand {
    /// Link Pubkey or code to update
    #[arg(long, value_parser = validate_pubkey_or_code)]
    pub pubkey: String,
    /// Contributor (pubkey or code) associated with the device
    #[arg(long, value_parser = validate_pubkey)]
    pub contributor: Option<String>,
    /// Updated code for the link
    #[arg(long, value_parser = validate_code)]
    pub code: Option<String>,
    /// Updated tunnel type (e.g. L1, L2, L3)
    #[arg(long)]
    pub tunnel_type: Option<String>,
    /// Updated bandwidth (e.g. 1Gbps, 100Mbps)
    #[arg(long, value_parser = validate_parse_bandwidth)]
    pub bandwidth: Option<u64>,
    /// Updated MTU (Maximum Transmission Unit) in bytes
    #[arg(long, value_parser = validate_parse_mtu)]
    pub mtu: Option<u32>,
    /// RTT (Round Trip Time) delay in milliseconds
    #[arg(long, value_parser = validate_parse_delay_ms)]
    pub delay_ms: Option<f64>,
    /// Jitter in milliseconds
    #[arg(long, value_parser = validate_parse_jitter_ms)]
    pub jitter_ms: Option<f64>,
    /// RTT (Round Trip Time) delay override in milliseconds
    #[arg(long, value_parser = validate_parse_delay_override_ms)]
    pub delay_override_ms: Option<f64>,
    /// Update link status (e.g. activated, soft-drained, hard-drained)
    #[arg(long)]
    pub status: Option<String>,
    /// Update link desired status (e.g. activated, soft-drained, hard-drained)
    #[arg(long)]
    pub desired_status: Option<LinkDesiredStatus>,
    /// Wait for the device to be activated
    #[arg(short, long, default_value_t = false)]
    pub wait: bool,
}

impl UpdateLinkCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let (pubkey, link) = client.get_link(GetLinkCommand {
            pubkey_or_code: self.pubkey,
        })?;

        let contributor_pk = match self.contributor {
            Some(contributor) => {
                match client.get_contributor(GetContributorCommand {
                    pubkey_or_code: contributor.clone(),
                }) {
                    Ok((contributor, _)) => Some(contributor),
                    Err(_) => None,
                }
            }
            None => None,
        };

        let tunnel_type = self
            .tunnel_type
            .map(|t| t.parse())
            .transpose()
            .map_err(|e| eyre!("Invalid tunnel type: {e}"))?;

        let status = self
            .status
            .map(|s| s.parse())
            .transpose()
            .map_err(|e| eyre!("Invalid status: {e}"))?;

        if let Some(ref code) = self.code {
            if link.code != *code
                && client
                    .get_link(GetLinkCommand {
                        pubkey_or_code: code.clone(),
                    })
                    .is_ok()
            {
                return Err(eyre!("Link with code '{}' already exists", &code,));
            }
        }

        let signature = client.update_link(UpdateLinkCommand {
            pubkey,
            code: self.code.clone(),
            contributor_pk,
            tunnel_type,
            bandwidth: self.bandwidth,
            mtu: self.mtu,
            delay_ns: self.delay_ms.map(|delay_ms| (delay_ms * 1000000.0) as u64),
            jitter_ns: self
                .jitter_ms
                .map(|jitter_ms| (jitter_ms * 1000000.0) as u64),
            delay_override_ns: self
                .delay_override_ms
                .map(|delay_override_ms| (delay_override_ms * 1000000.0) as u64),
            status,
            desired_status: self.desired_status,
        })?;
        writeln!(out, "Signature: {signature}",)?;

        if self.wait {
            let link = poll_for_link_activated(client, &pubkey)?;
            writeln!(out, "Status: {0}", link.status)?;
        }

        Ok(())
    }
}
