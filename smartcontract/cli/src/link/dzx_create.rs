use crate::{
    doublezerocommand::CliCommand,
    helpers::parse_pubkey,
    poll_for_activation::poll_for_link_activated,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
    validators::{
        validate_code, validate_parse_bandwidth, validate_parse_delay_ms, validate_parse_jitter_ms,
        validate_parse_mtu, validate_pubkey_or_code,
    },
};
use clap::Args;
use doublezero_sdk::{
    commands::{
        contributor::get::GetContributorCommand, device::get::GetDeviceCommand,
        link::create::CreateLinkCommand,
    },
    *,
};
use eyre::eyre;
use std::io::Write;

#[derive(Args, Debug)]
pub struct CreateDZXLinkCliCommand {
    /// Link code, must be unique.
    #[arg(long, value_parser = validate_code)]
    pub code: String,
    /// Contributor (pubkey or code) associated with the device
    #[arg(long, value_parser = validate_pubkey_or_code)]
    pub contributor: String,
    /// Device Pubkey or code for side A.
    #[arg(long, value_parser = validate_pubkey_or_code)]
    pub side_a: String,
    /// Device interface name for side A.
    #[arg(long)]
    pub side_a_interface: String,
    /// Device Pubkey or code for side Z.
    #[arg(long, value_parser = validate_pubkey_or_code)]
    pub side_z: String,
    /// Bandwidth (required). Accepts values in Kbps, Mbps, or Gbps.
    #[arg(long, value_parser = validate_parse_bandwidth)]
    pub bandwidth: u64,
    /// MTU (Maximum Transmission Unit) in bytes.
    #[arg(long, value_parser = validate_parse_mtu)]
    pub mtu: u32,
    /// RTT (Round Trip Time) delay in milliseconds.
    #[arg(long, value_parser = validate_parse_delay_ms)]
    pub delay_ms: f64,
    /// Jitter in milliseconds.
    #[arg(long, value_parser = validate_parse_jitter_ms)]
    pub jitter_ms: f64,
    /// Wait for the device to be activated
    #[arg(short, long, default_value_t = false)]
    pub wait: bool,
}

impl CreateDZXLinkCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let contributor_pk = match parse_pubkey(&self.contributor) {
            Some(pk) => pk,
            None => {
                let (pubkey, _) = client
                    .get_contributor(GetContributorCommand {
                        pubkey_or_code: self.contributor.clone(),
                    })
                    .map_err(|_| eyre::eyre!("Contributor not found"))?;
                pubkey
            }
        };

        let (side_a_pk, side_a_dev) = client
            .get_device(GetDeviceCommand {
                pubkey_or_code: self.side_a.clone(),
            })
            .map_err(|_| eyre::eyre!("Device not found"))?;

        let (side_z_pk, _) = client
            .get_device(GetDeviceCommand {
                pubkey_or_code: self.side_z.clone(),
            })
            .map_err(|_| eyre::eyre!("Device not found"))?;

        if !side_a_dev
            .interfaces
            .iter()
            .any(|i| i.into_current_version().name == self.side_a_interface)
        {
            return Err(eyre!(
                "Interface '{}' not found on side A device",
                self.side_a_interface
            ));
        }

        let (signature, pubkey) = client.create_link(CreateLinkCommand {
            code: self.code.clone(),
            contributor_pk,
            side_a_pk,
            side_z_pk,
            link_type: LinkLinkType::DZX,
            bandwidth: self.bandwidth,
            mtu: self.mtu,
            delay_ns: (self.delay_ms * 1000000.0) as u64,
            jitter_ns: (self.jitter_ms * 1000000.0) as u64,
            side_a_iface_name: self.side_a_interface.clone(),
            side_z_iface_name: None, // External links do not require side Z interface name
        })?;

        writeln!(out, "Signature: {signature}",)?;

        if self.wait {
            let link = poll_for_link_activated(client, &pubkey)?;
            writeln!(out, "Status: {0}", link.status)?;
        }

        Ok(())
    }
}
