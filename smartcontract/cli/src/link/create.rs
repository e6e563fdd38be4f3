use crate::doublezerocommand::CliCommand;
use crate::helpers::parse_pubkey;
use crate::requirements::{CHECK_BALANCE, CHECK_ID_JSON};
use clap::Args;
use doublezero_sdk::commands::device::get::GetDeviceCommand;
use doublezero_sdk::commands::link::create::CreateLinkCommand;
use doublezero_sdk::*;
use std::io::Write;

#[derive(Args, Debug)]
pub struct CreateLinkCliCommand {
    #[arg(long)]
    pub code: String,
    #[arg(long)]
    pub side_a: String,
    #[arg(long)]
    pub side_z: String,
    #[arg(long)]
    pub link_type: Option<String>,
    #[arg(long)]
    pub bandwidth: String,
    #[arg(long)]
    pub mtu: u32,
    #[arg(long)]
    pub delay_ms: f64,
    #[arg(long)]
    pub jitter_ms: f64,
}

impl CreateLinkCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let side_a_pk = match parse_pubkey(&self.side_a) {
            Some(pk) => pk,
            None => {
                let (pubkey, _) = client
                    .get_device(GetDeviceCommand {
                        pubkey_or_code: self.side_a.clone(),
                    })
                    .map_err(|_| eyre::eyre!("Device not found"))?;
                pubkey
            }
        };

        let side_z_pk = match parse_pubkey(&self.side_z) {
            Some(pk) => pk,
            None => {
                let (pubkey, _) = client
                    .get_device(GetDeviceCommand {
                        pubkey_or_code: self.side_z.clone(),
                    })
                    .map_err(|_| eyre::eyre!("Device not found"))?;
                pubkey
            }
        };

        let (signature, _pubkey) = client.create_tunnel(CreateLinkCommand {
            code: self.code.clone(),
            side_a_pk,
            side_z_pk,
            link_type: self
                .link_type
                .as_ref()
                .map(|t| t.parse().unwrap())
                .unwrap_or(LinkLinkType::L3),
            bandwidth: bandwidth_parse(&self.bandwidth),
            mtu: self.mtu,
            delay_ns: (self.delay_ms * 1000000.0) as u64,
            jitter_ns: (self.jitter_ms * 1000000.0) as u64,
        })?;

        writeln!(out, "Signature: {}", signature)?;

        Ok(())
    }
}
