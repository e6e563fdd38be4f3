use crate::doublezerocommand::CliCommand;
use crate::requirements::{CHECK_BALANCE, CHECK_ID_JSON};
use clap::Args;
use doublezero_sdk::commands::multicastgroup::get::GetMulticastGroupCommand;
use doublezero_sdk::commands::multicastgroup::update::UpdateMulticastGroupCommand;
use doublezero_sdk::*;
use std::io::Write;

#[derive(Args, Debug)]
pub struct UpdateMulticastGroupCliCommand {
    #[arg(long)]
    pub pubkey: String,
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub multicast_ip: Option<String>,
    #[arg(long)]
    pub max_bandwidth: Option<String>,
}

impl UpdateMulticastGroupCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let (_, multicastgroup) = client.get_multicastgroup(GetMulticastGroupCommand {
            pubkey_or_code: self.pubkey,
        })?;

        let signature = client.update_multicastgroup(UpdateMulticastGroupCommand {
            index: multicastgroup.index,
            code: self.code.clone(),
            multicast_ip: self.multicast_ip.as_ref().map(|ip| ipv4_parse(ip)),
            max_bandwidth: self.max_bandwidth.map(|bw| bw.parse::<u64>().unwrap()),
        })?;
        writeln!(out, "Signature: {}", signature)?;

        Ok(())
    }
}
