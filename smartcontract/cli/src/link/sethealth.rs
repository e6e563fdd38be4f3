use crate::{
    doublezerocommand::CliCommand,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
    validators::validate_pubkey_or_code,
};
use clap::Args;
use doublezero_sdk::commands::link::{get::GetLinkCommand, sethealth::SetLinkHealthCommand};
use doublezero_serviceability::state::link::LinkHealth;
use std::io::Write;

#[derive(Args, Debug)]
pub struct SetLinkHealthCliCommand {
    /// Link Pubkey or code to update
    #[arg(long, value_parser = validate_pubkey_or_code)]
    pub pubkey: String,
    /// Health status to set (pending, ready-for-service, impaired)
    #[arg(long)]
    pub health: LinkHealth,
}

impl SetLinkHealthCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let (pubkey, _) = client.get_link(GetLinkCommand {
            pubkey_or_code: self.pubkey,
        })?;

        let signature = client.set_link_health(SetLinkHealthCommand {
            pubkey,
            health: self.health,
        })?;
        writeln!(out, "Signature: {signature}",)?;

        Ok(())
    }
}
