use crate::{
    doublezerocommand::CliCommand,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
    validators::validate_pubkey,
};
use clap::Args;
use doublezero_sdk::commands::link::{delete::DeleteLinkCommand, get::GetLinkCommand};
use std::io::Write;

#[derive(Args, Debug)]
pub struct DeleteLinkCliCommand {
    /// Link Pubkey or code to delete
    #[arg(long, value_parser = validate_pubkey)]
    pub pubkey: String,
}

impl DeleteLinkCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let (pubkey, _) = client.get_link(GetLinkCommand {
            pubkey_or_code: self.pubkey,
        })?;

        let signature = client.delete_link(DeleteLinkCommand { pubkey })?;
        writeln!(out, "Signature: {signature}",)?;

        Ok(())
    }
}
