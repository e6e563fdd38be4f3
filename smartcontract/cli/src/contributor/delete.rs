use crate::{
    doublezerocommand::CliCommand,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
    validators::validate_pubkey_or_code,
};
use clap::Args;
use doublezero_sdk::commands::contributor::{
    delete::DeleteContributorCommand, get::GetContributorCommand,
};
use std::io::Write;

#[derive(Args, Debug)]
pub struct DeleteContributorCliCommand {
    /// Contributor Pubkey or code to delete
    #[arg(long, value_parser = validate_pubkey_or_code)]
    pub pubkey: String,
}

impl DeleteContributorCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let (pubkey, _) = client.get_contributor(GetContributorCommand {
            pubkey_or_code: self.pubkey,
        })?;
        let signature = client.delete_contributor(DeleteContributorCommand { pubkey })?;
        writeln!(out, "Signature: {signature}",)?;

        Ok(())
    }
}
