use crate::{doublezerocommand::CliCommand, validators::validate_pubkey_or_code};
use clap::Args;
use doublezero_sdk::commands::contributor::get::GetContributorCommand;
use std::io::Write;

#[derive(Args, Debug)]
pub struct GetContributorCliCommand {
    /// Contributor Pubkey or code to get details for
    #[arg(long, value_parser = validate_pubkey_or_code)]
    pub code: String,
}

impl GetContributorCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let (pubkey, contributor) = client.get_contributor(GetContributorCommand {
            pubkey_or_code: self.code,
        })?;

        writeln!(
            out,
            "account: {},\r\ncode: {}\r\nata_owner_pk: {}\r\nstatus: {}\r\nowner: {}",
            pubkey,
            contributor.code,
            contributor.ata_owner_pk,
            contributor.status,
            contributor.owner
        )?;

        Ok(())
    }
}
