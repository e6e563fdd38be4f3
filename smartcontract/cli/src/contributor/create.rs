use crate::{
    doublezerocommand::CliCommand,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
    validators::{validate_code, validate_pubkey_or_code},
};
use clap::Args;
use doublezero_sdk::commands::contributor::{
    create::CreateContributorCommand, list::ListContributorCommand,
};
use solana_sdk::pubkey::Pubkey;
use std::{io::Write, str::FromStr};

#[derive(Args, Debug)]
pub struct CreateContributorCliCommand {
    /// Unique contributor code
    #[arg(long, value_parser = validate_code)]
    pub code: String,
    /// Owner of the contributor
    #[arg(long, value_parser = validate_pubkey_or_code)]
    pub owner: String,
}

impl CreateContributorCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let contributors = client.list_contributor(ListContributorCommand {})?;
        if contributors.iter().any(|(_, d)| d.code == self.code) {
            return Err(eyre::eyre!(
                "Contributor with code '{}' already exists",
                self.code
            ));
        }
        // Create contributor
        let owner = {
            if self.owner.eq_ignore_ascii_case("me") {
                client.get_payer()
            } else {
                Pubkey::from_str(&self.owner)?
            }
        };

        let (signature, _pubkey) = client.create_contributor(CreateContributorCommand {
            code: self.code.clone(),
            owner,
        })?;

        writeln!(out, "Signature: {signature}",)?;

        Ok(())
    }
}
