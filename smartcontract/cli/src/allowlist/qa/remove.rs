use crate::{
    doublezerocommand::CliCommand,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
};
use clap::Args;
use doublezero_sdk::commands::allowlist::qa::remove::RemoveQaAllowlistCommand;
use solana_sdk::pubkey::Pubkey;
use std::{io::Write, str::FromStr};

#[derive(Args, Debug)]
pub struct RemoveQaCliCommand {
    /// QA Pubkey to remove from the allowlist
    #[arg(long)]
    pub pubkey: String,
}

impl RemoveQaCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let pubkey = {
            if self.pubkey.eq_ignore_ascii_case("me") {
                client.get_payer()
            } else {
                Pubkey::from_str(&self.pubkey)?
            }
        };

        let signature = client.remove_qa_allowlist(RemoveQaAllowlistCommand { pubkey })?;
        writeln!(out, "Signature: {signature}")?;

        Ok(())
    }
}
