use crate::doublezerocommand::CliCommand;
use crate::requirements::{CHECK_BALANCE, CHECK_ID_JSON};
use clap::Args;
use doublezero_sdk::commands::multicastgroup::allowlist::publisher::remove::RemoveMulticastGroupPubAllowlistCommand;
use solana_sdk::pubkey::Pubkey;
use std::io::Write;
use std::str::FromStr;

#[derive(Args, Debug)]
pub struct RemoveMulticastGroupPubAllowlistCliCommand {
    #[arg(long)]
    pub code: String,
    #[arg(long)]
    pub pubkey: String,
}

impl RemoveMulticastGroupPubAllowlistCliCommand {
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

        let res = client.remove_multicastgroup_pub_allowlist(
            RemoveMulticastGroupPubAllowlistCommand {
                pubkey_or_code: self.code,
                pubkey,
            },
        )?;
        writeln!(out, "Signature: {}", res)?;

        Ok(())
    }
}
