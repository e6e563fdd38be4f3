use clap::Args;
use doublezero_sdk::commands::globalstate::setinternetlatencycollector::SetInternetLatencyCollectorCommand;
use solana_sdk::pubkey::Pubkey;
use std::{io::Write, str::FromStr};

use crate::{
    doublezerocommand::CliCommand,
    requirements::{CHECK_FOUNDATION_ALLOWLIST, CHECK_ID_JSON},
};

#[derive(Args, Debug)]
pub struct SetInternetLatencyCollectorCliCommand {
    /// Foundation Pubkey to set as the Internet Latency Samples collector
    #[arg(long)]
    pub pubkey: String,
}

impl SetInternetLatencyCollectorCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_FOUNDATION_ALLOWLIST)?;

        let pubkey = {
            if self.pubkey.eq_ignore_ascii_case("me") {
                client.get_payer()
            } else {
                Pubkey::from_str(&self.pubkey)?
            }
        };

        let signature =
            client.set_internet_latency_collector(SetInternetLatencyCollectorCommand { pubkey })?;
        writeln!(out, "Signature: {signature}")?;

        Ok(())
    }
}
