use crate::{
    doublezerocommand::CliCommand,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
};
use clap::Args;
use doublezero_sdk::commands::multicastgroup::allowlist::subscriber::remove::RemoveMulticastGroupSubAllowlistCommand;
use solana_sdk::pubkey::Pubkey;
use std::{io::Write, net::Ipv4Addr, str::FromStr};

#[derive(Args, Debug)]
pub struct RemoveMulticastGroupSubAllowlistCliCommand {
    /// Multicast group code or pubkey to remove subscriber allowlist for
    #[arg(long)]
    pub code: String,
    /// Client IP address in IPv4 format
    #[arg(long)]
    pub client_ip: Ipv4Addr,
    /// Subscriber Pubkey or 'me' for current payer
    #[arg(long)]
    pub user_payer: String,
}

impl RemoveMulticastGroupSubAllowlistCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let user_payer = {
            if self.user_payer.eq_ignore_ascii_case("me") {
                client.get_payer()
            } else {
                Pubkey::from_str(&self.user_payer)?
            }
        };

        let signature = client.remove_multicastgroup_sub_allowlist(
            RemoveMulticastGroupSubAllowlistCommand {
                pubkey_or_code: self.code,
                client_ip: self.client_ip,
                user_payer,
            },
        )?;
        writeln!(out, "Signature: {signature}")?;

        Ok(())
    }
}
