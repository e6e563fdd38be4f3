use crate::{
    doublezerocommand::CliCommand,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
};
use clap::{Args, ValueEnum};
use doublezero_sdk::commands::accesspass::set::SetAccessPassCommand;
use doublezero_serviceability::state::accesspass::AccessPassType;
use solana_sdk::pubkey::Pubkey;
use std::{io::Write, net::Ipv4Addr, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliAccessPassType {
    Prepaid,
    SolanaValidator,
}

#[derive(Args, Debug)]
pub struct SetAccessPassCliCommand {
    /// Specifies the type of access pass being set [prepaid|postpaid].
    #[arg(long, default_value = "prepaid")]
    pub accesspass_type: CliAccessPassType,
    /// Client IP address in IPv4 format
    #[arg(long)]
    pub client_ip: Ipv4Addr,
    /// Specifies the payer of the access pass.
    #[arg(long)]
    pub user_payer: String,
    /// Specifies the number of epochs for the access pass.
    #[arg(long, default_value = "max")]
    pub epochs: String,
    /// Specifies the Solana validator for the access pass.
    #[arg(long)]
    pub solana_validator: Option<Pubkey>,
}

impl SetAccessPassCliCommand {
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

        let current_epoch = client.get_epoch()?;
        let last_access_epoch = match self.epochs.to_ascii_lowercase().as_str() {
            "0" => 0,
            "max" => u64::MAX,
            _ => current_epoch + self.epochs.parse::<u64>()?,
        };

        let accesspass_type = match self.accesspass_type {
            CliAccessPassType::Prepaid => AccessPassType::Prepaid,
            CliAccessPassType::SolanaValidator => match self.solana_validator {
                Some(solana_validator) => AccessPassType::SolanaValidator(solana_validator),
                None => eyre::bail!(
                    "Solana validator access pass type requires --solana-validator <PUBKEY>"
                ),
            },
        };

        let signature = client.set_accesspass(SetAccessPassCommand {
            accesspass_type,
            client_ip: self.client_ip,
            user_payer,
            last_access_epoch,
        })?;
        writeln!(out, "Signature: {signature}")?;

        Ok(())
    }
}
