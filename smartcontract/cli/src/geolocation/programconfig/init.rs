use crate::{geoclicommand::GeoCliCommand, validators::validate_pubkey};
use clap::Args;
use doublezero_sdk::geolocation::programconfig::init::InitProgramConfigCommand;
use solana_sdk::pubkey::Pubkey;
use std::io::Write;

#[derive(Args, Debug)]
pub struct InitProgramConfigCliCommand {
    /// Serviceability program ID
    #[arg(long, value_parser = validate_pubkey)]
    pub serviceability_program_id: String,
}

impl InitProgramConfigCliCommand {
    pub fn execute<C: GeoCliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let serviceability_program_id =
            Pubkey::try_from(self.serviceability_program_id.as_str()).unwrap();

        let (sig, pda) = client.init_program_config(InitProgramConfigCommand {
            serviceability_program_id,
        })?;

        writeln!(out, "Signature: {sig}\r\nAccount: {pda}")?;

        Ok(())
    }
}
