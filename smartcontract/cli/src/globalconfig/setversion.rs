use crate::{
    doublezerocommand::CliCommand,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
};
use clap::Args;
use doublezero_sdk::{commands::globalstate::setversion::SetVersionCommand, ProgramVersion};
use std::io::Write;

#[derive(Args, Debug)]
pub struct SetVersionCliCommand {
    /// Minimum compatible client version (e.g., 1.0.0)
    #[clap(long)]
    pub min_compatible_version: ProgramVersion,
}

impl SetVersionCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let signature = client.set_minversion(SetVersionCommand {
            min_compatible_version: self.min_compatible_version,
        })?;
        writeln!(out, "Signature: {signature}",)?;

        Ok(())
    }
}
