use crate::doublezerocommand::CliCommand;
use clap::Args;
use doublezero_sdk::GetGlobalStateCommand;
use doublezero_serviceability::state::globalstate::enabled_flags;
use std::io::Write;

#[derive(Args, Debug)]
pub struct GetFeatureFlagsCliCommand;

impl GetFeatureFlagsCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let (_, gstate) = client.get_globalstate(GetGlobalStateCommand)?;

        let flags = enabled_flags(gstate.feature_flags);
        let flag_names: Vec<String> = flags.iter().map(|f| f.to_string()).collect();

        if flag_names.is_empty() {
            writeln!(
                out,
                "No feature flags enabled (raw: {})",
                gstate.feature_flags
            )?;
        } else {
            writeln!(
                out,
                "Enabled feature flags: {} (raw: {})",
                flag_names.join(", "),
                gstate.feature_flags
            )?;
        }

        Ok(())
    }
}
