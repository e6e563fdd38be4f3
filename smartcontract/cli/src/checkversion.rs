use crate::doublezerocommand::CliCommand;
use doublezero_sdk::{commands::programconfig::get::GetProgramConfigCommand, ProgramVersion};
use std::io::Write;

// NOTE: if the client is out of date, there is an error because the client warning will cause the json to be malformed. This was resolved in this PR (https://github.com/malbeclabs/doublezero/pull/2807) but the global monitor and maybe other things will break so these tests capture the expected format. The json response should be fixed sooner than later.
pub fn check_version<C: CliCommand, W: Write>(
    client: &C,
    out: &mut W,
    client_version: ProgramVersion,
) -> eyre::Result<()> {
    // Check the program configuration version
    if let Ok((_, pconfig)) = client.get_program_config(GetProgramConfigCommand) {
        // Compare the program version with the client version
        // If the program version is incompatible, return an error
        if client_version < pconfig.min_compatible_version {
            eyre::bail!("A new version of the client is available: {} → {}\nYour client version is no longer up to date. Please update it before continuing to use the client.", client_version, pconfig.min_compatible_version);
        }
        // Warn the user if their client version is older than the program version
        if client_version < pconfig.version {
            writeln!(out, "A new version of the client is available: {} → {}\nWe recommend updating to the latest version for the best experience.", client_version, pconfig.version)?;
        }
    }

    Ok(())
}
