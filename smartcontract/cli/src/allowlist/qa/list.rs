use crate::doublezerocommand::CliCommand;
use clap::Args;
use doublezero_sdk::commands::allowlist::qa::list::ListQaAllowlistCommand;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ListQaCliCommand {
    /// Output as pretty JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Output as compact JSON
    #[arg(long, default_value_t = false)]
    pub json_compact: bool,
}

impl ListQaCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let list = client.list_qa_allowlist(ListQaAllowlistCommand)?;

        if self.json || self.json_compact {
            let list = list
                .into_iter()
                .map(|pubkey| pubkey.to_string())
                .collect::<Vec<_>>();

            let json = {
                if self.json_compact {
                    serde_json::to_string(&list)?
                } else {
                    serde_json::to_string_pretty(&list)?
                }
            };
            writeln!(out, "{json}")?;
        } else {
            writeln!(out, "Pubkeys:")?;
            for user in list {
                writeln!(out, "\t{user}")?;
            }
        }

        Ok(())
    }
}
