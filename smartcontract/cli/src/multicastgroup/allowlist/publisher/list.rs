use crate::doublezerocommand::CliCommand;
use clap::Args;
use doublezero_sdk::commands::multicastgroup::allowlist::publisher::list::ListMulticastGroupPubAllowlistCommand;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ListMulticastGroupPubAllowlistCliCommand {
    #[arg(long)]
    pub code: String,
    #[arg(long, default_value_t = false)]
    pub json: bool,
    #[arg(long, default_value_t = false)]
    pub json_compact: bool,
}

impl ListMulticastGroupPubAllowlistCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let list =
            client.list_multicastgroup_pub_allowlist(ListMulticastGroupPubAllowlistCommand {
                pubkey_or_code: self.code.clone(),
            })?;

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
            writeln!(out, "{}", json)?;
        } else {
            writeln!(out, "Pubkeys:")?;
            for user in list {
                writeln!(out, "\t{}", user)?;
            }
        }

        Ok(())
    }
}
