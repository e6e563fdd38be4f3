use crate::doublezerocommand::CliCommand;
use clap::Args;
use doublezero_program_common::serializer;
use doublezero_sdk::{
    commands::contributor::list::ListContributorCommand, Contributor, ContributorStatus,
};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use std::io::Write;
use tabled::{settings::Style, Table, Tabled};

#[derive(Args, Debug)]
pub struct ListContributorCliCommand {
    /// Output as pretty JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Output as compact JSON
    #[arg(long, default_value_t = false)]
    pub json_compact: bool,
}

#[derive(Tabled, Serialize)]
pub struct ContributorDisplay {
    #[serde(serialize_with = "serializer::serialize_pubkey_as_string")]
    pub account: Pubkey,
    pub code: String,
    pub status: ContributorStatus,
    #[serde(serialize_with = "serializer::serialize_pubkey_as_string")]
    pub owner: Pubkey,
}

impl ListContributorCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let contributors = client.list_contributor(ListContributorCommand {})?;

        let mut contributors: Vec<(Pubkey, Contributor)> = contributors.into_iter().collect();

        contributors.sort_by(|(_, a), (_, b)| a.owner.cmp(&b.owner));

        let contributor_displays: Vec<ContributorDisplay> = contributors
            .into_iter()
            .map(|(pubkey, tunnel)| ContributorDisplay {
                account: pubkey,
                code: tunnel.code,
                status: tunnel.status,
                owner: tunnel.owner,
            })
            .collect();

        let res = if self.json {
            serde_json::to_string_pretty(&contributor_displays)?
        } else if self.json_compact {
            serde_json::to_string(&contributor_displays)?
        } else {
            Table::new(contributor_displays)
                .with(Style::psql().remove_horizontals())
                .to_string()
        };

        writeln!(out, "{res}")?;

        Ok(())
    }
}
