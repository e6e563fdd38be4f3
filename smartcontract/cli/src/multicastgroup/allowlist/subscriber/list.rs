use crate::doublezerocommand::CliCommand;
use ::serde::Serialize;
use clap::Args;
use doublezero_program_common::serializer;
use doublezero_sdk::commands::{
    accesspass::list::ListAccessPassCommand, multicastgroup::get::GetMulticastGroupCommand,
};
use solana_sdk::pubkey::Pubkey;
use std::{io::Write, net::Ipv4Addr};
use tabled::{settings::Style, Table, Tabled};

#[derive(Args, Debug)]
pub struct ListMulticastGroupSubAllowlistCliCommand {
    // Multicast group code or pubkey to list publisher allowlist for
    #[arg(long)]
    pub code: String,
    /// Output as pretty JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Output as compact JSON
    #[arg(long, default_value_t = false)]
    pub json_compact: bool,
}

#[derive(Tabled, Serialize)]
pub struct MulticastAllowlistDisplay {
    #[serde(serialize_with = "serializer::serialize_pubkey_as_string")]
    pub account: Pubkey,
    pub multicast_group: String,
    pub client_ip: Ipv4Addr,
    #[serde(serialize_with = "serializer::serialize_pubkey_as_string")]
    pub user_payer: Pubkey,
}

impl ListMulticastGroupSubAllowlistCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let (mgroup_pubkey, mgroup) = client.get_multicastgroup(GetMulticastGroupCommand {
            pubkey_or_code: self.code.clone(),
        })?;

        let list_accesspass = client.list_accesspass(ListAccessPassCommand {})?;

        let mga_displays = list_accesspass
            .into_iter()
            .filter(|(_, accesspass)| accesspass.mgroup_sub_allowlist.contains(&mgroup_pubkey))
            .map(|(_, accesspass)| MulticastAllowlistDisplay {
                account: mgroup_pubkey,
                multicast_group: mgroup.code.clone(),
                client_ip: accesspass.client_ip,
                user_payer: accesspass.user_payer,
            })
            .collect::<Vec<_>>();

        let res = if self.json {
            serde_json::to_string_pretty(&mga_displays)?
        } else if self.json_compact {
            serde_json::to_string(&mga_displays)?
        } else {
            Table::new(mga_displays)
                .with(Style::psql().remove_horizontals())
                .to_string()
        };

        writeln!(out, "{res}")?;

        Ok(())
    }
}
