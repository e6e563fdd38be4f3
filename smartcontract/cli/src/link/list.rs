use crate::doublezerocommand::CliCommand;
use clap::Args;
use doublezero_program_common::{
    serializer,
    types::{parse_utils::bandwidth_to_string, NetworkV4},
};
use doublezero_sdk::{
    commands::{
        contributor::{get::GetContributorCommand, list::ListContributorCommand},
        device::list::ListDeviceCommand,
        link::list::ListLinkCommand,
    },
    Link, LinkLinkType, LinkStatus,
};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use std::io::Write;
use tabled::{settings::Style, Table, Tabled};

#[derive(Args, Debug)]
pub struct ListLinkCliCommand {
    /// Filter by contributor (pubkey or code)
    #[arg(long, short = 'c')]
    pub contributor: Option<String>,
    /// List only WAN links.
    #[arg(long, default_value_t = false)]
    pub wan: bool,
    /// List only DXZ links.
    #[arg(long, default_value_t = false)]
    pub dzx: bool,
    /// Output as pretty JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Output as compact JSON.
    #[arg(long, default_value_t = false)]
    pub json_compact: bool,
}

#[derive(Tabled, Serialize)]
pub struct LinkDisplay {
    #[serde(serialize_with = "serializer::serialize_pubkey_as_string")]
    pub account: Pubkey,
    pub code: String,
    #[tabled(rename = "contributor")]
    pub contributor_code: String,
    #[serde(serialize_with = "serializer::serialize_pubkey_as_string")]
    #[tabled(rename = "side_a")]
    #[tabled(skip)]
    pub side_a_pk: Pubkey,
    pub side_a_name: String,
    pub side_a_iface_name: String,
    #[serde(serialize_with = "serializer::serialize_pubkey_as_string")]
    #[tabled(rename = "side_z")]
    #[tabled(skip)]
    pub side_z_pk: Pubkey,
    pub side_z_name: String,
    pub side_z_iface_name: String,
    pub link_type: LinkLinkType,
    pub bandwidth: String,
    pub mtu: u32,
    #[tabled(display = "crate::util::display_as_ms", rename = "delay_ms")]
    pub delay_ns: u64,
    #[tabled(display = "crate::util::display_as_ms", rename = "jitter_ms")]
    pub jitter_ns: u64,
    #[tabled(display = "crate::util::display_as_ms", rename = "delay_override_ms")]
    pub delay_override_ns: u64,
    pub tunnel_id: u16,
    pub tunnel_net: NetworkV4,
    pub status: LinkStatus,
    #[serde(serialize_with = "serializer::serialize_pubkey_as_string")]
    pub owner: Pubkey,
}

impl ListLinkCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let contributors = client.list_contributor(ListContributorCommand {})?;
        let devices = client.list_device(ListDeviceCommand)?;
        let mut links = client.list_link(ListLinkCommand)?;

        // Filter by contributor if specified
        if let Some(contributor_filter) = &self.contributor {
            let contributor_pk = match client.get_contributor(GetContributorCommand {
                pubkey_or_code: contributor_filter.clone(),
            }) {
                Ok((pk, _)) => pk,
                Err(_) => {
                    return Err(eyre::eyre!(
                        "Contributor '{}' not found",
                        contributor_filter
                    ));
                }
            };
            links.retain(|_, link| link.contributor_pk == contributor_pk);
        }

        let mut links: Vec<(Pubkey, Link)> = links.into_iter().collect();
        if self.wan {
            links.retain(|(_, link)| link.link_type == LinkLinkType::WAN);
        }
        if self.dzx {
            links.retain(|(_, link)| link.link_type == LinkLinkType::DZX);
        }

        let mut tunnel_displays: Vec<LinkDisplay> = links
            .into_iter()
            .map(|(pubkey, link)| {
                let contributor_code = match contributors.get(&link.contributor_pk) {
                    Some(contributor) => contributor.code.clone(),
                    None => link.contributor_pk.to_string(),
                };
                let side_a_name = match devices.get(&link.side_a_pk) {
                    Some(device) => device.code.clone(),
                    None => link.side_a_pk.to_string(),
                };
                let side_z_name = match devices.get(&link.side_z_pk) {
                    Some(device) => device.code.clone(),
                    None => link.side_z_pk.to_string(),
                };

                LinkDisplay {
                    account: pubkey,
                    code: link.code,
                    contributor_code,
                    side_a_pk: link.side_a_pk,
                    side_a_name,
                    side_a_iface_name: link.side_a_iface_name,
                    side_z_pk: link.side_z_pk,
                    side_z_name,
                    side_z_iface_name: link.side_z_iface_name,
                    link_type: link.link_type,
                    bandwidth: bandwidth_to_string(&link.bandwidth),
                    mtu: link.mtu,
                    delay_ns: link.delay_ns,
                    jitter_ns: link.jitter_ns,
                    delay_override_ns: link.delay_override_ns,
                    tunnel_id: link.tunnel_id,
                    tunnel_net: link.tunnel_net,
                    status: link.status,
                    owner: link.owner,
                }
            })
            .collect();

        tunnel_displays.sort_by(|a, b| {
            a.side_a_name
                .cmp(&b.side_a_name)
                .then(a.side_z_name.cmp(&b.side_z_name))
                .then(a.code.cmp(&b.code))
        });

        let res = if self.json {
            serde_json::to_string_pretty(&tunnel_displays)?
        } else if self.json_compact {
            serde_json::to_string(&tunnel_displays)?
        } else {
            Table::new(tunnel_displays)
                .with(Style::psql().remove_horizontals())
                .to_string()
        };

        writeln!(out, "{res}")?;

        Ok(())
    }
}
