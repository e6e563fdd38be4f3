use crate::geoclicommand::GeoCliCommand;
use clap::Args;
use doublezero_program_common::serializer;
use doublezero_sdk::geolocation::geo_probe::list::ListGeoProbeCommand;
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use std::{io::Write, net::Ipv4Addr};
use tabled::{settings::Style, Table, Tabled};

#[derive(Args, Debug)]
pub struct ListGeoProbeCliCommand {
    /// Output as pretty JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Output as compact JSON
    #[arg(long, default_value_t = false)]
    pub json_compact: bool,
}

#[derive(Tabled, Serialize)]
pub struct GeoProbeDisplay {
    #[serde(serialize_with = "serializer::serialize_pubkey_as_string")]
    pub account: Pubkey,
    pub code: String,
    pub public_ip: Ipv4Addr,
    pub port: u16,
    #[serde(serialize_with = "serializer::serialize_pubkey_as_string")]
    pub exchange: Pubkey,
    pub parent_count: usize,
    pub reference_count: u32,
}

impl ListGeoProbeCliCommand {
    pub fn execute<C: GeoCliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let probes = client.list_geo_probes(ListGeoProbeCommand)?;

        let mut displays: Vec<GeoProbeDisplay> = probes
            .into_iter()
            .map(|(pubkey, probe)| GeoProbeDisplay {
                account: pubkey,
                code: probe.code,
                public_ip: probe.public_ip,
                port: probe.location_offset_port,
                exchange: probe.exchange_pk,
                parent_count: probe.parent_devices.len(),
                reference_count: probe.reference_count,
            })
            .collect();

        displays.sort_by(|a, b| a.code.cmp(&b.code));

        let res = if self.json {
            serde_json::to_string_pretty(&displays)?
        } else if self.json_compact {
            serde_json::to_string(&displays)?
        } else {
            Table::new(displays)
                .with(Style::psql().remove_horizontals())
                .to_string()
        };

        writeln!(out, "{res}")?;

        Ok(())
    }
}
