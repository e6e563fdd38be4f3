use crate::{geoclicommand::GeoCliCommand, validators::validate_pubkey_or_code};
use clap::Args;
use doublezero_sdk::geolocation::geo_probe::get::GetGeoProbeCommand;
use std::io::Write;

#[derive(Args, Debug)]
pub struct GetGeoProbeCliCommand {
    /// Probe pubkey or code to retrieve
    #[arg(long, value_parser = validate_pubkey_or_code)]
    pub code: String,
}

impl GetGeoProbeCliCommand {
    pub fn execute<C: GeoCliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let (pubkey, probe) = client.get_geo_probe(GetGeoProbeCommand {
            pubkey_or_code: self.code,
        })?;

        writeln!(
            out,
            "account: {}\r\n\
code: {}\r\n\
owner: {}\r\n\
exchange: {}\r\n\
public_ip: {}\r\n\
port: {}\r\n\
parent_devices: {:?}\r\n\
metrics_publisher: {}\r\n\
reference_count: {}",
            pubkey,
            probe.code,
            probe.owner,
            probe.exchange_pk,
            probe.public_ip,
            probe.location_offset_port,
            probe.parent_devices,
            probe.metrics_publisher_pk,
            probe.reference_count,
        )?;

        Ok(())
    }
}
