use crate::{geoclicommand::GeoCliCommand, validators::validate_code};
use clap::Args;
use doublezero_sdk::geolocation::geo_probe::delete::DeleteGeoProbeCommand;
use std::io::Write;

#[derive(Args, Debug)]
pub struct DeleteGeoProbeCliCommand {
    /// Probe code to delete
    #[arg(long, value_parser = validate_code)]
    pub code: String,
}

impl DeleteGeoProbeCliCommand {
    pub fn execute<C: GeoCliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let serviceability_globalstate_pk = client.get_serviceability_globalstate_pk();

        let sig = client.delete_geo_probe(DeleteGeoProbeCommand {
            code: self.code,
            serviceability_globalstate_pk,
        })?;

        writeln!(out, "Signature: {sig}")?;

        Ok(())
    }
}
