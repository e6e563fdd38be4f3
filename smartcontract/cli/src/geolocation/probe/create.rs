use crate::{
    geoclicommand::GeoCliCommand,
    validators::{validate_code, validate_pubkey},
};
use clap::Args;
use doublezero_sdk::geolocation::geo_probe::create::CreateGeoProbeCommand;
use solana_sdk::pubkey::Pubkey;
use std::{io::Write, net::Ipv4Addr, str::FromStr};

#[derive(Args, Debug)]
pub struct CreateGeoProbeCliCommand {
    /// Unique probe code (e.g., "ams-probe-01")
    #[arg(long, value_parser = validate_code)]
    pub code: String,
    /// Exchange account pubkey
    #[arg(long, value_parser = validate_pubkey)]
    pub exchange: String,
    /// Public IPv4 address where probe listens
    #[arg(long)]
    pub public_ip: Ipv4Addr,
    /// UDP listen port for location offsets
    #[arg(long, default_value_t = 8923)]
    pub port: u16,
    /// Metrics publisher public key
    #[arg(long, value_parser = validate_pubkey)]
    pub metrics_publisher: String,
}

impl CreateGeoProbeCliCommand {
    pub fn execute<C: GeoCliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let exchange_pk =
            Pubkey::from_str(&self.exchange).map_err(|_| eyre::eyre!("Invalid exchange pubkey"))?;

        let metrics_publisher_pk = if self.metrics_publisher == "me" {
            client.get_payer()
        } else {
            Pubkey::from_str(&self.metrics_publisher)
                .map_err(|_| eyre::eyre!("Invalid metrics publisher pubkey"))?
        };

        let serviceability_globalstate_pk = client.get_serviceability_globalstate_pk();

        let (sig, pda) = client.create_geo_probe(CreateGeoProbeCommand {
            exchange_pk,
            serviceability_globalstate_pk,
            code: self.code,
            public_ip: self.public_ip,
            location_offset_port: self.port,
            metrics_publisher_pk,
        })?;

        writeln!(out, "signature: {sig}\r\naccount: {pda}")?;

        Ok(())
    }
}
