use doublezero_geolocation::{pda, state::geo_probe::GeoProbe};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::geolocation::client::GeolocationClient;

#[derive(Debug, PartialEq, Clone)]
pub struct GetGeoProbeCommand {
    pub pubkey_or_code: String,
}

impl GetGeoProbeCommand {
    pub fn execute(&self, client: &dyn GeolocationClient) -> eyre::Result<(Pubkey, GeoProbe)> {
        let program_id = client.get_program_id();

        let pubkey = match Pubkey::from_str(&self.pubkey_or_code) {
            Ok(pk) => pk,
            Err(_) => {
                let (pda, _) = pda::get_geo_probe_pda(&program_id, &self.pubkey_or_code);
                pda
            }
        };

        let account = client.get_account(pubkey)?;
        let probe = GeoProbe::try_from(&account.data[..])
            .map_err(|_| eyre::eyre!("Failed to deserialize GeoProbe account"))?;

        Ok((pubkey, probe))
    }
}
