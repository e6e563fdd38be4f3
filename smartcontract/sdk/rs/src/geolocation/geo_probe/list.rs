use std::collections::HashMap;

use doublezero_geolocation::state::{accounttype::AccountType, geo_probe::GeoProbe};
use solana_rpc_client_api::{
    config::RpcProgramAccountsConfig,
    filter::{Memcmp, MemcmpEncodedBytes, RpcFilterType},
};
use solana_sdk::pubkey::Pubkey;

use crate::geolocation::client::GeolocationClient;

#[derive(Debug, PartialEq, Clone)]
pub struct ListGeoProbeCommand;

impl ListGeoProbeCommand {
    pub fn execute(
        &self,
        client: &dyn GeolocationClient,
    ) -> eyre::Result<HashMap<Pubkey, GeoProbe>> {
        let program_id = client.get_program_id();
        let filters = vec![RpcFilterType::Memcmp(Memcmp::new(
            0,
            MemcmpEncodedBytes::Bytes(vec![AccountType::GeoProbe as u8]),
        ))];

        let accounts = client.get_program_accounts(
            &program_id,
            RpcProgramAccountsConfig {
                filters: Some(filters),
                ..Default::default()
            },
        )?;

        accounts
            .into_iter()
            .map(|(pubkey, account)| {
                let probe = GeoProbe::try_from(&account.data[..])
                    .map_err(|_| eyre::eyre!("Failed to deserialize GeoProbe account {pubkey}"))?;
                Ok((pubkey, probe))
            })
            .collect()
    }
}
