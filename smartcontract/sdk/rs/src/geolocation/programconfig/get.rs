use doublezero_geolocation::{pda, state::program_config::GeolocationProgramConfig};
use solana_sdk::pubkey::Pubkey;

use crate::geolocation::client::GeolocationClient;

#[derive(Debug, PartialEq, Clone)]
pub struct GetProgramConfigCommand;

impl GetProgramConfigCommand {
    pub fn execute(
        &self,
        client: &dyn GeolocationClient,
    ) -> eyre::Result<(Pubkey, GeolocationProgramConfig)> {
        let program_id = client.get_program_id();
        let (config_pda, _) = pda::get_program_config_pda(&program_id);

        let account = client.get_account(config_pda)?;
        let config = GeolocationProgramConfig::try_from(&account.data[..])
            .map_err(|_| eyre::eyre!("Failed to deserialize GeolocationProgramConfig account"))?;

        Ok((config_pda, config))
    }
}
