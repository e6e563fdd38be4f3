use doublezero_geolocation::{
    instructions::GeolocationInstruction, 
    validation::validate_code_length,
    pda};
use doublezero_program_common::validate_account_code;
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

use crate::geolocation::client::GeolocationClient;

#[derive(Debug, PartialEq, Clone)]
pub struct DeleteGeoProbeCommand {
    pub code: String,
    pub serviceability_globalstate_pk: Pubkey,
}

impl DeleteGeoProbeCommand {
    pub fn execute(&self, client: &dyn GeolocationClient) -> eyre::Result<Signature> {
        validate_code_length(&self.code)?;
        let code =
            validate_account_code(&self.code).map_err(|err| eyre::eyre!("invalid code: {err}"))?;

        let program_id = client.get_program_id();
        let (probe_pda, _) = pda::get_geo_probe_pda(&program_id, &code);
        let (config_pda, _) = pda::get_program_config_pda(&program_id);

        client.execute_transaction(
            GeolocationInstruction::DeleteGeoProbe,
            vec![
                AccountMeta::new(probe_pda, false),
                AccountMeta::new_readonly(config_pda, false),
                AccountMeta::new_readonly(self.serviceability_globalstate_pk, false),
            ],
        )
    }
}
