use doublezero_geolocation::{
    instructions::{CreateGeoProbeArgs, GeolocationInstruction},
    validation::validate_code_length,
    pda,
};
use doublezero_program_common::validate_account_code;
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};
use std::net::Ipv4Addr;

use crate::geolocation::client::GeolocationClient;

#[derive(Debug, PartialEq, Clone)]
pub struct CreateGeoProbeCommand {
    pub exchange_pk: Pubkey,
    pub serviceability_globalstate_pk: Pubkey,
    pub code: String,
    pub public_ip: Ipv4Addr,
    pub location_offset_port: u16,
    pub metrics_publisher_pk: Pubkey,
}

impl CreateGeoProbeCommand {
    pub fn execute(&self, client: &dyn GeolocationClient) -> eyre::Result<(Signature, Pubkey)> {
        validate_code_length(&self.code)?;
        let code =
            validate_account_code(&self.code).map_err(|err| eyre::eyre!("invalid code: {err}"))?;

        let program_id = client.get_program_id();
        let (probe_pda, _) = pda::get_geo_probe_pda(&program_id, &code);
        let (config_pda, _) = pda::get_program_config_pda(&program_id);

        client
            .execute_transaction(
                GeolocationInstruction::CreateGeoProbe(CreateGeoProbeArgs {
                    code,
                    public_ip: self.public_ip,
                    location_offset_port: self.location_offset_port,
                    metrics_publisher_pk: self.metrics_publisher_pk,
                }),
                vec![
                    AccountMeta::new(probe_pda, false),
                    AccountMeta::new_readonly(self.exchange_pk, false),
                    AccountMeta::new_readonly(config_pda, false),
                    AccountMeta::new_readonly(self.serviceability_globalstate_pk, false),
                ],
            )
            .map(|sig| (sig, probe_pda))
    }
}
