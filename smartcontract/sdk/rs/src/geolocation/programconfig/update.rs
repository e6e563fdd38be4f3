use doublezero_geolocation::{
    instructions::{GeolocationInstruction, UpdateProgramConfigArgs},
    pda,
};
use solana_program::bpf_loader_upgradeable;
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

use crate::geolocation::client::GeolocationClient;

#[derive(Debug, PartialEq, Clone)]
pub struct UpdateProgramConfigCommand {
    pub serviceability_program_id: Option<Pubkey>,
    pub version: Option<u32>,
    pub min_compatible_version: Option<u32>,
}

impl UpdateProgramConfigCommand {
    pub fn execute(&self, client: &dyn GeolocationClient) -> eyre::Result<Signature> {
        if self.serviceability_program_id.is_none()
            && self.version.is_none()
            && self.min_compatible_version.is_none()
        {
            return Err(eyre::eyre!("at least one field must be set"));
        }

        let program_id = client.get_program_id();
        let (config_pda, _) = pda::get_program_config_pda(&program_id);
        let (program_data_pk, _) =
            Pubkey::find_program_address(&[program_id.as_ref()], &bpf_loader_upgradeable::id());

        client.execute_transaction(
            GeolocationInstruction::UpdateProgramConfig(UpdateProgramConfigArgs {
                serviceability_program_id: self.serviceability_program_id,
                version: self.version,
                min_compatible_version: self.min_compatible_version,
            }),
            vec![
                AccountMeta::new(config_pda, false),
                AccountMeta::new_readonly(program_data_pk, false),
            ],
        )
    }
}
