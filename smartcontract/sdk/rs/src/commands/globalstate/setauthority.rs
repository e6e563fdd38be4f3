use crate::{commands::globalstate::get::GetGlobalStateCommand, DoubleZeroClient};
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction, processors::globalstate::setauthority::SetAuthorityArgs,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

#[derive(Debug, PartialEq, Clone)]
pub struct SetAuthorityCommand {
    pub activator_authority_pk: Option<Pubkey>,
    pub sentinel_authority_pk: Option<Pubkey>,
    pub health_oracle_pk: Option<Pubkey>,
}

impl SetAuthorityCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        client.execute_transaction(
            DoubleZeroInstruction::SetAuthority(SetAuthorityArgs {
                activator_authority_pk: self.activator_authority_pk,
                sentinel_authority_pk: self.sentinel_authority_pk,
                health_oracle_pk: self.health_oracle_pk,
                reservation_authority_pk: None,
            }),
            vec![AccountMeta::new(globalstate_pubkey, false)],
        )
    }
}
