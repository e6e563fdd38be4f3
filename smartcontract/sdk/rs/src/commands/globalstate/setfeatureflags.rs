use crate::{commands::globalstate::get::GetGlobalStateCommand, DoubleZeroClient};
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction,
    processors::globalstate::setfeatureflags::SetFeatureFlagsArgs,
};
use solana_sdk::{instruction::AccountMeta, signature::Signature};

#[derive(Clone, Debug, PartialEq)]
pub struct SetFeatureFlagsCommand {
    pub feature_flags: u128,
}

impl SetFeatureFlagsCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("GlobalState not initialized"))?;

        client.execute_transaction(
            DoubleZeroInstruction::SetFeatureFlags(SetFeatureFlagsArgs {
                feature_flags: self.feature_flags,
            }),
            vec![AccountMeta::new(globalstate_pubkey, false)],
        )
    }
}
