use crate::{commands::globalstate::get::GetGlobalStateCommand, DoubleZeroClient};
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction, processors::globalstate::setversion::SetVersionArgs,
    programversion::ProgramVersion,
};
use solana_sdk::{instruction::AccountMeta, signature::Signature};

#[derive(Debug, PartialEq, Clone)]
pub struct SetVersionCommand {
    pub min_compatible_version: ProgramVersion,
}

impl SetVersionCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        client.execute_transaction(
            DoubleZeroInstruction::SetMinVersion(SetVersionArgs {
                min_compatible_version: self.min_compatible_version.clone(),
            }),
            vec![AccountMeta::new(globalstate_pubkey, false)],
        )
    }
}
