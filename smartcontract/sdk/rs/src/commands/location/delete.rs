use crate::{
    commands::globalstate::get::GetGlobalStateCommand, DoubleZeroClient, GetLocationCommand,
};
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction, processors::location::delete::LocationDeleteArgs,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

#[derive(Debug, PartialEq, Clone)]
pub struct DeleteLocationCommand {
    pub pubkey: Pubkey,
}

impl DeleteLocationCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        let (_, location) = GetLocationCommand {
            pubkey_or_code: self.pubkey.to_string(),
        }
        .execute(client)
        .map_err(|_err| eyre::eyre!("Location not found"))?;

        if location.reference_count > 0 {
            return Err(eyre::eyre!(
                "Location cannot be deleted, it has {} references",
                location.reference_count
            ));
        }

        client.execute_transaction(
            DoubleZeroInstruction::DeleteLocation(LocationDeleteArgs {}),
            vec![
                AccountMeta::new(self.pubkey, false),
                AccountMeta::new(globalstate_pubkey, false),
            ],
        )
    }
}
