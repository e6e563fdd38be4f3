use crate::{
    commands::{exchange::get::GetExchangeCommand, globalstate::get::GetGlobalStateCommand},
    DoubleZeroClient,
};
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction, processors::exchange::delete::ExchangeDeleteArgs,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

#[derive(Debug, PartialEq, Clone)]
pub struct DeleteExchangeCommand {
    pub pubkey: Pubkey,
}

impl DeleteExchangeCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        let (_, exchange) = GetExchangeCommand {
            pubkey_or_code: self.pubkey.to_string(),
        }
        .execute(client)
        .map_err(|_err| eyre::eyre!("Exchange not found"))?;

        if exchange.reference_count > 0 {
            return Err(eyre::eyre!(
                "Exchange cannot be deleted, it has {} references",
                exchange.reference_count
            ));
        }

        client.execute_transaction(
            DoubleZeroInstruction::DeleteExchange(ExchangeDeleteArgs {}),
            vec![
                AccountMeta::new(self.pubkey, false),
                AccountMeta::new(globalstate_pubkey, false),
            ],
        )
    }
}
