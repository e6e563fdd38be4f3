use crate::{
    commands::{
        globalstate::get::GetGlobalStateCommand,
        multicastgroup::subscribe::SubscribeMulticastGroupCommand,
    },
    DoubleZeroClient,
};
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction,
    processors::multicastgroup::delete::MulticastGroupDeleteArgs,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

#[derive(Debug, PartialEq, Clone)]
pub struct DeleteMulticastGroupCommand {
    pub pubkey: Pubkey,
}

impl DeleteMulticastGroupCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand {}
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        let mgroup_pubkey = self.pubkey;
        let mgroup = client
            .get(mgroup_pubkey)
            .map_err(|_| eyre::eyre!("MulticastGroup not found ({})", mgroup_pubkey))?
            .get_multicastgroup()
            .map_err(|e| eyre::eyre!(e))?;

        for user_pk in mgroup.publishers.iter().chain(mgroup.subscribers.iter()) {
            SubscribeMulticastGroupCommand {
                group_pk: mgroup_pubkey,
                user_pk: *user_pk,
                publisher: false,
                subscriber: false,
            }
            .execute(client)?;
        }

        client.execute_transaction(
            DoubleZeroInstruction::DeleteMulticastGroup(MulticastGroupDeleteArgs {}),
            vec![
                AccountMeta::new(mgroup_pubkey, false),
                AccountMeta::new(globalstate_pubkey, false),
            ],
        )
    }
}
