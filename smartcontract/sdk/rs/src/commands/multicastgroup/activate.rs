use doublezero_serviceability::{
    instructions::DoubleZeroInstruction,
    processors::multicastgroup::activate::MulticastGroupActivateArgs,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};
use std::net::Ipv4Addr;

use crate::{commands::globalstate::get::GetGlobalStateCommand, DoubleZeroClient};

#[derive(Debug, PartialEq, Clone)]
pub struct ActivateMulticastGroupCommand {
    pub mgroup_pubkey: Pubkey,
    pub multicast_ip: Ipv4Addr,
    /// Optional ResourceExtension pubkey for on-chain IP allocation.
    /// When provided, multicast_ip is ignored and an IP is allocated from the ResourceExtension bitmap.
    pub resource_extension_pubkey: Option<Pubkey>,
}

impl ActivateMulticastGroupCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        let accounts = vec![
            AccountMeta::new(self.mgroup_pubkey, false),
            AccountMeta::new(globalstate_pubkey, false),
        ];

        let extra_accounts = match self.resource_extension_pubkey {
            Some(pubkey) => vec![AccountMeta::new(pubkey, false)],
            None => vec![],
        };

        client.execute_transaction_with_extra_accounts(
            DoubleZeroInstruction::ActivateMulticastGroup(MulticastGroupActivateArgs {
                multicast_ip: self.multicast_ip,
            }),
            accounts,
            extra_accounts,
        )
    }
}
