use crate::{commands::multicastgroup::get::GetMulticastGroupCommand, DoubleZeroClient};
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction,
    pda::{get_accesspass_pda, get_globalstate_pda, get_mgroup_allowlist_entry_pda},
    processors::multicastgroup::allowlist::publisher::add::AddMulticastGroupPubAllowlistArgs,
    state::mgroup_allowlist_entry::MGroupAllowlistType,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};
use std::net::Ipv4Addr;

#[derive(Debug, PartialEq, Clone)]
pub struct AddMulticastGroupPubAllowlistCommand {
    pub pubkey_or_code: String,
    pub client_ip: Ipv4Addr,
    pub user_payer: Pubkey,
}

impl AddMulticastGroupPubAllowlistCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (mgroup_pubkey, _mgroup) = GetMulticastGroupCommand {
            pubkey_or_code: self.pubkey_or_code.clone(),
        }
        .execute(client)?;

        let (accesspass_pk, _) =
            get_accesspass_pda(&client.get_program_id(), &self.client_ip, &self.user_payer);

        let (globalstate_pubkey, _) = get_globalstate_pda(&client.get_program_id());

        let (mgroup_al_entry_pk, _) = get_mgroup_allowlist_entry_pda(
            &client.get_program_id(),
            &accesspass_pk,
            &mgroup_pubkey,
            MGroupAllowlistType::Publisher as u8,
        );

        client.execute_transaction(
            DoubleZeroInstruction::AddMulticastGroupPubAllowlist(
                AddMulticastGroupPubAllowlistArgs {
                    client_ip: self.client_ip,
                    user_payer: self.user_payer,
                },
            ),
            vec![
                AccountMeta::new(mgroup_pubkey, false),
                AccountMeta::new(accesspass_pk, false),
                AccountMeta::new(globalstate_pubkey, false),
                AccountMeta::new(mgroup_al_entry_pk, false),
            ],
        )
    }
}
