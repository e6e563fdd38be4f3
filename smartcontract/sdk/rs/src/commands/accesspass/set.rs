use std::net::Ipv4Addr;

use doublezero_serviceability::{
    instructions::DoubleZeroInstruction, pda::get_accesspass_pda,
    processors::accesspass::set::SetAccessPassArgs, state::accesspass::AccessPassType,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

use crate::{
    commands::{accesspass::get::GetAccessPassCommand, globalstate::get::GetGlobalStateCommand},
    DoubleZeroClient,
};

#[derive(Debug, PartialEq, Clone)]
pub struct SetAccessPassCommand {
    pub accesspass_type: AccessPassType,
    pub client_ip: Ipv4Addr,
    pub user_payer: Pubkey,
    pub last_access_epoch: u64,
    pub allow_multiple_ip: bool,
    pub tenant: Pubkey,
}

impl SetAccessPassCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        if self.last_access_epoch > 0 && self.last_access_epoch != u64::MAX {
            let epoch = client.get_epoch()?;
            if self.last_access_epoch < epoch {
                return Err(eyre::eyre!(
                    "last_access_epoch {} cannot be in the past (current epoch is {})",
                    self.last_access_epoch,
                    epoch
                ));
            }
        }

        let (pda_pubkey, _) =
            get_accesspass_pda(&client.get_program_id(), &self.client_ip, &self.user_payer);

        let accesspass = GetAccessPassCommand {
            client_ip: self.client_ip,
            user_payer: self.user_payer,
        }
        .execute(client)?;

        let mut accounts = vec![
            AccountMeta::new(pda_pubkey, false),
            AccountMeta::new_readonly(globalstate_pubkey, false),
            AccountMeta::new(self.user_payer, false),
        ];

        if self.tenant != Pubkey::default() {
            let tenant_allowlist_first = accesspass
                .as_ref()
                .and_then(|(_, ap)| ap.tenant_allowlist.first().copied())
                .unwrap_or_default();
            accounts.push(AccountMeta::new(tenant_allowlist_first, false));
            accounts.push(AccountMeta::new(self.tenant, false));
        }

        client.execute_transaction(
            DoubleZeroInstruction::SetAccessPass(SetAccessPassArgs {
                accesspass_type: self.accesspass_type.clone(),
                client_ip: self.client_ip,
                last_access_epoch: self.last_access_epoch,
                allow_multiple_ip: self.allow_multiple_ip,
            }),
            accounts,
        )
    }
}
