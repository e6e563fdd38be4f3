use doublezero_serviceability::{
    instructions::DoubleZeroInstruction, pda::get_resource_extension_pda,
    processors::device::activate::DeviceActivateArgs, resource::ResourceType,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

use crate::{
    commands::{
        device::get::GetDeviceCommand, globalconfig::get::GetGlobalConfigCommand,
        globalstate::get::GetGlobalStateCommand,
    },
    DoubleZeroClient,
};

#[derive(Debug, PartialEq, Clone)]
pub struct ActivateDeviceCommand {
    pub device_pubkey: Pubkey,
}

impl ActivateDeviceCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        let (globalconfig_pubkey, _globalconfig) = GetGlobalConfigCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalconfig not initialized"))?;

        let (_device_pubkey, device) = GetDeviceCommand {
            pubkey_or_code: self.device_pubkey.to_string(),
        }
        .execute(client)
        .map_err(|_err| eyre::eyre!("Device not found"))?;

        let mut extra_accounts = vec![];
        for idx in 0..device.dz_prefixes.len() + 1 {
            let resource_type = match idx {
                0 => ResourceType::TunnelIds(self.device_pubkey, 0),
                _ => ResourceType::DzPrefixBlock(self.device_pubkey, idx - 1),
            };
            let (pda, _, _) = get_resource_extension_pda(&client.get_program_id(), resource_type);
            extra_accounts.push(AccountMeta::new(pda, false));
        }

        client.execute_transaction(
            DoubleZeroInstruction::ActivateDevice(DeviceActivateArgs {
                resource_count: extra_accounts.len(),
            }),
            [
                vec![
                    AccountMeta::new(self.device_pubkey, false),
                    AccountMeta::new(globalstate_pubkey, false),
                    AccountMeta::new(globalconfig_pubkey, false),
                ],
                extra_accounts,
            ]
            .concat(),
        )
    }
}
