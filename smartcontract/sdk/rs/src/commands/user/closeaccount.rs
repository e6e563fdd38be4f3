use crate::{
    commands::{
        device::get::GetDeviceCommand, globalconfig::get::GetGlobalConfigCommand,
        globalstate::get::GetGlobalStateCommand, user::get::GetUserCommand,
    },
    DoubleZeroClient,
};
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction, pda::get_resource_extension_pda,
    processors::user::closeaccount::UserCloseAccountArgs, resource::ResourceType,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};
use std::net::Ipv4Addr;

#[derive(Debug, PartialEq, Clone)]
pub struct CloseAccountUserCommand {
    pub pubkey: Pubkey,
    /// When true, SDK computes ResourceExtension PDAs and includes them for on-chain deallocation.
    /// When false, uses legacy behavior without resource deallocation.
    pub use_onchain_deallocation: bool,
}

impl CloseAccountUserCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        let (_, user) = GetUserCommand {
            pubkey: self.pubkey,
        }
        .execute(client)
        .map_err(|_err| eyre::eyre!("User not found"))?;

        let mut accounts = vec![
            AccountMeta::new(self.pubkey, false),
            AccountMeta::new(user.owner, false),
            AccountMeta::new(user.device_pk, false),
            AccountMeta::new(globalstate_pubkey, false),
        ];

        let (dz_prefix_count, multicast_publisher_count): (u8, u8) = if self
            .use_onchain_deallocation
        {
            // Fetch device to get dz_prefixes count
            let (_, device) = GetDeviceCommand {
                pubkey_or_code: user.device_pk.to_string(),
            }
            .execute(client)
            .map_err(|_| eyre::eyre!("Device not found"))?;

            let count = device.dz_prefixes.len();

            // Global UserTunnelBlock
            let (global_resource_ext, _, _) =
                get_resource_extension_pda(&client.get_program_id(), ResourceType::UserTunnelBlock);

            accounts.push(AccountMeta::new(global_resource_ext, false));

            // Determine if user has MulticastPublisherBlock allocation
            // Check if dz_ip is allocated and could be from MulticastPublisherBlock
            let needs_multicast_publisher_block =
                user.dz_ip != user.client_ip && user.dz_ip != Ipv4Addr::UNSPECIFIED && {
                    // Fetch GlobalConfig to check if dz_ip is in multicast_publisher_block range
                    let (_, globalconfig) = GetGlobalConfigCommand
                        .execute(client)
                        .map_err(|_| eyre::eyre!("GlobalConfig not initialized"))?;
                    globalconfig.multicast_publisher_block.contains(user.dz_ip)
                };

            let multicast_count = if needs_multicast_publisher_block {
                let (multicast_publisher_block_ext, _, _) = get_resource_extension_pda(
                    &client.get_program_id(),
                    ResourceType::MulticastPublisherBlock,
                );
                accounts.push(AccountMeta::new(multicast_publisher_block_ext, false));
                1
            } else {
                0
            };

            // Device TunnelIds (scoped to user's device)
            let (device_tunnel_ids_ext, _, _) = get_resource_extension_pda(
                &client.get_program_id(),
                ResourceType::TunnelIds(user.device_pk, 0),
            );

            accounts.push(AccountMeta::new(device_tunnel_ids_ext, false));

            // Add all N DzPrefixBlock accounts (devices can have multiple dz_prefixes)
            for idx in 0..count {
                let (device_dz_prefix_ext, _, _) = get_resource_extension_pda(
                    &client.get_program_id(),
                    ResourceType::DzPrefixBlock(user.device_pk, idx),
                );
                accounts.push(AccountMeta::new(device_dz_prefix_ext, false));
            }

            (count as u8, multicast_count)
        } else {
            (0, 0)
        };

        if user.tenant_pk != Pubkey::default() {
            accounts.push(AccountMeta::new(user.tenant_pk, false));
        }

        client.execute_transaction(
            DoubleZeroInstruction::CloseAccountUser(UserCloseAccountArgs {
                dz_prefix_count,
                multicast_publisher_count,
            }),
            accounts,
        )
    }
}
