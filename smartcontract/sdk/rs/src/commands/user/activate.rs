use crate::{
    commands::{
        accesspass::get::GetAccessPassCommand, device::get::GetDeviceCommand,
        globalstate::get::GetGlobalStateCommand, user::get::GetUserCommand,
    },
    DoubleZeroClient,
};
use doublezero_program_common::types::NetworkV4;
use doublezero_serviceability::{
    error::DoubleZeroError, instructions::DoubleZeroInstruction, pda::get_resource_extension_pda,
    processors::user::activate::UserActivateArgs, resource::ResourceType, state::user::UserStatus,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};
use std::net::Ipv4Addr;

#[derive(Debug, PartialEq, Clone)]
pub struct ActivateUserCommand {
    pub user_pubkey: Pubkey,
    pub tunnel_id: u16,
    pub tunnel_net: NetworkV4,
    pub dz_ip: Ipv4Addr,
    /// When true, SDK computes ResourceExtension PDAs and includes them for on-chain allocation.
    /// When false, uses legacy behavior with caller-provided tunnel_id, tunnel_net, and dz_ip.
    pub use_onchain_allocation: bool,
}

impl ActivateUserCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        let (_, user) = GetUserCommand {
            pubkey: self.user_pubkey,
        }
        .execute(client)
        .map_err(|_err| eyre::eyre!("User not found"))?;

        // Pre-flight check: only attempt activation if user is in a valid status
        if user.status != UserStatus::Pending && user.status != UserStatus::Updating {
            return Err(DoubleZeroError::InvalidStatus.into());
        }

        let (accesspass_pk, _) = GetAccessPassCommand {
            client_ip: Ipv4Addr::UNSPECIFIED,
            user_payer: user.owner,
        }
        .execute(client)
        .or_else(|_| {
            GetAccessPassCommand {
                client_ip: user.client_ip,
                user_payer: user.owner,
            }
            .execute(client)
        })
        .map_err(|_| eyre::eyre!("You have no Access Pass"))?;

        // Build accounts list with optional ResourceExtension accounts before payer
        // (payer and system_program are appended by execute_transaction)
        let mut accounts = vec![
            AccountMeta::new(self.user_pubkey, false),
            AccountMeta::new(accesspass_pk, false),
            AccountMeta::new(globalstate_pubkey, false),
        ];

        let dz_prefix_count: u8 = if self.use_onchain_allocation {
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

            // Device TunnelIds (scoped to user's device)
            let (device_tunnel_ids_ext, _, _) = get_resource_extension_pda(
                &client.get_program_id(),
                ResourceType::TunnelIds(user.device_pk, 0),
            );

            accounts.push(AccountMeta::new(global_resource_ext, false));
            accounts.push(AccountMeta::new(device_tunnel_ids_ext, false));

            // Add all N DzPrefixBlock accounts (devices can have multiple dz_prefixes)
            for idx in 0..count {
                let (device_dz_prefix_ext, _, _) = get_resource_extension_pda(
                    &client.get_program_id(),
                    ResourceType::DzPrefixBlock(user.device_pk, idx),
                );
                accounts.push(AccountMeta::new(device_dz_prefix_ext, false));
            }

            count as u8
        } else {
            0
        };

        client.execute_transaction(
            DoubleZeroInstruction::ActivateUser(UserActivateArgs {
                tunnel_id: self.tunnel_id,
                tunnel_net: self.tunnel_net,
                dz_ip: self.dz_ip,
                dz_prefix_count,
            }),
            accounts,
        )
    }
}
