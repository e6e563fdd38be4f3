use crate::{
    commands::{globalstate::get::GetGlobalStateCommand, link::get::GetLinkCommand},
    DoubleZeroClient,
};
use doublezero_program_common::types::NetworkV4;
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction, pda::get_resource_extension_pda,
    processors::link::activate::LinkActivateArgs, resource::ResourceType, state::link::LinkStatus,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

#[derive(Debug, PartialEq, Clone)]
pub struct ActivateLinkCommand {
    pub link_pubkey: Pubkey,
    pub side_a_pk: Pubkey,
    pub side_z_pk: Pubkey,
    pub tunnel_id: u16,
    pub tunnel_net: NetworkV4,
    /// When true, SDK computes ResourceExtension PDAs and includes them for on-chain allocation.
    /// When false, uses legacy behavior with caller-provided tunnel_id and tunnel_net.
    pub use_onchain_allocation: bool,
}

impl ActivateLinkCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        let (_, link) = GetLinkCommand {
            pubkey_or_code: self.link_pubkey.to_string(),
        }
        .execute(client)
        .map_err(|_err| eyre::eyre!("Link not found"))?;

        if link.status != LinkStatus::Pending {
            return Err(eyre::eyre!("Link is not in Pending status"));
        }

        // Build accounts list with optional ResourceExtension accounts before payer
        // (payer and system_program are appended by execute_transaction)
        let mut accounts = vec![
            AccountMeta::new(self.link_pubkey, false),
            AccountMeta::new(self.side_a_pk, false),
            AccountMeta::new(self.side_z_pk, false),
            AccountMeta::new(globalstate_pubkey, false),
        ];

        if self.use_onchain_allocation {
            // Global DeviceTunnelBlock (for tunnel_net allocation)
            let (device_tunnel_block_ext, _, _) = get_resource_extension_pda(
                &client.get_program_id(),
                ResourceType::DeviceTunnelBlock,
            );

            // Global LinkIds (for tunnel_id allocation)
            let (link_ids_ext, _, _) =
                get_resource_extension_pda(&client.get_program_id(), ResourceType::LinkIds);

            accounts.push(AccountMeta::new(device_tunnel_block_ext, false));
            accounts.push(AccountMeta::new(link_ids_ext, false));
        }

        client.execute_transaction(
            DoubleZeroInstruction::ActivateLink(LinkActivateArgs {
                tunnel_id: self.tunnel_id,
                tunnel_net: self.tunnel_net,
                use_onchain_allocation: self.use_onchain_allocation,
            }),
            accounts,
        )
    }
}
