use crate::{commands::globalstate::get::GetGlobalStateCommand, DoubleZeroClient};
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction, pda::get_resource_extension_pda,
    processors::device::interface::DeviceInterfaceRemoveArgs, resource::ResourceType,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

#[derive(Debug, PartialEq, Clone)]
pub struct RemoveDeviceInterfaceCommand {
    pub pubkey: Pubkey,
    pub name: String,
    pub use_onchain_allocation: bool,
}

impl RemoveDeviceInterfaceCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        let mut accounts = vec![
            AccountMeta::new(self.pubkey, false),
            AccountMeta::new(globalstate_pubkey, false),
        ];

        if self.use_onchain_allocation {
            let (link_ips_pda, _, _) = get_resource_extension_pda(
                &client.get_program_id(),
                ResourceType::DeviceTunnelBlock,
            );
            let (segment_routing_id_pda, _, _) = get_resource_extension_pda(
                &client.get_program_id(),
                ResourceType::SegmentRoutingIds,
            );
            accounts.push(AccountMeta::new(link_ips_pda, false));
            accounts.push(AccountMeta::new(segment_routing_id_pda, false));
        }

        client.execute_transaction(
            DoubleZeroInstruction::RemoveDeviceInterface(DeviceInterfaceRemoveArgs {
                name: self.name.clone(),
            }),
            accounts,
        )
    }
}
