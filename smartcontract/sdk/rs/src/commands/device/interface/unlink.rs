use crate::{
    commands::{globalstate::get::GetGlobalStateCommand, link::list::ListLinkCommand},
    DoubleZeroClient,
};
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction, processors::device::interface::DeviceInterfaceUnlinkArgs,
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

#[derive(Debug, PartialEq, Clone)]
pub struct UnlinkDeviceInterfaceCommand {
    pub pubkey: Pubkey,
    pub name: String,
}

impl UnlinkDeviceInterfaceCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        let mut accounts = vec![
            AccountMeta::new(self.pubkey, false),
            AccountMeta::new(globalstate_pubkey, false),
        ];

        // Look up any link that references this device + interface and pass it
        // so the onchain program can validate link status for Activated interfaces.
        if let Ok(links) = ListLinkCommand.execute(client) {
            if let Some((link_pubkey, _)) = links.iter().find(|(_, link)| {
                (link.side_a_pk == self.pubkey
                    && link.side_a_iface_name.eq_ignore_ascii_case(&self.name))
                    || (link.side_z_pk == self.pubkey
                        && link.side_z_iface_name.eq_ignore_ascii_case(&self.name))
            }) {
                accounts.push(AccountMeta::new(*link_pubkey, false));
            }
        }

        client.execute_transaction(
            DoubleZeroInstruction::UnlinkDeviceInterface(DeviceInterfaceUnlinkArgs {
                name: self.name.clone(),
            }),
            accounts,
        )
    }
}
