use crate::{
    commands::{device::get::GetDeviceCommand, globalstate::get::GetGlobalStateCommand},
    DoubleZeroClient,
};
use doublezero_program_common::types::network_v4::NetworkV4;
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction,
    processors::device::interface::create::DeviceInterfaceCreateArgs,
    state::interface::{InterfaceCYOA, InterfaceDIA, LoopbackType, RoutingMode},
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};

#[derive(Debug, PartialEq, Clone)]
pub struct CreateDeviceInterfaceCommand {
    pub pubkey: Pubkey,
    pub name: String,
    pub ip_net: Option<NetworkV4>,
    pub interface_cyoa: InterfaceCYOA,
    pub loopback_type: LoopbackType,
    pub interface_dia: InterfaceDIA,
    pub bandwidth: u64,
    pub cir: u64,
    pub mtu: u16,
    pub routing_mode: RoutingMode,
    pub vlan_id: u16,
    pub user_tunnel_endpoint: bool,
}

impl CreateDeviceInterfaceCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<(Signature, Pubkey)> {
        let (globalstate_pubkey, _) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        let (device_pubkey, device) = GetDeviceCommand {
            pubkey_or_code: self.pubkey.to_string(),
        }
        .execute(client)?;

        client
            .execute_transaction(
                DoubleZeroInstruction::CreateDeviceInterface(DeviceInterfaceCreateArgs {
                    name: self.name.clone(),
                    loopback_type: self.loopback_type,
                    interface_cyoa: self.interface_cyoa,
                    interface_dia: self.interface_dia,
                    bandwidth: self.bandwidth,
                    cir: self.cir,
                    ip_net: self.ip_net,
                    mtu: self.mtu,
                    routing_mode: self.routing_mode,
                    vlan_id: self.vlan_id,
                    user_tunnel_endpoint: self.user_tunnel_endpoint,
                }),
                vec![
                    AccountMeta::new(device_pubkey, false),
                    AccountMeta::new(device.contributor_pk, false),
                    AccountMeta::new(globalstate_pubkey, false),
                ],
            )
            .map(|sig| (sig, device_pubkey))
    }
}
