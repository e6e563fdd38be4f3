use crate::{
    commands::{
        device::get::GetDeviceCommand, globalconfig::get::GetGlobalConfigCommand,
        globalstate::get::GetGlobalStateCommand,
    },
    DoubleZeroClient,
};
use doublezero_program_common::{types::NetworkV4List, validate_account_code};
use doublezero_serviceability::{
    instructions::DoubleZeroInstruction,
    pda::get_resource_extension_pda,
    processors::device::update::DeviceUpdateArgs,
    resource::ResourceType,
    state::{
        device::{DeviceDesiredStatus, DeviceStatus, DeviceType},
        interface::Interface,
    },
};
use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey, signature::Signature};
use std::net::Ipv4Addr;

#[derive(Debug, PartialEq, Clone)]
pub struct UpdateDeviceCommand {
    pub pubkey: Pubkey,
    pub code: Option<String>,
    pub device_type: Option<DeviceType>,
    pub public_ip: Option<Ipv4Addr>,
    pub dz_prefixes: Option<NetworkV4List>,
    pub metrics_publisher: Option<Pubkey>,
    pub contributor_pk: Option<Pubkey>,
    pub location_pk: Option<Pubkey>,
    pub mgmt_vrf: Option<String>,
    pub interfaces: Option<Vec<Interface>>,
    pub max_users: Option<u16>,
    pub users_count: Option<u16>,
    pub status: Option<DeviceStatus>,
    pub desired_status: Option<DeviceDesiredStatus>,
    pub reference_count: Option<u32>,
    pub max_unicast_users: Option<u16>,
    pub max_multicast_users: Option<u16>,
}

impl UpdateDeviceCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<Signature> {
        let code = self
            .code
            .as_ref()
            .map(|code| {
                validate_account_code(code).map(|mut c| {
                    c.make_ascii_lowercase();
                    c
                })
            })
            .transpose()
            .map_err(|err| eyre::eyre!("invalid code: {err}"))?;
        let (globalstate_pubkey, _globalstate) = GetGlobalStateCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalstate not initialized"))?;

        let (globalconfig_pubkey, _globalconfig) = GetGlobalConfigCommand
            .execute(client)
            .map_err(|_err| eyre::eyre!("Globalconfig not initialized"))?;

        let (device_pubkey, device) = GetDeviceCommand {
            pubkey_or_code: self.pubkey.to_string(),
        }
        .execute(client)
        .map_err(|_err| eyre::eyre!("Device not found"))?;

        let mut extra_accounts = vec![];
        let mut resource_count = 0;
        if let Some(dz_prefixes) = &self.dz_prefixes {
            extra_accounts.push(AccountMeta::new(globalconfig_pubkey, false));
            let old_count = device.dz_prefixes.len();
            let new_count = dz_prefixes.len();
            let max_count = old_count.max(new_count);
            for idx in 0..max_count + 1 {
                let resource_type = match idx {
                    0 => ResourceType::TunnelIds(device_pubkey, 0),
                    _ => ResourceType::DzPrefixBlock(device_pubkey, idx - 1),
                };
                let (pda, _, _) =
                    get_resource_extension_pda(&client.get_program_id(), resource_type);
                extra_accounts.push(AccountMeta::new(pda, false));
            }
            resource_count += max_count + 1;
        }

        client.execute_transaction(
            DoubleZeroInstruction::UpdateDevice(DeviceUpdateArgs {
                code,
                contributor_pk: self.contributor_pk,
                device_type: self.device_type,
                public_ip: self.public_ip,
                dz_prefixes: self.dz_prefixes.clone(),
                metrics_publisher_pk: self.metrics_publisher,
                mgmt_vrf: self.mgmt_vrf.clone(),
                max_users: self.max_users,
                users_count: self.users_count,
                status: self.status,
                desired_status: self.desired_status,
                resource_count,
                reference_count: self.reference_count,
                max_unicast_users: self.max_unicast_users,
                max_multicast_users: self.max_multicast_users,
            }),
            [
                vec![
                    AccountMeta::new(self.pubkey, false),
                    AccountMeta::new(device.contributor_pk, false),
                    AccountMeta::new(device.location_pk, false),
                    AccountMeta::new(self.location_pk.unwrap_or(device.location_pk), false),
                    AccountMeta::new(globalstate_pubkey, false),
                ],
                extra_accounts,
            ]
            .concat(),
        )
    }
}
