use crate::{
    device::interface::types,
    doublezerocommand::CliCommand,
    poll_for_activation::poll_for_device_activated,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
    validators::validate_pubkey_or_code,
};
use clap::Args;
use doublezero_program_common::validate_iface;
use doublezero_sdk::commands::device::{
    get::GetDeviceCommand, interface::create::CreateDeviceInterfaceCommand,
};
use std::io::Write;

#[derive(Args, Debug)]
pub struct CreateDeviceInterfaceCliCommand {
    /// Device Pubkey or Code
    #[arg(value_parser = validate_pubkey_or_code, required = true)]
    pub device: String,
    /// Interface name
    #[arg(value_parser = validate_iface, required = true)]
    pub name: String,
    /// Loopback type (if applicable)
    #[arg(long, default_value = "none")]
    pub loopback_type: types::LoopbackType,
    /// VLAN ID (default: 0, i.e. not set)
    #[arg(long, default_value = "0")]
    pub vlan_id: u16,
    /// Can terminate a user tunnel?
    #[arg(long, default_value = "false")]
    pub user_tunnel_endpoint: bool,
    /// Wait for the device to be activated
    #[arg(short, long, default_value_t = false)]
    pub wait: bool,
}

impl CreateDeviceInterfaceCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let (device_pk, device) = client
            .get_device(GetDeviceCommand {
                pubkey_or_code: self.device.clone(),
            })
            .map_err(|_| eyre::eyre!("Device with pubkey/code '{}' not found", self.device))?;

        device
            .interfaces
            .iter()
            .find(|i| i.into_current_version().name == self.name)
            .map_or(Ok(()), |_| {
                Err(eyre::eyre!(
                    "Interface with name '{}' already exists",
                    self.name
                ))
            })?;

        if self.name.starts_with("Loopback") && self.loopback_type == types::LoopbackType::None {
            return Err(eyre::eyre!(
                "Loopback type must be specified for Loopback interface type"
            ));
        }

        if !self.name.starts_with("Loopback") && self.loopback_type != types::LoopbackType::None {
            return Err(eyre::eyre!(
                "Loopback type must be None for Physical interface type"
            ));
        }

        let (signature, _) = client.create_device_interface(CreateDeviceInterfaceCommand {
            pubkey: device_pk,
            name: self.name,
            loopback_type: self.loopback_type.into(),
            vlan_id: self.vlan_id,
            user_tunnel_endpoint: self.user_tunnel_endpoint,
        })?;
        writeln!(out, "Signature: {signature}")?;

        if self.wait {
            let device = poll_for_device_activated(client, &device_pk)?;
            writeln!(out, "Status: {0}", device.status)?;
        }

        Ok(())
    }
}
