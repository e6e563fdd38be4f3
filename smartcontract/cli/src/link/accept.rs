use crate::{
    doublezerocommand::CliCommand,
    poll_for_activation::poll_for_link_activated,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
    validators::validate_pubkey_or_code,
};
use clap::Args;
use doublezero_program_common::validate_iface;
use doublezero_sdk::{
    commands::{
        device::get::GetDeviceCommand,
        link::{accept::AcceptLinkCommand, get::GetLinkCommand},
    },
    InterfaceStatus, InterfaceType,
};
use eyre::eyre;
use std::io::Write;

#[derive(Args, Debug)]
pub struct AcceptLinkCliCommand {
    /// Link Pubkey or code to update
    #[arg(long, value_parser = validate_pubkey_or_code)]
    pub code: String,
    /// Device interface name for side Z.
    #[arg(long, value_parser = validate_iface)]
    pub side_z_interface: String,
    /// Wait for the device to be activated
    #[arg(short, long, default_value_t = false)]
    pub wait: bool,
}

impl AcceptLinkCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let (pubkey, _) = client.get_link(GetLinkCommand {
            pubkey_or_code: self.code.clone(),
        })?;

        let (_, link) = client.get_link(GetLinkCommand {
            pubkey_or_code: pubkey.to_string(),
        })?;

        let (_, device_z) = client.get_device(GetDeviceCommand {
            pubkey_or_code: link.side_z_pk.to_string(),
        })?;

        let side_z_iface = device_z
            .interfaces
            .iter()
            .map(|i| i.into_current_version())
            .find(|i| i.name.to_lowercase() == self.side_z_interface.to_lowercase())
            .ok_or_else(|| {
                eyre!(
                    "Interface '{}' not found on side Z device",
                    self.side_z_interface
                )
            })?;

        if side_z_iface.interface_type != InterfaceType::Physical {
            return Err(eyre!(
                "Interface '{}' on side Z device must be a physical interface",
                self.side_z_interface
            ));
        }

        if side_z_iface.status != InterfaceStatus::Unlinked {
            return Err(eyre!(
                "Interface '{}' on side Z device must be unlinked",
                self.side_z_interface
            ));
        }

        let signature = client.accept_link(AcceptLinkCommand {
            link_pubkey: pubkey,
            side_z_iface_name: self.side_z_interface.clone(),
        })?;
        writeln!(out, "Signature: {signature}",)?;

        if self.wait {
            let device = poll_for_link_activated(client, &pubkey)?;
            writeln!(out, "Status: {0}", device.status)?;
        }

        Ok(())
    }
}
