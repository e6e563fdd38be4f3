use crate::{
    doublezerocommand::CliCommand,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
    validators::validate_pubkey_or_code,
};
use clap::Args;
use doublezero_sdk::commands::device::{get::GetDeviceCommand, sethealth::SetDeviceHealthCommand};
use doublezero_serviceability::state::device::DeviceHealth;
use std::io::Write;

#[derive(Args, Debug)]
pub struct SetDeviceHealthCliCommand {
    /// Device Pubkey to update
    #[arg(long, value_parser = validate_pubkey_or_code)]
    pub pubkey: String,

    /// Device Health to set (pending, ready-for-links, ready-for-users, impaired)
    #[arg(long)]
    pub health: DeviceHealth,
}

impl SetDeviceHealthCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let (pubkey, _) = client.get_device(GetDeviceCommand {
            pubkey_or_code: self.pubkey,
        })?;

        let signature = client.set_device_health(SetDeviceHealthCommand {
            pubkey,
            health: self.health,
        })?;
        writeln!(out, "Signature: {signature}",)?;

        Ok(())
    }
}
