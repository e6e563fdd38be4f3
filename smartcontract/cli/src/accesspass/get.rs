use crate::doublezerocommand::CliCommand;
use clap::Args;
use doublezero_sdk::commands::{
    accesspass::get::GetAccessPassCommand, multicastgroup::list::ListMulticastGroupCommand,
    tenant::list::ListTenantCommand,
};
use solana_sdk::pubkey::Pubkey;
use std::{io::Write, net::Ipv4Addr};

#[derive(Args, Debug)]
pub struct GetAccessPassCliCommand {
    /// Client IP address
    #[arg(long)]
    pub client_ip: Ipv4Addr,
    /// User payer public key
    #[arg(long)]
    pub user_payer: Pubkey,
}

impl GetAccessPassCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let epoch = client.get_epoch()?;

        let (pubkey, accesspass) = client
            .get_accesspass(GetAccessPassCommand {
                client_ip: self.client_ip,
                user_payer: self.user_payer,
            })?
            .ok_or_else(|| eyre::eyre!("Access Pass not found"))?;

        let mgroups = client.list_multicastgroup(ListMulticastGroupCommand {})?;
        let tenants = client.list_tenant(ListTenantCommand {})?;

        let tenant_display: Vec<String> = accesspass
            .tenant_allowlist
            .iter()
            .filter(|pk| **pk != Pubkey::default())
            .map(|pk| tenants.get(pk).map_or(pk.to_string(), |t| t.code.clone()))
            .collect();

        let pub_display: Vec<String> = accesspass
            .mgroup_pub_allowlist
            .iter()
            .map(|pk| mgroups.get(pk).map_or(pk.to_string(), |mg| mg.code.clone()))
            .collect();

        let sub_display: Vec<String> = accesspass
            .mgroup_sub_allowlist
            .iter()
            .map(|pk| mgroups.get(pk).map_or(pk.to_string(), |mg| mg.code.clone()))
            .collect();

        let remaining_epoch = if accesspass.last_access_epoch == u64::MAX {
            "MAX".to_string()
        } else {
            accesspass
                .last_access_epoch
                .saturating_sub(epoch)
                .to_string()
        };

        let last_access_epoch = if accesspass.last_access_epoch == u64::MAX {
            "MAX".to_string()
        } else {
            accesspass.last_access_epoch.to_string()
        };

        writeln!(out, "account: {pubkey}")?;
        writeln!(out, "type: {}", accesspass.accesspass_type)?;
        writeln!(out, "client_ip: {}", accesspass.client_ip)?;
        writeln!(out, "user_payer: {}", accesspass.user_payer)?;
        writeln!(out, "tenant: {}", tenant_display.join(", "))?;
        writeln!(out, "multicast_pub: {}", pub_display.join(", "))?;
        writeln!(out, "multicast_sub: {}", sub_display.join(", "))?;
        writeln!(out, "last_access_epoch: {last_access_epoch}")?;
        writeln!(out, "remaining_epoch: {remaining_epoch}")?;
        writeln!(out, "flags: {}", accesspass.flags_string())?;
        writeln!(out, "connections: {}", accesspass.connection_count)?;
        writeln!(out, "status: {}", accesspass.status)?;
        writeln!(out, "owner: {}", accesspass.owner)?;

        Ok(())
    }
}
