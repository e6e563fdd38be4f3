use super::ResourceType;
use crate::{
    doublezerocommand::CliCommand,
    requirements::{CHECK_BALANCE, CHECK_ID_JSON},
};
use clap::Args;
use doublezero_sdk::commands::resource::{
    closeaccount::CloseResourceCommand, get::GetResourceCommand,
};
use std::io::Write;

#[derive(Args, Debug)]
pub struct CloseResourceCliCommand {
    // Type of resource extension to allocate
    #[arg(long)]
    pub resource_type: ResourceType,
    // Associated public key (only for DzPrefixBlock)
    #[arg(long)]
    pub associated_pubkey: Option<String>,
    // Index (only for DzPrefixBlock)
    #[arg(long)]
    pub index: Option<usize>,
}

impl CloseResourceCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        // Check requirements
        client.check_requirements(CHECK_ID_JSON | CHECK_BALANCE)?;

        let resource_type = super::resource_type_from(
            self.resource_type,
            self.associated_pubkey.as_ref().and_then(|s| s.parse().ok()),
            self.index,
        );

        let (_, _) = client
            .get_resource(GetResourceCommand { resource_type })
            .map_err(|_| eyre::eyre!("Resource not found"))?;

        let signature = client.close_resource(CloseResourceCommand { resource_type })?;
        writeln!(out, "Signature: {signature}",)?;

        Ok(())
    }
}
