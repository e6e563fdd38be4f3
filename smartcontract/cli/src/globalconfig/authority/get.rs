use crate::doublezerocommand::CliCommand;
use clap::Args;
use doublezero_program_common::serializer;
use doublezero_sdk::GetGlobalStateCommand;
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use std::io::Write;
use tabled::{settings::Style, Table, Tabled};

#[derive(Args, Debug)]
pub struct GetAuthorityCliCommand;

#[derive(Tabled, Serialize)]
pub struct AuthorityDisplay {
    #[serde(serialize_with = "serializer::serialize_pubkey_as_string")]
    pub activator_authority: Pubkey,
    #[serde(serialize_with = "serializer::serialize_pubkey_as_string")]
    pub access_authority: Pubkey,
}

impl GetAuthorityCliCommand {
    pub fn execute<C: CliCommand, W: Write>(self, client: &C, out: &mut W) -> eyre::Result<()> {
        let (_, gstate) = client.get_globalstate(GetGlobalStateCommand)?;

        let config_display = AuthorityDisplay {
            activator_authority: gstate.activator_authority_pk,
            access_authority: gstate.sentinel_authority_pk,
        };
        let config_displays = vec![config_display];
        let table = Table::new(config_displays)
            .with(Style::psql().remove_horizontals())
            .to_string();
        writeln!(out, "{table}")?;

        Ok(())
    }
}
