use crate::{utils::parse_pubkey, DoubleZeroClient};
use doublezero_sla_program::state::{
    accountdata::AccountData, accounttype::AccountType, location::Location,
};
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, PartialEq, Clone)]
pub struct GetLocationCommand {
    pub pubkey_or_code: String,
}

impl GetLocationCommand {
    pub fn execute(&self, client: &dyn DoubleZeroClient) -> eyre::Result<(Pubkey, Location)> {
        match parse_pubkey(&self.pubkey_or_code) {
            Some(pk) => match client.get(pk)? {
                AccountData::Location(location) => Ok((pk, location)),
                _ => Err(eyre::eyre!("Invalid Account Type")),
            },
            None => client
                .gets(AccountType::Location)?
                .into_iter()
                .find(|(_, v)| match v {
                    AccountData::Location(location) => location.code == self.pubkey_or_code,
                    _ => false,
                })
                .map(|(pk, v)| match v {
                    AccountData::Location(location) => Ok((pk, location)),
                    _ => Err(eyre::eyre!("Invalid Account Type")),
                })
                .unwrap_or_else(|| {
                    Err(eyre::eyre!(
                        "Location with code {} not found",
                        self.pubkey_or_code
                    ))
                }),
        }
    }
}
