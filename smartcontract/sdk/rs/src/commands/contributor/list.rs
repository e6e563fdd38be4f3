use crate::DoubleZeroClient;
use doublezero_serviceability::{
    error::DoubleZeroError,
    state::{accountdata::AccountData, accounttype::AccountType, contributor::Contributor},
};
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;

#[derive(Debug, PartialEq, Clone)]
pub struct ListContributorCommand {}

impl ListContributorCommand {
    pub fn execute(
        &self,
        client: &dyn DoubleZeroClient,
    ) -> eyre::Result<HashMap<Pubkey, Contributor>> {
        client
            .gets(AccountType::Contributor)?
            .into_iter()
            .map(|(k, v)| match v {
                AccountData::Contributor(contributor) => Ok((k, contributor)),
                _ => Err(DoubleZeroError::InvalidAccountType.into()),
            })
            .collect()
    }
}
