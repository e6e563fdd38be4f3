use crate::{
    error::{GeolocationError, Validate},
    state::accounttype::AccountType,
};
use borsh::BorshSerialize;
use borsh_incremental::BorshDeserializeIncremental;
use core::fmt;
use solana_program::{account_info::AccountInfo, msg, program_error::ProgramError};

#[derive(BorshSerialize, BorshDeserializeIncremental, Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeolocationProgramConfig {
    pub account_type: AccountType,   // 1
    pub bump_seed: u8,               // 1
    pub version: u32,                // 4
    pub min_compatible_version: u32, // 4
}

impl fmt::Display for GeolocationProgramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "account_type: {}, bump_seed: {}, version: {}, min_compatible_version: {}",
            self.account_type, self.bump_seed, self.version, self.min_compatible_version,
        )
    }
}

impl TryFrom<&AccountInfo<'_>> for GeolocationProgramConfig {
    type Error = ProgramError;

    fn try_from(account: &AccountInfo) -> Result<Self, Self::Error> {
        let data = account.try_borrow_data()?;
        let config = Self::try_from(&data[..]).map_err(|e| {
            msg!("Failed to deserialize GeolocationProgramConfig: {}", e);
            ProgramError::InvalidAccountData
        })?;
        if config.account_type != AccountType::ProgramConfig {
            msg!("Invalid account type: {}", config.account_type);
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(config)
    }
}

impl Validate for GeolocationProgramConfig {
    fn validate(&self) -> Result<(), GeolocationError> {
        if self.account_type != AccountType::ProgramConfig {
            msg!("Invalid account type: {}", self.account_type);
            return Err(GeolocationError::InvalidAccountType);
        }
        Ok(())
    }
}
