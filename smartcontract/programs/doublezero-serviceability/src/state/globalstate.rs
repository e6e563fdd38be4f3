use crate::{
    error::{DoubleZeroError, Validate},
    helper::deserialize_vec_with_capacity,
    state::accounttype::AccountType,
};
use borsh::{BorshDeserialize, BorshSerialize};
use core::fmt;
use solana_program::{account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey};

#[derive(BorshSerialize, Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalState {
    pub account_type: AccountType,         // 1
    pub bump_seed: u8,                     // 1
    pub account_index: u128,               // 16
    pub foundation_allowlist: Vec<Pubkey>, // 4 + 32 * len
    // The list of device pubkeys was migrated to the Contributor structure,
    // which has an owner and is responsible for managing devices and links.
    pub _device_allowlist: Vec<Pubkey>, // 4 + 32 * len
    // Note: This list of pubkeys is no longer used.
    // The access control logic has been migrated to AccessPasses,
    // which now act as the canonical mechanism for authorization.
    pub _user_allowlist: Vec<Pubkey>, // 4 + 32 * len
    // Authorities and settings
    pub activator_authority_pk: Pubkey,    // 32
    pub sentinel_authority_pk: Pubkey,     // 32
    pub contributor_airdrop_lamports: u64, // 8
    pub user_airdrop_lamports: u64,        // 8
    pub health_oracle_pk: Pubkey,          // 32
    pub qa_allowlist: Vec<Pubkey>,         // 4 + 32 * len
}

impl Default for GlobalState {
    fn default() -> Self {
        Self {
            account_type: AccountType::GlobalState,
            bump_seed: 0,
            account_index: 0,
            foundation_allowlist: Vec::new(),
            _device_allowlist: Vec::new(),
            _user_allowlist: Vec::new(),
            activator_authority_pk: Pubkey::default(),
            sentinel_authority_pk: Pubkey::default(),
            contributor_airdrop_lamports: 0,
            user_airdrop_lamports: 0,
            health_oracle_pk: Pubkey::default(),
            qa_allowlist: Vec::new(),
        }
    }
}

impl fmt::Display for GlobalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "account_type: {}, \
account_index: {}, \
foundation_allowlist: {:?}, \
device_allowlist: {:?}, \
user_allowlist: {:?}, \
activator_authority_pk: {:?}, \
sentinel_authority_pk: {:?}, \
contributor_airdrop_lamports: {}, \
user_airdrop_lamports: {},
health_oracle_pk: {:?}",
            self.account_type,
            self.account_index,
            self.foundation_allowlist,
            self._device_allowlist,
            self._user_allowlist,
            self.activator_authority_pk,
            self.sentinel_authority_pk,
            self.contributor_airdrop_lamports,
            self.user_airdrop_lamports,
            self.health_oracle_pk,
        )
    }
}

impl TryFrom<&[u8]> for GlobalState {
    type Error = ProgramError;

    fn try_from(mut data: &[u8]) -> Result<Self, Self::Error> {
        let out = Self {
            account_type: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            bump_seed: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            account_index: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            foundation_allowlist: deserialize_vec_with_capacity(&mut data)?,
            _device_allowlist: deserialize_vec_with_capacity(&mut data)?,
            _user_allowlist: deserialize_vec_with_capacity(&mut data)?,
            activator_authority_pk: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            sentinel_authority_pk: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            contributor_airdrop_lamports: BorshDeserialize::deserialize(&mut data)
                .unwrap_or_default(),
            user_airdrop_lamports: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            health_oracle_pk: BorshDeserialize::deserialize(&mut data).unwrap_or_default(),
            qa_allowlist: deserialize_vec_with_capacity(&mut data).unwrap_or_default(),
        };

        if out.account_type != AccountType::GlobalState {
            return Err(ProgramError::InvalidAccountData);
        }

        Ok(out)
    }
}

impl TryFrom<&AccountInfo<'_>> for GlobalState {
    type Error = ProgramError;

    fn try_from(account: &AccountInfo) -> Result<Self, Self::Error> {
        let data = account.try_borrow_data()?;
        let res = Self::try_from(&data[..]);
        if res.is_err() {
            msg!(
                "Failed to deserialize GlobalState: {:?}",
                res.as_ref().err()
            );
        }
        res
    }
}

impl Validate for GlobalState {
    fn validate(&self) -> Result<(), DoubleZeroError> {
        if self.account_type != AccountType::GlobalState {
            msg!("Invalid account type: {}", self.account_type);
            return Err(DoubleZeroError::InvalidAccountType);
        }

        if self.foundation_allowlist.is_empty() {
            msg!("Foundation allowlist cannot be empty");
            return Err(DoubleZeroError::InvalidFoundationAllowlist);
        }

        Ok(())
    }
}
