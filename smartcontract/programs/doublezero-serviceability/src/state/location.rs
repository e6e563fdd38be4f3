use crate::{
    error::{DoubleZeroError, Validate},
    helper::msg_err,
    seeds::SEED_LOCATION,
    state::accounttype::*,
};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey};
use std::fmt;

#[repr(u8)]
#[derive(BorshSerialize, BorshDeserialize, Debug, Copy, Clone, PartialEq, Default)]
#[borsh(use_discriminant = true)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationStatus {
    #[default]
    Pending = 0,
    Activated = 1,
    Suspended = 2,
}

impl From<u8> for LocationStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => LocationStatus::Pending,
            1 => LocationStatus::Activated,
            2 => LocationStatus::Suspended,
            _ => LocationStatus::Pending,
        }
    }
}

impl fmt::Display for LocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationStatus::Pending => write!(f, "pending"),
            LocationStatus::Activated => write!(f, "activated"),
            LocationStatus::Suspended => write!(f, "suspended"),
        }
    }
}

#[derive(BorshSerialize, Debug, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub account_type: AccountType, // 1
    #[cfg_attr(
        feature = "serde",
        serde(
            serialize_with = "doublezero_program_common::serializer::serialize_pubkey_as_string",
            deserialize_with = "doublezero_program_common::serializer::deserialize_pubkey_from_string"
        )
    )]
    pub owner: Pubkey, // 32
    pub index: u128,               // 16
    pub bump_seed: u8,             // 1
    pub lat: f64,                  // 8
    pub lng: f64,                  // 8
    pub loc_id: u32,               // 4
    pub status: LocationStatus,    // 1
    pub code: String,              // 4 + len
    pub name: String,              // 4 + len
    pub country: String,           // 4 + len
    pub reference_count: u32,      // 4
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "account_type: {}, owner: {}, index: {}, bump_seed:{}, code: {}, name: {}, country: {} lat: {}, lng: {}, loc_id: {}, status: {}",
            self.account_type, self.owner, self.index, self.bump_seed, self.code, self.name, self.country, self.lat, self.lng, self.loc_id, self.status,
        )
    }
}

impl AccountTypeInfo for Location {
    fn seed(&self) -> &[u8] {
        SEED_LOCATION
    }
    fn size(&self) -> usize {
        1 + 32
            + 16
            + 1
            + 8
            + 8
            + 4
            + 1
            + 4
            + self.code.len()
            + 4
            + self.name.len()
            + 4
            + self.country.len()
            + 4 // reference_count
    }
    fn index(&self) -> u128 {
        self.index
    }
    fn bump_seed(&self) -> u8 {
        self.bump_seed
    }
    fn owner(&self) -> Pubkey {
        self.owner
    }
}

impl TryFrom<&[u8]> for Location {
    type Error = ProgramError;

    fn try_from(mut data: &[u8]) -> Result<Self, Self::Error> {
        let out = Self {
            account_type: BorshDeserialize::deserialize(&mut data)
                .map_err(|e| msg_err(e, "account_type"))
                .unwrap_or_default(),
            owner: BorshDeserialize::deserialize(&mut data)
                .map_err(|e| msg_err(e, "owner"))
                .unwrap_or_default(),
            index: BorshDeserialize::deserialize(&mut data)
                .map_err(|e| msg_err(e, "index"))
                .unwrap_or_default(),
            bump_seed: BorshDeserialize::deserialize(&mut data)
                .map_err(|e| msg_err(e, "bump_seed"))
                .unwrap_or_default(),
            lat: BorshDeserialize::deserialize(&mut data)
                .map_err(|e| msg_err(e, "lat"))
                .unwrap_or_default(),
            lng: BorshDeserialize::deserialize(&mut data)
                .map_err(|e| msg_err(e, "lng"))
                .unwrap_or_default(),
            loc_id: BorshDeserialize::deserialize(&mut data)
                .map_err(|e| msg_err(e, "loc_id"))
                .unwrap_or_default(),
            status: BorshDeserialize::deserialize(&mut data)
                .map_err(|e| msg_err(e, "status"))
                .unwrap_or_default(),
            code: BorshDeserialize::deserialize(&mut data)
                .map_err(|e| msg_err(e, "code"))
                .unwrap_or_default(),
            name: BorshDeserialize::deserialize(&mut data)
                .map_err(|e| msg_err(e, "name"))
                .unwrap_or_default(),
            country: BorshDeserialize::deserialize(&mut data)
                .map_err(|e| msg_err(e, "country"))
                .unwrap_or_default(),
            reference_count: BorshDeserialize::deserialize(&mut data)
                .map_err(|e| msg_err(e, "reference_count"))
                .unwrap_or_default(),
        };

        if out.account_type != AccountType::Location {
            return Err(ProgramError::InvalidAccountData);
        }

        Ok(out)
    }
}

impl TryFrom<&AccountInfo<'_>> for Location {
    type Error = ProgramError;

    fn try_from(account: &AccountInfo) -> Result<Self, Self::Error> {
        let data = account.try_borrow_data()?;
        let res = Self::try_from(&data[..]);
        if res.is_err() {
            msg!("Failed to deserialize Location: {:?}", res.as_ref().err());
        }
        res
    }
}

impl Validate for Location {
    fn validate(&self) -> Result<(), DoubleZeroError> {
        // Account type must be Location
        if self.account_type != AccountType::Location {
            msg!("Invalid account type: {}", self.account_type);
            return Err(DoubleZeroError::InvalidAccountType);
        }
        if self.code.len() > 32 {
            msg!("Code too long: {}", self.code.len());
            return Err(DoubleZeroError::CodeTooLong);
        }
        if self.name.len() > 64 {
            msg!("Name too long: {}", self.name.len());
            return Err(DoubleZeroError::NameTooLong);
        }
        if self.country.len() != 2 {
            msg!("Invalid country code: {}", self.country);
            return Err(DoubleZeroError::InvalidCountryCode);
        }
        if self.lat < -90.0 || self.lat > 90.0 {
            msg!("Invalid latitude: {}", self.lat);
            return Err(DoubleZeroError::InvalidLatitude);
        }
        if self.lng < -180.0 || self.lng > 180.0 {
            msg!("Invalid longitude: {}", self.lng);
            return Err(DoubleZeroError::InvalidLongitude);
        }

        Ok(())
    }
}
