use crate::{
    seeds::SEED_DZ_LATENCY_SAMPLES,
    state::accounttype::{AccountType, AccountTypeInfo},
};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::Serialize;
use solana_program::{account_info::AccountInfo, msg, program_error::ProgramError, pubkey::Pubkey};
use std::fmt;

#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Clone, Serialize)]
pub struct DzLatencySamples {
    pub account_type: AccountType,           // 1
    pub epoch: u64,                          // 8
    pub device_a_pk: Pubkey,                 // 32
    pub device_z_pk: Pubkey,                 // 32
    pub location_a_pk: Pubkey,               // 32
    pub location_z_pk: Pubkey,               // 32
    pub link_pk: Pubkey,                     // 32 (all 1s for internet data)
    pub agent_pk: Pubkey,                    // 32
    pub sampling_interval_microseconds: u64, // 8
    pub start_timestamp_microseconds: u64,   // 8
    pub next_sample_index: u32,              // 4
    pub bump_seed: u8,                       // 1
    pub samples: Vec<u32>,                   // 4 + n*4 (RTT values in microseconds)
}

impl fmt::Display for DzLatencySamples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "account_type: {}, epoch: {}, device_a: {}, device_z: {}, link: {}, agent: {}, samples: {}",
            self.account_type, self.epoch, self.device_a_pk, self.device_z_pk, self.link_pk, self.agent_pk, self.samples.len()
        )
    }
}

impl AccountTypeInfo for DzLatencySamples {
    fn seed(&self) -> &[u8] {
        SEED_DZ_LATENCY_SAMPLES
    }

    fn size(&self) -> usize {
        1 + 8 + 32 + 32 + 32 + 32 + 32 + 32 + 8 + 8 + 4 + 1 + 4 + self.samples.len() * 4
    }

    fn bump_seed(&self) -> u8 {
        self.bump_seed
    }

    /// Owner is the agent pubkey which writes data
    fn owner(&self) -> Pubkey {
        self.agent_pk
    }
}

impl TryFrom<&AccountInfo<'_>> for DzLatencySamples {
    type Error = ProgramError;

    fn try_from(account: &AccountInfo) -> Result<Self, Self::Error> {
        let data = account.try_borrow_data()?;
        Self::try_from_slice(&data).map_err(|e| {
            msg!("Failed to deserialize DzLatencySamples: {}", e);
            ProgramError::InvalidAccountData
        })
    }
}
