//! TODO:
//! - move tests into their own module
//! - potentially split rewards module into more appropriate modules like jito, etc
//! - potentially move ValidatorRewards trait into lib instead of rewards
//! - handle 429 errors
//! - figure out if underlying reqwest lib in solana client be modified to not retry
//! - benchmark expected number of validators for mainnet beta launch and 6 months after
//! - handle DZ epochs once they're defined
use serde::Deserialize;
use solana_client::rpc_config::{RpcBlockConfig, RpcGetVoteAccountsConfig};
use solana_sdk::clock::DEFAULT_SLOTS_PER_EPOCH;
use std::collections::HashMap;
pub mod rewards;

use crate::rewards::ValidatorRewards;

const SLOT_TIME_DURATION_SECONDS: f64 = 0.4;

#[derive(Deserialize, Debug)]
pub struct Reward {
    pub epoch: u64,
    pub validator_id: String,
    pub total: u64,
    pub jito: u64,
    pub inflation: u64,
    pub block: u64,
}

pub async fn get_rewards_between_timestamps(
    fee_payment_calculator: &impl ValidatorRewards,
    rpc_get_vote_accounts_config: RpcGetVoteAccountsConfig,
    rpc_block_config: RpcBlockConfig,
    start_timestamp: u64,
    end_timestamp: u64,
    validator_ids: &[String],
) -> eyre::Result<HashMap<u64, HashMap<String, Reward>>> {
    let mut rewards: HashMap<u64, HashMap<String, Reward>> = HashMap::new();
    let current_slot = fee_payment_calculator.get_slot().await?;
    let block_time = fee_payment_calculator.get_block_time(current_slot).await?;
    let block_time: u64 = block_time as u64;

    let start_epoch = epoch_from_timestamp(block_time, current_slot, start_timestamp)?;
    let end_epoch = epoch_from_timestamp(block_time, current_slot, end_timestamp)?;
    for epoch in start_epoch..=end_epoch {
        let reward = get_total_rewards(
            fee_payment_calculator,
            validator_ids,
            epoch,
            rpc_get_vote_accounts_config.clone(),
            rpc_block_config,
        )
        .await?;
        rewards.insert(epoch, reward);
    }
    Ok(rewards)
}

// this function will return a hashmap of total rewards keyed by validator pubkey
pub async fn get_total_rewards(
    fee_payment_calculator: &impl ValidatorRewards,
    validator_ids: &[String],
    epoch: u64,
    rpc_get_vote_accounts_config: RpcGetVoteAccountsConfig,
    rpc_block_config: RpcBlockConfig,
) -> eyre::Result<HashMap<String, Reward>> {
    let mut validator_rewards: Vec<Reward> = Vec::with_capacity(validator_ids.len());

    let (inflation_rewards, jito_rewards, block_rewards) = tokio::join!(
        rewards::get_inflation_rewards(
            fee_payment_calculator,
            validator_ids,
            epoch,
            rpc_get_vote_accounts_config,
        ),
        rewards::get_jito_rewards(fee_payment_calculator, validator_ids, epoch),
        rewards::get_block_rewards(
            fee_payment_calculator,
            validator_ids,
            epoch,
            rpc_block_config
        )
    );

    let inflation_rewards = inflation_rewards?;
    let jito_rewards = jito_rewards?;
    let block_rewards = block_rewards?;

    for validator_id in validator_ids {
        let mut total_reward: u64 = 0;
        let jito_reward = jito_rewards.get(validator_id).cloned().unwrap_or_default();
        let inflation_reward = inflation_rewards
            .get(validator_id)
            .cloned()
            .unwrap_or_default();
        let block_reward = block_rewards.get(validator_id).cloned().unwrap_or_default();

        total_reward += inflation_reward + block_reward + jito_reward;
        let rewards = Reward {
            validator_id: validator_id.to_string(),
            jito: jito_reward,
            inflation: inflation_reward,
            total: total_reward,
            block: block_reward,
            epoch,
        };
        validator_rewards.push(rewards);
    }
    let rewards: HashMap<String, Reward> = validator_ids
        .iter()
        .cloned()
        .zip(validator_rewards)
        .collect();
    Ok(rewards)
}

// get the number of slots by subtracting the timestamp from the block time and dividing it by the time per slot
// get the desired slot by subtracting the num_slots from the current_slot
// then get the epoch by dividing the desired_slot by the DEFAULT_SLOTS_PER_EPOCH
// NOTE: This can change if solana changes
fn epoch_from_timestamp(block_time: u64, current_slot: u64, timestamp: u64) -> eyre::Result<u64> {
    if timestamp > block_time {
        return Err(eyre::eyre!(
            "timestamp cannot be greater than block_time: {timestamp}, {block_time}"
        ));
    }
    let num_slots: u64 = ((block_time - timestamp) as f64 / SLOT_TIME_DURATION_SECONDS) as u64;
    let desired_slot = current_slot - num_slots;
    // epoch
    Ok(desired_slot / DEFAULT_SLOTS_PER_EPOCH)
}
