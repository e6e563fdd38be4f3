use std::collections::HashMap;

use doublezero_sdk::Exchange;
use solana_sdk::pubkey::Pubkey;

pub fn process_exchange_event(
    pubkey: &Pubkey,
    exchanges: &mut HashMap<Pubkey, Exchange>,
    exchange: &Exchange,
) {
    exchanges.insert(*pubkey, exchange.clone());
}
