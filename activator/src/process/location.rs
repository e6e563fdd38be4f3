use std::collections::HashMap;

use doublezero_sdk::Location;
use solana_sdk::pubkey::Pubkey;

pub fn process_location_event(
    pubkey: &Pubkey,
    locations: &mut HashMap<Pubkey, Location>,
    location: &Location,
) {
    locations.insert(*pubkey, location.clone());
}
