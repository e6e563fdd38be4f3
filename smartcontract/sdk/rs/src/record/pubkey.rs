use solana_sdk::{hash::hashv, pubkey::Pubkey};

/// Create a 32-byte string seed to be used for creating an account with seed.
pub fn create_record_seed_string(seeds: &[&[u8]]) -> String {
    // The full string is 44-bytes.
    let mut seed = hashv(seeds).to_string();

    // Because create-with-seed only supports 32-byte seeds, we need to
    // truncate the above seed. Using this seed is safe because the likelihood
    // of a collision with another seed truncated to 32 bytes is extremely low.
    seed.truncate(32);

    seed
}

/// Create a deterministic record key from a payer key and a slice of seeds. The
/// payer in this case is the authority allowed to write to the record (since it
/// is this account that originally created the record).
pub fn create_record_key(payer_key: &Pubkey, seeds: &[&[u8]]) -> Pubkey {
    let seed_str = create_record_seed_string(seeds);

    // This operation is safe to unwrap because the seed string above is
    // guaranteed to be 32 bytes.
    Pubkey::create_with_seed(&payer_key, &seed_str, &doublezero_record::ID).unwrap()
}
