use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Clone)]
pub struct Tenant {
    pub pubkey: Pubkey,
    pub vrf_id: u16,
    pub metro_routing: bool,
}
