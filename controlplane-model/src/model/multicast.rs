use std::net::Ipv4Addr;

use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Clone)]
pub struct MulticastGroup {
    pub pubkey: Pubkey,
    pub multicast_ip: Ipv4Addr,
    pub max_bandwidth: u64,
}
