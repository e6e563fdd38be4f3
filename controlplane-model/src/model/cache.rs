use std::collections::HashMap;

use solana_sdk::pubkey::Pubkey;

use super::{bgp::BgpPeer, config::Config, device::Device, multicast::MulticastGroup, tenant::Tenant};

/// An immutable snapshot of everything the RPC handler and renderer need.
/// A new snapshot replaces the prior one atomically; readers always observe
/// one coherent generation.
#[derive(Debug, Clone, Default)]
pub struct StateCache {
    pub config: Config,
    pub devices: HashMap<Pubkey, Device>,
    pub multicast_groups: HashMap<Pubkey, MulticastGroup>,
    pub tenants: HashMap<Pubkey, Tenant>,
    pub unicast_vrfs: Vec<u16>,
    pub vpnv4_bgp_peers: Vec<BgpPeer>,
    pub ipv4_bgp_peers: Vec<BgpPeer>,
}

impl StateCache {
    pub fn device(&self, pubkey: &Pubkey) -> Option<&Device> {
        self.devices.get(pubkey)
    }

    /// Builds the sorted VRF list `{1} union {tenant.vrf_id for each tenant}`.
    pub fn build_unicast_vrfs(tenants: &HashMap<Pubkey, Tenant>) -> Vec<u16> {
        let mut vrfs: Vec<u16> = std::iter::once(1)
            .chain(tenants.values().map(|t| t.vrf_id))
            .collect();
        vrfs.sort_unstable();
        vrfs.dedup();
        vrfs
    }
}
