use doublezero_program_common::types::NetworkV4;

/// The subset of the ledger's global configuration the controller needs.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub local_asn: u32,
    pub multicast_group_block: NetworkV4,
    pub user_tunnel_block: NetworkV4,
    pub tunnel_tunnel_block: NetworkV4,
}
