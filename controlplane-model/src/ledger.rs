use std::net::Ipv4Addr;

use mockall::automock;
use solana_sdk::pubkey::Pubkey;

use doublezero_program_common::types::NetworkV4;

use crate::errors::Result;
use crate::model::{InterfaceType, LinkStatus, LoopbackType};

/// A ledger interface record, as read off-chain. Mirrors the shape of the
/// on-chain `Interface` account field closely enough to convert directly,
/// without depending on the on-chain program crate's borsh layout.
#[derive(Debug, Clone)]
pub struct RawInterface {
    pub name: String,
    pub interface_type: InterfaceType,
    pub loopback_type: LoopbackType,
    pub prefix: Option<NetworkV4>,
    pub node_segment_idx: u16,
}

#[derive(Debug, Clone)]
pub struct RawDevice {
    pub pubkey: Pubkey,
    pub public_ip: Ipv4Addr,
    pub contributor_pk: Pubkey,
    pub exchange_pk: Pubkey,
    pub location_pk: Pubkey,
    pub mgmt_vrf: String,
    pub local_asn: Option<u32>,
    pub interfaces: Vec<RawInterface>,
}

#[derive(Debug, Clone)]
pub struct RawLink {
    pub pubkey: Pubkey,
    pub side_a_device_pk: Pubkey,
    pub side_a_interface_name: String,
    pub side_z_device_pk: Pubkey,
    pub side_z_interface_name: String,
    pub delay_ns: i64,
    pub delay_override_ns: i64,
    pub status: LinkStatus,
    pub tunnel_net: NetworkV4,
}

#[derive(Debug, Clone)]
pub struct RawUser {
    pub pubkey: Pubkey,
    pub activated: bool,
    pub device_pk: Pubkey,
    pub client_ip: Ipv4Addr,
    pub service_ip: Ipv4Addr,
    pub tunnel_id: u16,
    pub tunnel_net: NetworkV4,
    pub tunnel_endpoint: Option<Ipv4Addr>,
    pub tenant_pk: Option<Pubkey>,
    pub is_multicast: bool,
    pub subscriber_group_pks: Vec<Pubkey>,
    pub publisher_group_pks: Vec<Pubkey>,
}

#[derive(Debug, Clone)]
pub struct RawTenant {
    pub pubkey: Pubkey,
    pub vrf_id: u16,
    pub metro_routing: bool,
}

#[derive(Debug, Clone)]
pub struct RawMulticastGroup {
    pub pubkey: Pubkey,
    pub multicast_ip: Ipv4Addr,
    pub max_bandwidth: u64,
}

#[derive(Debug, Clone)]
pub struct RawExchange {
    pub pubkey: Pubkey,
    pub code: String,
    pub bgp_community: u32,
}

#[derive(Debug, Clone)]
pub struct RawContributor {
    pub pubkey: Pubkey,
    pub code: String,
}

#[derive(Debug, Clone)]
pub struct RawLocation {
    pub pubkey: Pubkey,
    pub code: String,
}

#[derive(Debug, Clone, Default)]
pub struct RawConfig {
    pub local_asn: u32,
    pub multicast_group_block: NetworkV4,
    pub user_tunnel_block: NetworkV4,
    pub tunnel_tunnel_block: NetworkV4,
}

/// The raw fetch result of a single ledger read, prior to any of the
/// derivation performed by the state cache refresher or peer discovery.
#[derive(Debug, Clone, Default)]
pub struct ProgramSnapshot {
    pub devices: Vec<RawDevice>,
    pub users: Vec<RawUser>,
    pub links: Vec<RawLink>,
    pub tenants: Vec<RawTenant>,
    pub exchanges: Vec<RawExchange>,
    pub contributors: Vec<RawContributor>,
    pub locations: Vec<RawLocation>,
    pub multicast_groups: Vec<RawMulticastGroup>,
    pub config: RawConfig,
}

/// The single ledger collaborator both the controller and the telemetry
/// collector depend on. Scoped to exactly the operations named in the
/// external-interfaces contract; no caller reaches for the Solana RPC client
/// directly. Blocking, like `DoubleZeroClient`: callers dispatch it from
/// `tokio::task::spawn_blocking`.
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait LedgerClient: Send + Sync {
    fn program_id(&self) -> Pubkey;

    fn get_program_data(&self) -> Result<ProgramSnapshot>;

    fn get_current_epoch(&self) -> Result<u64>;

    fn initialize_device_latency_samples(
        &self,
        origin: Pubkey,
        target: Pubkey,
        link: Pubkey,
        epoch: u64,
        sampling_interval_us: u64,
    ) -> Result<Pubkey>;

    fn write_device_latency_samples(
        &self,
        account: Pubkey,
        start_timestamp_us: u64,
        samples: &[u32],
    ) -> Result<()>;
}
