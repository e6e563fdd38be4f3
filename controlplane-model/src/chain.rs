//! Minimal, read-only mirror of the on-chain account layouts this collaborator
//! needs. The on-chain programs themselves (and the wire format they use to
//! persist account data) are out of scope here — this module only carries
//! enough of that layout, in borsh field order, to decode a `GetProgramAccounts`
//! response and to build the two telemetry write instructions. It deliberately
//! does not depend on the on-chain program crates: their instruction
//! processors, PDA bump-seed bookkeeping, and validation rules belong to a
//! different boundary than a ledger reader.

use std::net::Ipv4Addr;

use borsh::{BorshDeserialize, BorshSerialize};
use sha2::{Digest, Sha256};
use solana_sdk::pubkey::Pubkey;

use doublezero_program_common::types::{NetworkV4, NetworkV4List};

#[repr(u8)]
#[derive(BorshDeserialize, BorshSerialize, Debug, Copy, Clone, PartialEq, Eq)]
#[borsh(use_discriminant = true)]
pub enum AccountType {
    None = 0,
    GlobalState = 1,
    Config = 2,
    Location = 3,
    Exchange = 4,
    Device = 5,
    Link = 6,
    User = 7,
    MulticastGroup = 8,
    ProgramConfig = 9,
    Contributor = 10,
    AccessPass = 11,
}

#[repr(u8)]
#[derive(BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[borsh(use_discriminant = true)]
pub enum DeviceStatus {
    #[default]
    Pending = 0,
    Activated = 1,
    Suspended = 2,
    Deleting = 3,
    Rejected = 4,
}

#[repr(u8)]
#[derive(BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[borsh(use_discriminant = true)]
pub enum DeviceType {
    #[default]
    Switch = 0,
}

#[repr(u8)]
#[derive(BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[borsh(use_discriminant = true)]
pub enum InterfaceType {
    #[default]
    Invalid = 0,
    Loopback = 1,
    Physical = 2,
}

#[repr(u8)]
#[derive(BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[borsh(use_discriminant = true)]
pub enum LoopbackType {
    #[default]
    None = 0,
    Vpnv4 = 1,
    Ipv4 = 2,
    PimRpAddr = 3,
    Reserved = 4,
}

#[repr(u8)]
#[derive(BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[borsh(use_discriminant = true)]
pub enum InterfaceVersion {
    #[default]
    Unsupported = 0,
    V1 = 1,
}

#[derive(BorshDeserialize, Debug, Clone, PartialEq)]
pub struct Interface {
    pub version: InterfaceVersion,
    pub name: String,
    pub interface_type: InterfaceType,
    pub loopback_type: LoopbackType,
    pub vlan_id: u16,
    pub ip_net: NetworkV4,
    pub node_segment_idx: u16,
    pub user_tunnel_endpoint: bool,
}

#[derive(Debug, Clone)]
pub struct Device {
    pub account_type: AccountType,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub location_pk: Pubkey,
    pub exchange_pk: Pubkey,
    pub device_type: DeviceType,
    pub public_ip: Ipv4Addr,
    pub status: DeviceStatus,
    pub code: String,
    pub dz_prefixes: NetworkV4List,
    pub metrics_publisher_pk: Pubkey,
    pub contributor_pk: Pubkey,
    pub mgmt_vrf: String,
    pub interfaces: Vec<Interface>,
    pub reference_count: u32,
}

impl TryFrom<&[u8]> for Device {
    type Error = std::io::Error;

    fn try_from(mut data: &[u8]) -> Result<Self, Self::Error> {
        let out = Self {
            account_type: BorshDeserialize::deserialize(&mut data)?,
            owner: BorshDeserialize::deserialize(&mut data)?,
            index: BorshDeserialize::deserialize(&mut data)?,
            bump_seed: BorshDeserialize::deserialize(&mut data)?,
            location_pk: BorshDeserialize::deserialize(&mut data)?,
            exchange_pk: BorshDeserialize::deserialize(&mut data)?,
            device_type: BorshDeserialize::deserialize(&mut data)?,
            public_ip: BorshDeserialize::deserialize(&mut data)?,
            status: BorshDeserialize::deserialize(&mut data)?,
            code: BorshDeserialize::deserialize(&mut data)?,
            dz_prefixes: BorshDeserialize::deserialize(&mut data)?,
            metrics_publisher_pk: BorshDeserialize::deserialize(&mut data)?,
            contributor_pk: BorshDeserialize::deserialize(&mut data)?,
            mgmt_vrf: BorshDeserialize::deserialize(&mut data)?,
            interfaces: BorshDeserialize::deserialize(&mut data)?,
            reference_count: BorshDeserialize::deserialize(&mut data)?,
        };
        if out.account_type != AccountType::Device {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "not a Device account",
            ));
        }
        Ok(out)
    }
}

#[repr(u8)]
#[derive(BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[borsh(use_discriminant = true)]
pub enum LinkLinkType {
    #[default]
    WAN = 1,
    DZX = 127,
}

#[repr(u8)]
#[derive(BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[borsh(use_discriminant = true)]
pub enum LinkStatus {
    #[default]
    Pending = 0,
    Activated = 1,
    Deleting = 3,
    Rejected = 4,
    Requested = 5,
    HardDrained = 6,
    SoftDrained = 7,
    Provisioning = 8,
}

#[repr(u8)]
#[derive(BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[borsh(use_discriminant = true)]
pub enum LinkDesiredStatus {
    #[default]
    Pending = 0,
    Activated = 1,
    HardDrained = 6,
    SoftDrained = 7,
}

#[repr(u8)]
#[derive(BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[borsh(use_discriminant = true)]
pub enum LinkHealth {
    Unknown = 0,
    #[default]
    Pending = 1,
    ReadyForService = 2,
    Impaired = 3,
}

#[derive(Debug, Clone)]
pub struct Link {
    pub account_type: AccountType,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub side_a_pk: Pubkey,
    pub side_z_pk: Pubkey,
    pub link_type: LinkLinkType,
    pub bandwidth: u64,
    pub mtu: u32,
    pub delay_ns: u64,
    pub jitter_ns: u64,
    pub tunnel_id: u16,
    pub tunnel_net: NetworkV4,
    pub status: LinkStatus,
    pub code: String,
    pub contributor_pk: Pubkey,
    pub side_a_iface_name: String,
    pub side_z_iface_name: String,
    pub delay_override_ns: u64,
    pub link_health: LinkHealth,
    pub desired_status: LinkDesiredStatus,
}

impl TryFrom<&[u8]> for Link {
    type Error = std::io::Error;

    fn try_from(mut data: &[u8]) -> Result<Self, Self::Error> {
        let out = Self {
            account_type: BorshDeserialize::deserialize(&mut data)?,
            owner: BorshDeserialize::deserialize(&mut data)?,
            index: BorshDeserialize::deserialize(&mut data)?,
            bump_seed: BorshDeserialize::deserialize(&mut data)?,
            side_a_pk: BorshDeserialize::deserialize(&mut data)?,
            side_z_pk: BorshDeserialize::deserialize(&mut data)?,
            link_type: BorshDeserialize::deserialize(&mut data)?,
            bandwidth: BorshDeserialize::deserialize(&mut data)?,
            mtu: BorshDeserialize::deserialize(&mut data)?,
            delay_ns: BorshDeserialize::deserialize(&mut data)?,
            jitter_ns: BorshDeserialize::deserialize(&mut data)?,
            tunnel_id: BorshDeserialize::deserialize(&mut data)?,
            tunnel_net: BorshDeserialize::deserialize(&mut data)?,
            status: BorshDeserialize::deserialize(&mut data)?,
            code: BorshDeserialize::deserialize(&mut data)?,
            contributor_pk: BorshDeserialize::deserialize(&mut data)?,
            side_a_iface_name: BorshDeserialize::deserialize(&mut data)?,
            side_z_iface_name: BorshDeserialize::deserialize(&mut data)?,
            delay_override_ns: BorshDeserialize::deserialize(&mut data)?,
            link_health: BorshDeserialize::deserialize(&mut data)?,
            desired_status: BorshDeserialize::deserialize(&mut data)?,
        };
        if out.account_type != AccountType::Link {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "not a Link account",
            ));
        }
        Ok(out)
    }
}

#[repr(u8)]
#[derive(BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[borsh(use_discriminant = true)]
pub enum UserType {
    #[default]
    IBRL = 0,
    IBRLWithAllocatedIP = 1,
    EdgeFiltering = 2,
    Multicast = 3,
}

#[repr(u8)]
#[derive(BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[borsh(use_discriminant = true)]
pub enum UserCYOA {
    #[default]
    None = 0,
    GREOverDIA = 1,
    GREOverFabric = 2,
    GREOverPrivatePeering = 3,
    GREOverPublicPeering = 4,
    GREOverCable = 5,
}

#[repr(u8)]
#[derive(BorshDeserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[borsh(use_discriminant = true)]
pub enum UserStatus {
    #[default]
    Pending = 0,
    Activated = 1,
    SuspendedDeprecated = 2,
    Deleting = 3,
    Rejected = 4,
    PendingBan = 5,
    Banned = 6,
    Updating = 7,
    OutOfCredits = 8,
}

#[derive(Debug, Clone)]
pub struct User {
    pub account_type: AccountType,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub user_type: UserType,
    pub tenant_pk: Pubkey,
    pub device_pk: Pubkey,
    pub cyoa_type: UserCYOA,
    pub client_ip: Ipv4Addr,
    pub dz_ip: Ipv4Addr,
    pub tunnel_id: u16,
    pub tunnel_net: NetworkV4,
    pub status: UserStatus,
    pub publishers: Vec<Pubkey>,
    pub subscribers: Vec<Pubkey>,
    pub validator_pubkey: Pubkey,
    pub tunnel_endpoint: Ipv4Addr,
}

impl TryFrom<&[u8]> for User {
    type Error = std::io::Error;

    fn try_from(mut data: &[u8]) -> Result<Self, Self::Error> {
        let out = Self {
            account_type: BorshDeserialize::deserialize(&mut data)?,
            owner: BorshDeserialize::deserialize(&mut data)?,
            index: BorshDeserialize::deserialize(&mut data)?,
            bump_seed: BorshDeserialize::deserialize(&mut data)?,
            user_type: BorshDeserialize::deserialize(&mut data)?,
            tenant_pk: BorshDeserialize::deserialize(&mut data)?,
            device_pk: BorshDeserialize::deserialize(&mut data)?,
            cyoa_type: BorshDeserialize::deserialize(&mut data)?,
            client_ip: BorshDeserialize::deserialize(&mut data)?,
            dz_ip: BorshDeserialize::deserialize(&mut data)?,
            tunnel_id: BorshDeserialize::deserialize(&mut data)?,
            tunnel_net: BorshDeserialize::deserialize(&mut data)?,
            status: BorshDeserialize::deserialize(&mut data)?,
            publishers: BorshDeserialize::deserialize(&mut data)?,
            subscribers: BorshDeserialize::deserialize(&mut data)?,
            validator_pubkey: BorshDeserialize::deserialize(&mut data)?,
            // Absent on accounts written before the tunnel-endpoint field existed.
            tunnel_endpoint: BorshDeserialize::deserialize(&mut data)
                .unwrap_or(Ipv4Addr::UNSPECIFIED),
        };
        if out.account_type != AccountType::User {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "not a User account",
            ));
        }
        Ok(out)
    }
}

#[derive(Debug, Clone)]
pub struct Exchange {
    pub account_type: AccountType,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub lat: f64,
    pub lng: f64,
    pub bgp_community: u16,
    pub unused: u16,
    pub status: u8,
    pub code: String,
    pub name: String,
    pub reference_count: u32,
    pub device1_pk: Pubkey,
    pub device2_pk: Pubkey,
}

impl TryFrom<&[u8]> for Exchange {
    type Error = std::io::Error;

    fn try_from(mut data: &[u8]) -> Result<Self, Self::Error> {
        let out = Self {
            account_type: BorshDeserialize::deserialize(&mut data)?,
            owner: BorshDeserialize::deserialize(&mut data)?,
            index: BorshDeserialize::deserialize(&mut data)?,
            bump_seed: BorshDeserialize::deserialize(&mut data)?,
            lat: BorshDeserialize::deserialize(&mut data)?,
            lng: BorshDeserialize::deserialize(&mut data)?,
            bgp_community: BorshDeserialize::deserialize(&mut data)?,
            unused: BorshDeserialize::deserialize(&mut data)?,
            status: BorshDeserialize::deserialize(&mut data)?,
            code: BorshDeserialize::deserialize(&mut data)?,
            name: BorshDeserialize::deserialize(&mut data)?,
            reference_count: BorshDeserialize::deserialize(&mut data)?,
            device1_pk: BorshDeserialize::deserialize(&mut data)?,
            device2_pk: BorshDeserialize::deserialize(&mut data)?,
        };
        if out.account_type != AccountType::Exchange {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "not an Exchange account",
            ));
        }
        Ok(out)
    }
}

#[derive(Debug, Clone)]
pub struct Contributor {
    pub account_type: AccountType,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub status: u8,
    pub code: String,
    pub reference_count: u32,
}

impl TryFrom<&[u8]> for Contributor {
    type Error = std::io::Error;

    fn try_from(mut data: &[u8]) -> Result<Self, Self::Error> {
        let out = Self {
            account_type: BorshDeserialize::deserialize(&mut data)?,
            owner: BorshDeserialize::deserialize(&mut data)?,
            index: BorshDeserialize::deserialize(&mut data)?,
            bump_seed: BorshDeserialize::deserialize(&mut data)?,
            status: BorshDeserialize::deserialize(&mut data)?,
            code: BorshDeserialize::deserialize(&mut data)?,
            reference_count: BorshDeserialize::deserialize(&mut data)?,
        };
        if out.account_type != AccountType::Contributor {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "not a Contributor account",
            ));
        }
        Ok(out)
    }
}

#[derive(Debug, Clone)]
pub struct Location {
    pub account_type: AccountType,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub lat: f64,
    pub lng: f64,
    pub loc_id: u32,
    pub status: u8,
    pub code: String,
    pub name: String,
    pub country: String,
    pub reference_count: u32,
}

impl TryFrom<&[u8]> for Location {
    type Error = std::io::Error;

    fn try_from(mut data: &[u8]) -> Result<Self, Self::Error> {
        let out = Self {
            account_type: BorshDeserialize::deserialize(&mut data)?,
            owner: BorshDeserialize::deserialize(&mut data)?,
            index: BorshDeserialize::deserialize(&mut data)?,
            bump_seed: BorshDeserialize::deserialize(&mut data)?,
            lat: BorshDeserialize::deserialize(&mut data)?,
            lng: BorshDeserialize::deserialize(&mut data)?,
            loc_id: BorshDeserialize::deserialize(&mut data)?,
            status: BorshDeserialize::deserialize(&mut data)?,
            code: BorshDeserialize::deserialize(&mut data)?,
            name: BorshDeserialize::deserialize(&mut data)?,
            country: BorshDeserialize::deserialize(&mut data)?,
            reference_count: BorshDeserialize::deserialize(&mut data)?,
        };
        if out.account_type != AccountType::Location {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "not a Location account",
            ));
        }
        Ok(out)
    }
}

#[derive(Debug, Clone)]
pub struct MulticastGroup {
    pub account_type: AccountType,
    pub owner: Pubkey,
    pub index: u128,
    pub bump_seed: u8,
    pub tenant_pk: Pubkey,
    pub multicast_ip: Ipv4Addr,
    pub max_bandwidth: u64,
    pub status: u8,
    pub code: String,
    pub pub_allowlist: Vec<Pubkey>,
    pub sub_allowlist: Vec<Pubkey>,
    pub publishers: Vec<Pubkey>,
    pub subscribers: Vec<Pubkey>,
}

impl TryFrom<&[u8]> for MulticastGroup {
    type Error = std::io::Error;

    fn try_from(mut data: &[u8]) -> Result<Self, Self::Error> {
        let out = Self {
            account_type: BorshDeserialize::deserialize(&mut data)?,
            owner: BorshDeserialize::deserialize(&mut data)?,
            index: BorshDeserialize::deserialize(&mut data)?,
            bump_seed: BorshDeserialize::deserialize(&mut data)?,
            tenant_pk: BorshDeserialize::deserialize(&mut data)?,
            multicast_ip: BorshDeserialize::deserialize(&mut data)?,
            max_bandwidth: BorshDeserialize::deserialize(&mut data)?,
            status: BorshDeserialize::deserialize(&mut data)?,
            code: BorshDeserialize::deserialize(&mut data)?,
            pub_allowlist: BorshDeserialize::deserialize(&mut data)?,
            sub_allowlist: BorshDeserialize::deserialize(&mut data)?,
            publishers: BorshDeserialize::deserialize(&mut data)?,
            subscribers: BorshDeserialize::deserialize(&mut data)?,
        };
        if out.account_type != AccountType::MulticastGroup {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "not a MulticastGroup account",
            ));
        }
        Ok(out)
    }
}

#[derive(Debug, Clone)]
pub struct GlobalConfig {
    pub account_type: AccountType,
    pub owner: Pubkey,
    pub bump_seed: u8,
    pub local_asn: u32,
    pub remote_asn: u32,
    pub device_tunnel_block: NetworkV4,
    pub user_tunnel_block: NetworkV4,
    pub multicastgroup_block: NetworkV4,
}

impl TryFrom<&[u8]> for GlobalConfig {
    type Error = std::io::Error;

    fn try_from(mut data: &[u8]) -> Result<Self, Self::Error> {
        let out = Self {
            account_type: BorshDeserialize::deserialize(&mut data)?,
            owner: BorshDeserialize::deserialize(&mut data)?,
            bump_seed: BorshDeserialize::deserialize(&mut data)?,
            local_asn: BorshDeserialize::deserialize(&mut data)?,
            remote_asn: BorshDeserialize::deserialize(&mut data)?,
            device_tunnel_block: BorshDeserialize::deserialize(&mut data)?,
            user_tunnel_block: BorshDeserialize::deserialize(&mut data)?,
            multicastgroup_block: BorshDeserialize::deserialize(&mut data)?,
        };
        if out.account_type != AccountType::Config {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "not a Config account",
            ));
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------
// Telemetry: device latency samples account derivation and instructions.
// ---------------------------------------------------------------------

const TELEMETRY_SEED_PREFIX: &[u8] = b"telemetry";
const SEED_DEVICE_LATENCY_SAMPLES: &[u8] = b"device-latency-samples";

/// Computes the 32-character base58 seed used with `create_with_seed` to
/// derive the latency samples account for one origin/target/link/epoch
/// quadruple.
pub fn derive_device_latency_samples_account_seed(
    program_id: &Pubkey,
    origin_device_pk: &Pubkey,
    target_device_pk: &Pubkey,
    link_pk: &Pubkey,
    epoch: u64,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(program_id.as_ref());
    hasher.update(TELEMETRY_SEED_PREFIX);
    hasher.update(SEED_DEVICE_LATENCY_SAMPLES);
    hasher.update(origin_device_pk.as_ref());
    hasher.update(target_device_pk.as_ref());
    hasher.update(link_pk.as_ref());
    hasher.update(epoch.to_le_bytes());

    let hash = hasher.finalize();
    bs58::encode(&hash[..]).into_string()[..32].to_string()
}

/// Derives the seeded (non-PDA) account address for a device latency samples
/// account. The account is not a true PDA: it must be created externally via
/// `create_account_with_seed` before any telemetry instruction references it.
pub fn derive_device_latency_samples_account(
    agent: &Pubkey,
    program_id: &Pubkey,
    origin_device_pk: &Pubkey,
    target_device_pk: &Pubkey,
    link_pk: &Pubkey,
    epoch: u64,
) -> Result<Pubkey, solana_sdk::pubkey::PubkeyError> {
    let seed = derive_device_latency_samples_account_seed(
        program_id,
        origin_device_pk,
        target_device_pk,
        link_pk,
        epoch,
    );
    Pubkey::create_with_seed(agent, &seed, program_id)
}

/// Number of RTT samples a fully preallocated account can hold (~48h at 5s
/// intervals).
pub const MAX_DEVICE_LATENCY_SAMPLES: usize = 35_000;

pub const DEVICE_LATENCY_SAMPLES_HEADER_SIZE: usize =
    1 + 8 + 32 + 32 + 32 + 32 + 32 + 32 + 8 + 8 + 4 + 128;

pub const DEVICE_LATENCY_SAMPLES_ALLOCATED_SIZE: usize =
    DEVICE_LATENCY_SAMPLES_HEADER_SIZE + MAX_DEVICE_LATENCY_SAMPLES * 4;

#[derive(BorshSerialize, Debug, PartialEq, Clone)]
pub struct InitializeDeviceLatencySamplesArgs {
    pub epoch: u64,
    pub sampling_interval_microseconds: u64,
}

#[derive(BorshSerialize, Debug, PartialEq, Clone)]
pub struct WriteDeviceLatencySamplesArgs {
    pub start_timestamp_microseconds: u64,
    pub samples: Vec<u32>,
}

#[derive(BorshSerialize, Debug, PartialEq)]
pub enum TelemetryInstruction {
    InitializeDeviceLatencySamples(InitializeDeviceLatencySamplesArgs),
    WriteDeviceLatencySamples(WriteDeviceLatencySamplesArgs),
}

impl TelemetryInstruction {
    pub fn pack(&self) -> Vec<u8> {
        borsh::to_vec(self).expect("telemetry instruction always serializes")
    }
}
