use std::net::Ipv4Addr;

use doublezero_program_common::types::NetworkV4;

use super::tunnel::{Tunnel, MAX_TUNNEL_SLOTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceType {
    Physical,
    SubInterface,
    Loopback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopbackType {
    Ipv4,
    Vpnv4,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Pending,
    Activated,
    SoftDrained,
    HardDrained,
}

/// A recorded defect in a device's on-chain record. A device carrying any of
/// these is kept in the cache but refuses to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pathology {
    NoVpnv4Loopback,
    NoIpv4Loopback,
    Vpnv4LoopbackZero,
    Ipv4LoopbackZero,
    IsisNetUngeneratable,
    BgpCommunityZero,
    BgpCommunityOutOfRange(u32),
}

impl std::fmt::Display for Pathology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pathology::NoVpnv4Loopback => write!(f, "no or invalid VPNv4 loopback"),
            Pathology::NoIpv4Loopback => write!(f, "no or invalid IPv4 loopback"),
            Pathology::Vpnv4LoopbackZero => write!(f, "VPNv4 loopback is 0.0.0.0"),
            Pathology::Ipv4LoopbackZero => write!(f, "IPv4 loopback is 0.0.0.0"),
            Pathology::IsisNetUngeneratable => write!(f, "unable to generate ISIS NET"),
            Pathology::BgpCommunityZero => write!(f, "device exchange bgp_community=0"),
            Pathology::BgpCommunityOutOfRange(v) => {
                write!(f, "device exchange bgp_community={v} out of range")
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Interface {
    pub name: String,
    pub interface_type: InterfaceType,
    pub loopback_type: LoopbackType,
    pub prefix: Option<NetworkV4>,
    pub is_sub_interface: bool,
    pub is_link: bool,
    pub metric_us: u32,
    pub link_status: Option<LinkStatus>,
    pub node_segment_idx: Option<u16>,
}

impl Interface {
    /// The parent interface name for a sub-interface (`Ethernet1/1.10` -> `Ethernet1/1`).
    /// Returns `None` when `name` carries no `.` suffix.
    pub fn parent_name(&self) -> Option<&str> {
        self.name.split_once('.').map(|(parent, _)| parent)
    }
}

#[derive(Debug, Clone)]
pub struct Device {
    pub pubkey: solana_sdk::pubkey::Pubkey,
    pub public_ip: Ipv4Addr,
    pub contributor_code: String,
    pub exchange_code: String,
    pub location_code: String,
    pub mgmt_vrf: String,
    pub isis_net: Option<String>,
    pub vpnv4_loopback_ip: Option<Ipv4Addr>,
    pub ipv4_loopback_ip: Option<Ipv4Addr>,
    pub bgp_community: u32,
    pub local_asn: Option<u32>,
    pub interfaces: Vec<Interface>,
    pub tunnels: Vec<Tunnel>,
    pub pathologies: Vec<Pathology>,
}

impl Device {
    pub fn new(pubkey: solana_sdk::pubkey::Pubkey, public_ip: Ipv4Addr) -> Self {
        Self {
            pubkey,
            public_ip,
            contributor_code: String::new(),
            exchange_code: String::new(),
            location_code: String::new(),
            mgmt_vrf: String::new(),
            isis_net: None,
            vpnv4_loopback_ip: None,
            ipv4_loopback_ip: None,
            bgp_community: 0,
            local_asn: None,
            interfaces: Vec::new(),
            tunnels: Tunnel::new_slots(MAX_TUNNEL_SLOTS),
            pathologies: Vec::new(),
        }
    }

    pub fn has_pathologies(&self) -> bool {
        !self.pathologies.is_empty()
    }

    /// `49.0000.<hex4>.<hex4>.0000.00` built from the four bytes of the loopback IP.
    pub fn generate_isis_net(loopback: Ipv4Addr) -> String {
        let o = loopback.octets();
        format!(
            "49.0000.{:02x}{:02x}.{:02x}{:02x}.0000.00",
            o[0], o[1], o[2], o[3]
        )
    }
}
