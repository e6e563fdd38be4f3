use std::net::Ipv4Addr;

use solana_sdk::pubkey::Pubkey;

pub const START_USER_TUNNEL_NUM: u16 = 500;
pub const MAX_TUNNEL_SLOTS: u16 = 20;

/// A device-local pre-allocated tunnel position, bindable to exactly one user.
#[derive(Debug, Clone)]
pub struct Tunnel {
    pub id: u16,
    pub allocated: bool,
    pub underlay_src: Ipv4Addr,
    pub underlay_dst: Ipv4Addr,
    pub overlay_src: Ipv4Addr,
    pub overlay_dst: Ipv4Addr,
    pub service_ip: Ipv4Addr,
    pub user_pk: Option<Pubkey>,
    pub vrf_id: u16,
    pub metro_routing: bool,
    pub is_multicast: bool,
    pub subscribers: Vec<Ipv4Addr>,
    pub publishers: Vec<Ipv4Addr>,
    pub boundary_list: Vec<Ipv4Addr>,
}

impl Tunnel {
    fn empty(id: u16) -> Self {
        Self {
            id,
            allocated: false,
            underlay_src: Ipv4Addr::UNSPECIFIED,
            underlay_dst: Ipv4Addr::UNSPECIFIED,
            overlay_src: Ipv4Addr::UNSPECIFIED,
            overlay_dst: Ipv4Addr::UNSPECIFIED,
            service_ip: Ipv4Addr::UNSPECIFIED,
            user_pk: None,
            vrf_id: 0,
            metro_routing: false,
            is_multicast: false,
            subscribers: Vec::new(),
            publishers: Vec::new(),
            boundary_list: Vec::new(),
        }
    }

    /// The `count` contiguous slots starting at `START_USER_TUNNEL_NUM`, all unallocated.
    pub fn new_slots(count: u16) -> Vec<Tunnel> {
        (0..count)
            .map(|i| Tunnel::empty(START_USER_TUNNEL_NUM + i))
            .collect()
    }

    /// The overlay destination is the overlay source with the low bit of the
    /// last octet forced to 1 (the odd-octet convention).
    pub fn derive_overlay_dst(overlay_src: Ipv4Addr) -> Ipv4Addr {
        let mut o = overlay_src.octets();
        o[3] |= 1;
        Ipv4Addr::from(o)
    }
}
