mod bgp;
mod cache;
mod config;
mod device;
mod multicast;
mod tenant;
mod tunnel;

pub use bgp::BgpPeer;
pub use cache::StateCache;
pub use config::Config;
pub use device::{Device, Interface, InterfaceType, LinkStatus, LoopbackType, Pathology};
pub use multicast::MulticastGroup;
pub use tenant::Tenant;
pub use tunnel::{Tunnel, MAX_TUNNEL_SLOTS, START_USER_TUNNEL_NUM};
