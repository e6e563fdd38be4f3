use std::net::Ipv4Addr;
use std::net::SocketAddr;

use doublezero_controlplane_model::ledger::LedgerClient;
use doublezero_controlplane_model::model::LinkStatus;
use doublezero_controlplane_model::MetricsSink;
use solana_sdk::pubkey::Pubkey;

/// A local tunnel interface this collector can bind a sender to.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalInterface {
    pub name: String,
    pub ip: Ipv4Addr,
}

/// Lists this host's local interfaces. Production implementation reads the
/// live interface table; tests substitute a fixed list.
pub trait InterfaceEnumerator: Send + Sync {
    fn list(&self) -> Vec<LocalInterface>;
}

/// Enumerates local IPv4 interfaces via the OS interface table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInterfaceEnumerator;

impl InterfaceEnumerator for SystemInterfaceEnumerator {
    fn list(&self) -> Vec<LocalInterface> {
        match if_addrs::get_if_addrs() {
            Ok(addrs) => addrs
                .into_iter()
                .filter_map(|iface| match iface.addr.ip() {
                    std::net::IpAddr::V4(ip) => Some(LocalInterface {
                        name: iface.name,
                        ip,
                    }),
                    std::net::IpAddr::V6(_) => None,
                })
                .collect(),
            Err(err) => {
                log::warn!("failed to enumerate local interfaces: {err}");
                Vec::new()
            }
        }
    }
}

/// One reachable remote device on the other end of a direct link.
#[derive(Debug, Clone, PartialEq)]
pub struct Peer {
    pub remote_device_pk: Pubkey,
    pub remote_addr: SocketAddr,
    pub link_pk: Pubkey,
    pub local_interface: String,
}

#[derive(Debug, Clone, Default)]
pub struct PeerSet {
    pub peers: Vec<Peer>,
}

fn tunnel_endpoints(tunnel_net: doublezero_program_common::types::NetworkV4) -> (Ipv4Addr, Ipv4Addr) {
    let base = u32::from(tunnel_net.ip());
    (Ipv4Addr::from(base), Ipv4Addr::from(base | 1))
}

/// Runs one discovery pass: fetches the current ledger snapshot, finds every
/// direct link touching `device_pk`, and resolves each to a `Peer` bound to a
/// local tunnel interface. Returns `None` (keep the previous snapshot) when
/// the device itself isn't present in the snapshot or the ledger read fails.
pub fn discover(
    ledger: &dyn LedgerClient,
    device_pk: &Pubkey,
    twamp_port: u16,
    interfaces: &dyn InterfaceEnumerator,
    metrics: &dyn MetricsSink,
) -> Option<PeerSet> {
    let snapshot = match ledger.get_program_data() {
        Ok(s) => s,
        Err(err) => {
            log::warn!("peer discovery: ledger read failed: {err}");
            metrics.increment_counter("doublezero_collector_peer_discovery_ledger_failed", vec![]);
            return None;
        }
    };

    if !snapshot.devices.iter().any(|d| &d.pubkey == device_pk) {
        log::warn!("peer discovery: device {device_pk} not found in ledger snapshot");
        metrics.increment_counter("doublezero_collector_peer_discovery_device_not_found", vec![]);
        return None;
    }

    let local_ifaces = interfaces.list();
    let mut peers = Vec::new();

    for link in &snapshot.links {
        if !matches!(
            link.status,
            LinkStatus::Activated | LinkStatus::SoftDrained | LinkStatus::HardDrained
        ) {
            continue;
        }

        let (remote_device_pk, local_is_side_a) = if &link.side_a_device_pk == device_pk {
            (link.side_z_device_pk, true)
        } else if &link.side_z_device_pk == device_pk {
            (link.side_a_device_pk, false)
        } else {
            continue;
        };

        let (side_a_endpoint, side_z_endpoint) = tunnel_endpoints(link.tunnel_net);
        let (local_endpoint, remote_endpoint) = if local_is_side_a {
            (side_a_endpoint, side_z_endpoint)
        } else {
            (side_z_endpoint, side_a_endpoint)
        };

        let Some(local_iface) = local_ifaces.iter().find(|i| i.ip == local_endpoint) else {
            log::debug!(
                "peer discovery: no local interface carries tunnel endpoint {local_endpoint} for link {}",
                link.pubkey
            );
            metrics.increment_counter("doublezero_collector_peer_discovery_local_tunnel_not_found", vec![]);
            continue;
        };

        peers.push(Peer {
            remote_device_pk,
            remote_addr: SocketAddr::new(remote_endpoint.into(), twamp_port),
            link_pk: link.pubkey,
            local_interface: local_iface.name.clone(),
        });
    }

    Some(PeerSet { peers })
}
