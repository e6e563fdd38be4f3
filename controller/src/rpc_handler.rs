use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Arc;

use arc_swap::ArcSwap;
use doublezero_controlplane_model::model::{Device, StateCache};
use doublezero_controlplane_model::{Error, MetricsSink, Result};
use sha2::{Digest, Sha256};
use solana_sdk::pubkey::Pubkey;

use crate::renderer::{render, TemplateData};

pub struct GetConfigRequest {
    pub pubkey: Pubkey,
    pub bgp_peers: Vec<String>,
    pub agent_version: String,
    pub agent_commit: String,
    pub agent_date: String,
}

/// The read-only RPC handler: looks up the device, computes unknown peers,
/// resolves the ASN, dedups tunnels, and renders. Every step runs against one
/// snapshot acquired at entry — no second ledger read, no torn reads across
/// the handler's lifetime.
pub struct RpcHandler<M> {
    cache: Arc<ArcSwap<StateCache>>,
    metrics: Arc<M>,
    twamp_listen_port: u16,
    no_hardware: bool,
}

impl<M: MetricsSink> RpcHandler<M> {
    pub fn new(
        cache: Arc<ArcSwap<StateCache>>,
        metrics: Arc<M>,
        twamp_listen_port: u16,
        no_hardware: bool,
    ) -> Self {
        Self {
            cache,
            metrics,
            twamp_listen_port,
            no_hardware,
        }
    }

    pub fn get_config(&self, req: &GetConfigRequest) -> Result<String> {
        let start = std::time::Instant::now();
        let snapshot = self.cache.load();

        let device = snapshot
            .device(&req.pubkey)
            .ok_or(Error::NotFound(req.pubkey))?;

        if device.has_pathologies() {
            return Err(Error::FailedPrecondition(
                req.pubkey,
                device.pathologies.clone(),
            ));
        }

        let unknown_peers = compute_unknown_peers(&snapshot, device, &req.bgp_peers);
        let ipv4_peers = effective_ipv4_peers(&snapshot, device);
        let local_asn = device.local_asn.unwrap_or(snapshot.config.local_asn);
        if local_asn == 0 {
            return Err(Error::Internal(format!(
                "no ASN configured for device {}",
                req.pubkey
            )));
        }

        self.metrics.increment_counter(
            "doublezero_controller_get_config_total",
            vec![("device", req.pubkey.to_string())],
        );

        let device = dedup_tunnels(device, self.metrics.as_ref());

        let data = TemplateData {
            multicast_group_block: snapshot.config.multicast_group_block,
            device: &device,
            vpnv4_bgp_peers: &snapshot.vpnv4_bgp_peers,
            ipv4_bgp_peers: &ipv4_peers,
            unknown_bgp_peers: &unknown_peers,
            no_hardware: self.no_hardware,
            telemetry_twamp_listen_port: self.twamp_listen_port,
            local_asn,
            unicast_vrfs: &snapshot.unicast_vrfs,
        };

        let text = render(&data);

        self.metrics.observe_histogram(
            "doublezero_controller_get_config_message_bytes",
            vec![],
            text.len() as f64,
        );
        self.metrics.observe_histogram(
            "doublezero_controller_get_config_duration_seconds",
            vec![],
            start.elapsed().as_secs_f64(),
        );

        Ok(text)
    }

    pub fn get_config_hash(&self, req: &GetConfigRequest) -> Result<String> {
        let text = self.get_config(req)?;
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Clones `device` with its allocated tunnels deduplicated on
/// `(underlay-src, underlay-dst)`, preserving slot order and keeping the
/// first occurrence; unallocated slots pass through untouched. Guards
/// against the cache ever producing two allocated slots for the same pair
/// (e.g. from two different tunnel ids) so the renderer never emits
/// duplicate tunnel blocks.
fn dedup_tunnels(device: &Device, metrics: &dyn MetricsSink) -> Device {
    let mut device = device.clone();
    let mut seen: HashSet<(Ipv4Addr, Ipv4Addr)> = HashSet::new();
    for tunnel in device.tunnels.iter_mut() {
        if !tunnel.allocated {
            continue;
        }
        if !seen.insert((tunnel.underlay_src, tunnel.underlay_dst)) {
            metrics.increment_counter("doublezero_controller_duplicate_tunnel_pairs_total", vec![]);
            tunnel.allocated = false;
        }
    }
    device
}

fn device_overlay_destinations(device: &Device) -> Vec<Ipv4Addr> {
    device
        .tunnels
        .iter()
        .filter(|t| t.allocated)
        .map(|t| t.overlay_dst)
        .collect()
}

fn is_known_peer(cache: &StateCache, device: &Device, ip: Ipv4Addr) -> bool {
    device_overlay_destinations(device).contains(&ip)
        || cache.vpnv4_bgp_peers.iter().any(|p| p.ip == ip)
        || cache.ipv4_bgp_peers.iter().any(|p| p.ip == ip)
}

fn in_assigned_block(cache: &StateCache, ip: Ipv4Addr) -> bool {
    cache.config.user_tunnel_block.contains(ip) || cache.config.tunnel_tunnel_block.contains(ip)
}

/// Peers the agent reports that the cache neither recognises as an active
/// tunnel/BGP peer nor would have assigned from an external block.
fn compute_unknown_peers(cache: &StateCache, device: &Device, reported: &[String]) -> Vec<Ipv4Addr> {
    reported
        .iter()
        .filter_map(|s| s.parse::<Ipv4Addr>().ok())
        .filter(|ip| !is_known_peer(cache, device, *ip) && in_assigned_block(cache, *ip))
        .collect()
}

/// Replaces the IPv4 peer list with an empty one when it holds exactly one
/// entry equal to this device's own IPv4 loopback, avoiding a degenerate
/// single-DZD MSDP/BGP configuration.
fn effective_ipv4_peers(
    cache: &StateCache,
    device: &Device,
) -> Vec<doublezero_controlplane_model::model::BgpPeer> {
    if cache.ipv4_bgp_peers.len() == 1 {
        if let Some(own) = device.ipv4_loopback_ip {
            if cache.ipv4_bgp_peers[0].ip == own {
                return Vec::new();
            }
        }
    }
    cache.ipv4_bgp_peers.clone()
}
