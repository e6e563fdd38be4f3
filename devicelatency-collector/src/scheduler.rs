use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use arc_swap::ArcSwap;
use doublezero_controlplane_model::{BucketKey, MetricsSink};
use solana_sdk::pubkey::Pubkey;
use tokio_util::sync::CancellationToken;

use crate::peer_discovery::PeerSet;
use crate::sender::Sender;

pub const DEFAULT_PROBE_INTERVAL: Duration = Duration::from_secs(10);
pub const DEFAULT_SENDER_TTL: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_MAX_CONSECUTIVE_LOSSES: u32 = 30;
pub const DEFAULT_SENDER_TIMEOUT: Duration = Duration::from_secs(1);

/// Shared sample buffer, keyed the same way the submitter drains it.
pub type SamplesBuffer = Mutex<HashMap<BucketKey, Vec<u32>>>;

pub struct SchedulerConfig {
    pub probe_interval: Duration,
    pub sender_ttl: Duration,
    pub max_consecutive_losses: u32,
    pub sender_timeout: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            probe_interval: DEFAULT_PROBE_INTERVAL,
            sender_ttl: DEFAULT_SENDER_TTL,
            max_consecutive_losses: DEFAULT_MAX_CONSECUTIVE_LOSSES,
            sender_timeout: DEFAULT_SENDER_TIMEOUT,
        }
    }
}

/// Rounds a nanosecond duration to the nearest whole microsecond, half away
/// from zero (half-up, since durations are never negative).
fn round_ns_to_us(ns: u64) -> u32 {
    ((ns + 500) / 1_000) as u32
}

async fn resolve_local_ip(interface_name: &str) -> Option<std::net::IpAddr> {
    if_addrs::get_if_addrs()
        .ok()?
        .into_iter()
        .find(|i| i.name == interface_name)
        .map(|i| i.addr.ip())
}

/// One peer's probe loop: obtains/recycles a sender, probes on an interval,
/// and deposits RTT (or loss) samples into the shared buffer. Runs until
/// `cancel` fires.
pub async fn run_peer_loop(
    local_device_pk: Pubkey,
    peer_local_interface: String,
    peer_remote_addr: SocketAddr,
    peer_remote_device_pk: Pubkey,
    peer_link_pk: Pubkey,
    epoch: Arc<ArcSwap<u64>>,
    buffer: Arc<SamplesBuffer>,
    metrics: Arc<dyn MetricsSink>,
    config: Arc<SchedulerConfig>,
    cancel: CancellationToken,
) {
    let mut sender: Option<Sender> = None;
    let mut consecutive_losses: u32 = 0;
    let mut ticker = tokio::time::interval(config.probe_interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                log::debug!("probe loop for {peer_remote_device_pk} shutting down");
                return;
            }
            _ = ticker.tick() => {}
        }

        let needs_new_sender = match &sender {
            None => true,
            Some(s) => s.age() > config.sender_ttl || consecutive_losses > config.max_consecutive_losses,
        };
        if needs_new_sender {
            let Some(local_ip) = resolve_local_ip(&peer_local_interface).await else {
                log::warn!("twamp sender: local interface {peer_local_interface} vanished");
                metrics.increment_counter("doublezero_collector_sender_bind_failed", vec![]);
                continue;
            };
            match Sender::bind(local_ip, peer_remote_addr).await {
                Ok(s) => {
                    sender = Some(s);
                    consecutive_losses = 0;
                }
                Err(err) => {
                    log::warn!("twamp sender: bind to {local_ip} -> {peer_remote_addr} failed: {err}");
                    metrics.increment_counter("doublezero_collector_sender_bind_failed", vec![]);
                    continue;
                }
            }
        }

        let Some(active) = sender.as_mut() else {
            continue;
        };
        let sample_us = match active.probe(config.sender_timeout).await {
            Some(rtt) => {
                consecutive_losses = 0;
                round_ns_to_us(rtt.as_nanos() as u64)
            }
            None => {
                consecutive_losses += 1;
                metrics.increment_counter("doublezero_collector_probe_losses", vec![]);
                0
            }
        };

        let key = BucketKey {
            origin: local_device_pk,
            target: peer_remote_device_pk,
            link: peer_link_pk,
            epoch: **epoch.load(),
        };
        buffer.lock().unwrap().entry(key).or_default().push(sample_us);
    }
}

/// Spawns one probe task per peer in `peers`, tracked under `cancel`. Tasks
/// for peers no longer present are not stopped here — the caller replaces
/// its whole task set on every peer-set refresh.
pub fn spawn_peer_loops(
    local_device_pk: Pubkey,
    peers: &PeerSet,
    epoch: Arc<ArcSwap<u64>>,
    buffer: Arc<SamplesBuffer>,
    metrics: Arc<dyn MetricsSink>,
    config: Arc<SchedulerConfig>,
    cancel: CancellationToken,
) -> Vec<tokio::task::JoinHandle<()>> {
    peers
        .peers
        .iter()
        .map(|peer| {
            tokio::spawn(run_peer_loop(
                local_device_pk,
                peer.local_interface.clone(),
                peer.remote_addr,
                peer.remote_device_pk,
                peer.link_pk,
                epoch.clone(),
                buffer.clone(),
                metrics.clone(),
                config.clone(),
                cancel.clone(),
            ))
        })
        .collect()
}
