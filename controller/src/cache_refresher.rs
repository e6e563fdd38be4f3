use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use doublezero_controlplane_model::ledger::{
    LedgerClient, ProgramSnapshot, RawDevice, RawInterface, RawLink, RawUser,
};
use doublezero_controlplane_model::model::{
    BgpPeer, Config, Device, Interface, InterfaceType, LinkStatus, LoopbackType, MulticastGroup,
    Pathology, StateCache, Tenant, Tunnel, MAX_TUNNEL_SLOTS,
};
use doublezero_controlplane_model::{is_bgp_martian, MetricsSink};
use solana_sdk::pubkey::Pubkey;

const MIN_BGP_COMMUNITY: u32 = 10_000;
const MAX_BGP_COMMUNITY: u32 = 10_999;
const MIN_DELAY_OVERRIDE_NS: i64 = 10_000;
const MAX_DELAY_OVERRIDE_NS: i64 = 1_000_000_000;
const SOFT_DRAINED_METRIC_US: u32 = 1_000_000;

/// Holds the live snapshot and drives the periodic refresh described by the
/// state cache refresher: fetch, convert, install. Readers only ever see a
/// fully-built cache; a failed refresh leaves the previous one in place.
pub struct CacheRefresher<L, M> {
    ledger: Arc<L>,
    metrics: Arc<M>,
    cache: Arc<ArcSwap<StateCache>>,
}

impl<L, M> CacheRefresher<L, M>
where
    L: LedgerClient,
    M: MetricsSink,
{
    pub fn new(ledger: Arc<L>, metrics: Arc<M>) -> Self {
        Self {
            ledger,
            metrics,
            cache: Arc::new(ArcSwap::from_pointee(StateCache::default())),
        }
    }

    pub fn cache(&self) -> Arc<ArcSwap<StateCache>> {
        self.cache.clone()
    }

    /// Runs `refresh` every `interval` until `cancel` fires.
    pub async fn run(&self, interval: Duration, cancel: tokio_util::sync::CancellationToken) {
        let mut ticker = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    log::info!("state cache refresher shutting down");
                    return;
                }
                _ = ticker.tick() => {
                    if let Err(err) = self.refresh().await {
                        log::warn!("state cache refresh failed, keeping previous snapshot: {err}");
                        self.metrics.increment_counter("doublezero_controller_refresh_failed", vec![]);
                    }
                }
            }
        }
    }

    pub async fn refresh(&self) -> doublezero_controlplane_model::Result<()> {
        let ledger = self.ledger.clone();
        let snapshot = tokio::task::spawn_blocking(move || ledger.get_program_data())
            .await
            .map_err(|e| doublezero_controlplane_model::Error::Internal(e.to_string()))??;

        if snapshot.devices.is_empty() {
            log::warn!("refresh returned an empty topology, keeping previous snapshot");
            self.metrics
                .increment_counter("doublezero_controller_refresh_empty_topology", vec![]);
            return Ok(());
        }

        let new_cache = build_state_cache(&snapshot, self.metrics.as_ref());
        self.cache.store(Arc::new(new_cache));
        self.metrics
            .increment_counter("doublezero_controller_refresh_succeeded", vec![]);
        Ok(())
    }
}

fn to_interface(raw: &RawInterface) -> Interface {
    Interface {
        name: raw.name.clone(),
        interface_type: raw.interface_type,
        loopback_type: raw.loopback_type,
        prefix: raw.prefix,
        is_sub_interface: raw.name.contains('.'),
        is_link: false,
        metric_us: 0,
        link_status: None,
        node_segment_idx: if raw.loopback_type == LoopbackType::Vpnv4 {
            Some(raw.node_segment_idx)
        } else {
            None
        },
    }
}

fn synthesize_parent(interfaces: &mut Vec<Interface>) {
    let mut seen_parents: HashMap<String, ()> = HashMap::new();
    let existing: std::collections::HashSet<String> =
        interfaces.iter().map(|i| i.name.clone()).collect();
    let mut to_add = Vec::new();
    for iface in interfaces.iter() {
        if let Some(parent) = iface.parent_name() {
            if !existing.contains(parent) && !seen_parents.contains_key(parent) {
                seen_parents.insert(parent.to_string(), ());
                to_add.push(Interface {
                    name: parent.to_string(),
                    interface_type: InterfaceType::Physical,
                    loopback_type: LoopbackType::None,
                    prefix: None,
                    is_sub_interface: false,
                    is_link: false,
                    metric_us: 0,
                    link_status: None,
                    node_segment_idx: None,
                });
            }
        }
    }
    interfaces.extend(to_add);
    interfaces.sort_by(|a, b| a.name.cmp(&b.name));
}

fn apply_loopbacks(device: &mut Device) {
    for iface in &device.interfaces {
        if iface.interface_type != InterfaceType::Loopback {
            continue;
        }
        let ip = iface.prefix.map(|p| p.ip());
        match iface.loopback_type {
            LoopbackType::Vpnv4 => {
                device.vpnv4_loopback_ip = ip;
            }
            LoopbackType::Ipv4 => {
                device.ipv4_loopback_ip = ip;
            }
            LoopbackType::None => {}
        }
    }
}

fn detect_pathologies(device: &Device) -> Vec<Pathology> {
    let mut pathologies = Vec::new();

    match device.vpnv4_loopback_ip {
        None => pathologies.push(Pathology::NoVpnv4Loopback),
        Some(ip) if ip == Ipv4Addr::UNSPECIFIED => pathologies.push(Pathology::Vpnv4LoopbackZero),
        Some(_) if device.isis_net.is_none() => {
            pathologies.push(Pathology::IsisNetUngeneratable)
        }
        Some(_) => {}
    }

    match device.ipv4_loopback_ip {
        None => pathologies.push(Pathology::NoIpv4Loopback),
        Some(ip) if ip == Ipv4Addr::UNSPECIFIED => pathologies.push(Pathology::Ipv4LoopbackZero),
        Some(_) => {}
    }

    if device.bgp_community == 0 {
        pathologies.push(Pathology::BgpCommunityZero);
    } else if device.bgp_community < MIN_BGP_COMMUNITY || device.bgp_community > MAX_BGP_COMMUNITY
    {
        pathologies.push(Pathology::BgpCommunityOutOfRange(device.bgp_community));
    }

    pathologies
}

fn find_link_for<'a>(
    links: &'a [RawLink],
    device_pk: &Pubkey,
    interface_name: &str,
) -> Option<&'a RawLink> {
    links.iter().find(|l| {
        (&l.side_a_device_pk == device_pk && l.side_a_interface_name == interface_name)
            || (&l.side_z_device_pk == device_pk && l.side_z_interface_name == interface_name)
    })
}

fn apply_link_metrics(device: &mut Device, links: &[RawLink], metrics: &dyn MetricsSink) {
    let pk = device.pubkey;
    for iface in device.interfaces.iter_mut() {
        if iface.is_sub_interface {
            continue;
        }
        let link = find_link_for(links, &pk, &iface.name);
        let Some(link) = link else {
            iface.is_link = false;
            iface.metric_us = 0;
            iface.link_status = Some(LinkStatus::Pending);
            continue;
        };
        if !matches!(
            link.status,
            LinkStatus::Activated | LinkStatus::SoftDrained | LinkStatus::HardDrained
        ) {
            iface.is_link = false;
            iface.metric_us = 0;
            iface.link_status = Some(LinkStatus::Pending);
            continue;
        }
        if link.delay_ns <= 0 {
            metrics.increment_counter("doublezero_controller_invalid_link_metric", vec![]);
            iface.is_link = false;
            iface.metric_us = 0;
            iface.link_status = Some(link.status);
            continue;
        }

        let mut microseconds = link.delay_ns.div_ceil(1000) as u32;
        if link.delay_override_ns != 0 {
            if (MIN_DELAY_OVERRIDE_NS..=MAX_DELAY_OVERRIDE_NS).contains(&link.delay_override_ns) {
                microseconds = link.delay_override_ns.div_ceil(1000) as u32;
            } else {
                log::warn!(
                    "ignoring out-of-range delay override {} ns on {}/{}",
                    link.delay_override_ns,
                    pk,
                    iface.name
                );
            }
        }
        if link.status == LinkStatus::SoftDrained {
            microseconds = SOFT_DRAINED_METRIC_US;
        }

        iface.is_link = true;
        iface.metric_us = microseconds;
        iface.link_status = Some(link.status);
        metrics.set_gauge(
            "doublezero_controller_link_metric_us",
            vec![("device", pk.to_string()), ("interface", iface.name.clone())],
            microseconds as f64,
        );
    }
}

fn build_device(raw: &RawDevice, lookups: &CodeLookups, links: &[RawLink], metrics: &dyn MetricsSink) -> Device {
    let mut device = Device::new(raw.pubkey, raw.public_ip);
    device.contributor_code = lookups
        .contributors
        .get(&raw.contributor_pk)
        .cloned()
        .unwrap_or_default();
    device.exchange_code = lookups
        .exchanges
        .get(&raw.exchange_pk)
        .map(|(code, _)| code.clone())
        .unwrap_or_default();
    device.location_code = lookups
        .locations
        .get(&raw.location_pk)
        .cloned()
        .unwrap_or_default();
    device.mgmt_vrf = raw.mgmt_vrf.clone();
    device.local_asn = raw.local_asn;
    device.bgp_community = lookups
        .exchanges
        .get(&raw.exchange_pk)
        .map(|(_, community)| *community)
        .unwrap_or(0);

    device.interfaces = raw.interfaces.iter().map(to_interface).collect();
    synthesize_parent(&mut device.interfaces);

    apply_loopbacks(&mut device);
    if let Some(ip) = device.vpnv4_loopback_ip {
        if ip != Ipv4Addr::UNSPECIFIED {
            device.isis_net = Some(Device::generate_isis_net(ip));
        }
    }

    apply_link_metrics(&mut device, links, metrics);

    device.pathologies = detect_pathologies(&device);
    device
}

struct CodeLookups {
    contributors: HashMap<Pubkey, String>,
    exchanges: HashMap<Pubkey, (String, u32)>,
    locations: HashMap<Pubkey, String>,
}

fn build_lookups(snapshot: &ProgramSnapshot) -> CodeLookups {
    CodeLookups {
        contributors: snapshot
            .contributors
            .iter()
            .map(|c| (c.pubkey, c.code.clone()))
            .collect(),
        exchanges: snapshot
            .exchanges
            .iter()
            .map(|e| (e.pubkey, (e.code.clone(), e.bgp_community)))
            .collect(),
        locations: snapshot
            .locations
            .iter()
            .map(|l| (l.pubkey, l.code.clone()))
            .collect(),
    }
}

fn collect_bgp_peers(devices: &HashMap<Pubkey, Device>) -> (Vec<BgpPeer>, Vec<BgpPeer>) {
    let mut vpnv4 = Vec::new();
    let mut ipv4 = Vec::new();
    let mut devices_sorted: Vec<&Device> = devices.values().collect();
    devices_sorted.sort_by_key(|d| d.pubkey.to_string());
    for device in devices_sorted {
        if device.has_pathologies() {
            continue;
        }
        if let Some(ip) = device.vpnv4_loopback_ip {
            vpnv4.push(BgpPeer {
                ip,
                name: device.contributor_code.clone(),
            });
        }
        if let Some(ip) = device.ipv4_loopback_ip {
            ipv4.push(BgpPeer {
                ip,
                name: device.contributor_code.clone(),
            });
        }
    }
    (vpnv4, ipv4)
}

fn validate_user(raw: &RawUser, devices: &HashMap<Pubkey, Device>) -> Result<(), &'static str> {
    if !devices.contains_key(&raw.device_pk) {
        return Err("device not found");
    }
    if raw.tunnel_id == 0 {
        return Err("tunnel id is zero");
    }
    if raw.client_ip == Ipv4Addr::UNSPECIFIED {
        return Err("client ip is unset");
    }
    if raw.service_ip == Ipv4Addr::UNSPECIFIED || is_bgp_martian(raw.service_ip) {
        return Err("service ip is unset or martian");
    }
    if raw.tunnel_net.prefix() != 31 {
        return Err("tunnel network is not a /31");
    }
    Ok(())
}

fn apply_users(
    devices: &mut HashMap<Pubkey, Device>,
    users: &[RawUser],
    tenants: &HashMap<Pubkey, Tenant>,
    multicast_ip_by_group: &HashMap<Pubkey, Ipv4Addr>,
    metrics: &dyn MetricsSink,
) {
    let mut seen_pairs: HashMap<Pubkey, std::collections::HashSet<(Ipv4Addr, Ipv4Addr)>> = HashMap::new();

    for raw in users {
        if !raw.activated {
            continue;
        }
        if let Err(reason) = validate_user(raw, devices) {
            log::error!("dropping user {}: {reason}", raw.pubkey);
            metrics.increment_counter("doublezero_controller_user_dropped", vec![]);
            continue;
        }

        let device = devices.get_mut(&raw.device_pk).unwrap();
        let Some(slot) = device.tunnels.iter_mut().find(|t| t.id == raw.tunnel_id) else {
            log::error!(
                "dropping user {}: no tunnel slot {} on device {}",
                raw.pubkey,
                raw.tunnel_id,
                raw.device_pk
            );
            metrics.increment_counter("doublezero_controller_user_dropped", vec![]);
            continue;
        };

        let underlay_dst = raw.client_ip;
        let underlay_src = match raw.tunnel_endpoint {
            Some(ep) if ep != Ipv4Addr::UNSPECIFIED => ep,
            _ => device.public_ip,
        };

        let device_pairs = seen_pairs.entry(raw.device_pk).or_default();
        if !device_pairs.insert((underlay_src, underlay_dst)) {
            metrics.increment_counter("doublezero_controller_duplicate_tunnel_pairs_total", vec![]);
            continue;
        }
        if slot.allocated {
            metrics.increment_counter("doublezero_controller_duplicate_tunnel_pairs_total", vec![]);
            continue;
        }

        let overlay_src = raw.tunnel_net.ip();
        let overlay_dst = Tunnel::derive_overlay_dst(overlay_src);

        slot.allocated = true;
        slot.underlay_src = underlay_src;
        slot.underlay_dst = underlay_dst;
        slot.overlay_src = overlay_src;
        slot.overlay_dst = overlay_dst;
        slot.service_ip = raw.service_ip;
        slot.user_pk = Some(raw.pubkey);

        if raw.is_multicast {
            slot.is_multicast = true;
            slot.subscribers = raw
                .subscriber_group_pks
                .iter()
                .filter_map(|pk| multicast_ip_by_group.get(pk).copied())
                .collect();
            slot.publishers = raw
                .publisher_group_pks
                .iter()
                .filter_map(|pk| multicast_ip_by_group.get(pk).copied())
                .collect();
            let mut boundary: Vec<Ipv4Addr> = slot
                .subscribers
                .iter()
                .chain(slot.publishers.iter())
                .copied()
                .collect();
            boundary.sort_by_key(|ip| ip.to_string());
            boundary.dedup();
            slot.boundary_list = boundary;
        } else {
            let (vrf_id, metro_routing) = raw
                .tenant_pk
                .and_then(|pk| tenants.get(&pk))
                .map(|t| (t.vrf_id, t.metro_routing))
                .unwrap_or((1, true));
            slot.vrf_id = vrf_id;
            slot.metro_routing = metro_routing;
        }
    }
}

/// Builds a complete, immutable cache snapshot from one ledger fetch. Never
/// touches the ledger itself — purely a transformation, so it's directly
/// unit-testable without a mock.
pub fn build_state_cache(snapshot: &ProgramSnapshot, metrics: &dyn MetricsSink) -> StateCache {
    let lookups = build_lookups(snapshot);

    let mut devices: HashMap<Pubkey, Device> = snapshot
        .devices
        .iter()
        .map(|raw| {
            (
                raw.pubkey,
                build_device(raw, &lookups, &snapshot.links, metrics),
            )
        })
        .collect();

    let tenants: HashMap<Pubkey, Tenant> = snapshot
        .tenants
        .iter()
        .map(|t| {
            (
                t.pubkey,
                Tenant {
                    pubkey: t.pubkey,
                    vrf_id: t.vrf_id,
                    metro_routing: t.metro_routing,
                },
            )
        })
        .collect();

    let multicast_groups: HashMap<Pubkey, MulticastGroup> = snapshot
        .multicast_groups
        .iter()
        .map(|g| {
            (
                g.pubkey,
                MulticastGroup {
                    pubkey: g.pubkey,
                    multicast_ip: g.multicast_ip,
                    max_bandwidth: g.max_bandwidth,
                },
            )
        })
        .collect();
    let multicast_ip_by_group: HashMap<Pubkey, Ipv4Addr> = multicast_groups
        .iter()
        .map(|(k, v)| (*k, v.multicast_ip))
        .collect();

    apply_users(
        &mut devices,
        &snapshot.users,
        &tenants,
        &multicast_ip_by_group,
        metrics,
    );

    let unicast_vrfs = StateCache::build_unicast_vrfs(&tenants);
    let (vpnv4_bgp_peers, ipv4_bgp_peers) = collect_bgp_peers(&devices);

    StateCache {
        config: Config {
            local_asn: snapshot.config.local_asn,
            multicast_group_block: snapshot.config.multicast_group_block,
            user_tunnel_block: snapshot.config.user_tunnel_block,
            tunnel_tunnel_block: snapshot.config.tunnel_tunnel_block,
        },
        devices,
        multicast_groups,
        tenants,
        unicast_vrfs,
        vpnv4_bgp_peers,
        ipv4_bgp_peers,
    }
}

#[allow(dead_code)]
fn assert_max_slots(n: u16) {
    debug_assert_eq!(n, MAX_TUNNEL_SLOTS);
}

#[cfg(test)]
mod tests {
    use super::*;
    use doublezero_controlplane_model::ledger::{RawConfig, RawContributor, RawExchange, RawLocation};
    use doublezero_controlplane_model::model::MAX_TUNNEL_SLOTS;
    use doublezero_controlplane_model::MockMetricsSink;

    fn sink() -> MockMetricsSink {
        let mut m = MockMetricsSink::new();
        m.expect_increment_counter().returning(|_, _| ());
        m.expect_set_gauge().returning(|_, _, _| ());
        m.expect_observe_histogram().returning(|_, _, _| ());
        m
    }

    fn base_snapshot() -> ProgramSnapshot {
        let device_pk = Pubkey::new_unique();
        let contributor_pk = Pubkey::new_unique();
        let exchange_pk = Pubkey::new_unique();
        let location_pk = Pubkey::new_unique();

        ProgramSnapshot {
            devices: vec![RawDevice {
                pubkey: device_pk,
                public_ip: Ipv4Addr::new(7, 7, 7, 7),
                contributor_pk,
                exchange_pk,
                location_pk,
                mgmt_vrf: "mgmt".to_string(),
                local_asn: Some(65000),
                interfaces: vec![
                    RawInterface {
                        name: "Loopback255".to_string(),
                        interface_type: InterfaceType::Loopback,
                        loopback_type: LoopbackType::Vpnv4,
                        prefix: Some(
                            doublezero_program_common::types::NetworkV4::new(
                                Ipv4Addr::new(14, 14, 14, 14),
                                32,
                            )
                            .unwrap(),
                        ),
                        node_segment_idx: 100,
                    },
                    RawInterface {
                        name: "Loopback256".to_string(),
                        interface_type: InterfaceType::Loopback,
                        loopback_type: LoopbackType::Ipv4,
                        prefix: Some(
                            doublezero_program_common::types::NetworkV4::new(
                                Ipv4Addr::new(172, 16, 1, 195),
                                32,
                            )
                            .unwrap(),
                        ),
                        node_segment_idx: 0,
                    },
                ],
            }],
            users: vec![RawUser {
                pubkey: Pubkey::new_unique(),
                activated: true,
                device_pk,
                client_ip: Ipv4Addr::new(1, 1, 1, 1),
                service_ip: Ipv4Addr::new(100, 0, 0, 0),
                tunnel_id: 500,
                tunnel_net: doublezero_program_common::types::NetworkV4::new(
                    Ipv4Addr::new(169, 254, 0, 0),
                    31,
                )
                .unwrap(),
                tunnel_endpoint: None,
                tenant_pk: None,
                is_multicast: false,
                subscriber_group_pks: vec![],
                publisher_group_pks: vec![],
            }],
            links: vec![],
            tenants: vec![],
            exchanges: vec![RawExchange {
                pubkey: exchange_pk,
                code: "ex1".to_string(),
                bgp_community: 10500,
            }],
            contributors: vec![RawContributor {
                pubkey: contributor_pk,
                code: "contrib1".to_string(),
            }],
            locations: vec![RawLocation {
                pubkey: location_pk,
                code: "loc1".to_string(),
            }],
            multicast_groups: vec![],
            config: RawConfig::default(),
        }
    }

    #[test]
    fn single_device_single_user_scenario() {
        let snapshot = base_snapshot();
        let metrics = sink();
        let cache = build_state_cache(&snapshot, &metrics);

        let device = cache.devices.values().next().unwrap();
        assert!(!device.has_pathologies());
        assert_eq!(
            device.isis_net.as_deref(),
            Some("49.0000.0e0e.0e0e.0000.00")
        );
        assert_eq!(device.tunnels.len(), MAX_TUNNEL_SLOTS as usize);

        let slot = device.tunnels.iter().find(|t| t.id == 500).unwrap();
        assert!(slot.allocated);
        assert_eq!(slot.underlay_src, Ipv4Addr::new(7, 7, 7, 7));
        assert_eq!(slot.underlay_dst, Ipv4Addr::new(1, 1, 1, 1));
        assert_eq!(slot.overlay_src, Ipv4Addr::new(169, 254, 0, 0));
        assert_eq!(slot.overlay_dst, Ipv4Addr::new(169, 254, 0, 1));

        // Single own peer suppressed in the renderer, not the cache itself.
        assert_eq!(cache.ipv4_bgp_peers.len(), 1);
    }

    #[test]
    fn pathological_device_missing_loopback_and_bgp_community() {
        let mut snapshot = base_snapshot();
        snapshot.devices[0].interfaces.retain(|i| i.name != "Loopback255");
        snapshot.exchanges[0].bgp_community = 0;

        let metrics = sink();
        let cache = build_state_cache(&snapshot, &metrics);
        let device = cache.devices.values().next().unwrap();

        assert!(device.pathologies.contains(&Pathology::NoVpnv4Loopback));
        assert!(device.pathologies.contains(&Pathology::BgpCommunityZero));
        assert!(cache.ipv4_bgp_peers.is_empty());
        assert!(cache.vpnv4_bgp_peers.is_empty());
    }

    #[test]
    fn duplicate_tunnel_pairs_keep_first() {
        let mut snapshot = base_snapshot();
        let mut dup = snapshot.users[0].clone();
        dup.pubkey = Pubkey::new_unique();
        dup.tunnel_id = 501;
        snapshot.users.push(dup);

        let metrics = sink();
        let cache = build_state_cache(&snapshot, &metrics);
        let device = cache.devices.values().next().unwrap();

        let allocated: Vec<_> = device.tunnels.iter().filter(|t| t.allocated).collect();
        assert_eq!(allocated.len(), 1);
        assert_eq!(allocated[0].id, 500);
    }

    #[test]
    fn martian_service_ip_drops_user() {
        let mut snapshot = base_snapshot();
        snapshot.users[0].service_ip = Ipv4Addr::new(127, 0, 0, 1);

        let metrics = sink();
        let cache = build_state_cache(&snapshot, &metrics);
        let device = cache.devices.values().next().unwrap();

        assert!(device.tunnels.iter().all(|t| !t.allocated));
    }

    #[test]
    fn sub_interface_synthesizes_parent() {
        let mut snapshot = base_snapshot();
        snapshot.devices[0].interfaces.push(RawInterface {
            name: "Ethernet1/1.10".to_string(),
            interface_type: InterfaceType::SubInterface,
            loopback_type: LoopbackType::None,
            prefix: None,
            node_segment_idx: 0,
        });

        let metrics = sink();
        let cache = build_state_cache(&snapshot, &metrics);
        let device = cache.devices.values().next().unwrap();

        assert_eq!(
            device.interfaces.iter().filter(|i| i.name == "Ethernet1/1").count(),
            1
        );
    }
}
