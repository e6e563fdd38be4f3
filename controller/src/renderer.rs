use std::fmt::Write as _;
use std::net::Ipv4Addr;

use doublezero_controlplane_model::model::{BgpPeer, Device};
use doublezero_program_common::types::NetworkV4;

/// Everything the renderer needs. A pure value — the renderer never reads
/// shared state outside of it, so concurrent renders of distinct inputs are
/// trivially safe.
#[derive(Debug, Clone)]
pub struct TemplateData<'a> {
    pub multicast_group_block: NetworkV4,
    pub device: &'a Device,
    pub vpnv4_bgp_peers: &'a [BgpPeer],
    pub ipv4_bgp_peers: &'a [BgpPeer],
    pub unknown_bgp_peers: &'a [Ipv4Addr],
    pub no_hardware: bool,
    pub telemetry_twamp_listen_port: u16,
    pub local_asn: u32,
    pub unicast_vrfs: &'a [u16],
}

/// Deterministic, pure function of `TemplateData`; no two calls with the same
/// input may produce different bytes.
pub fn render(data: &TemplateData<'_>) -> String {
    let mut out = String::new();

    render_chassis(&mut out, data);
    render_interfaces(&mut out, data);
    render_tunnels(&mut out, data);
    render_isis(&mut out, data);
    render_bgp(&mut out, data);
    render_msdp(&mut out, data);
    render_unknown_peers(&mut out, data);

    out
}

fn render_chassis(out: &mut String, data: &TemplateData<'_>) {
    let d = data.device;
    writeln!(out, "! device {}", d.pubkey).unwrap();
    writeln!(out, "! contributor {} exchange {} location {}", d.contributor_code, d.exchange_code, d.location_code).unwrap();
    writeln!(out, "hostname {}", d.exchange_code).unwrap();
    if !data.no_hardware {
        writeln!(out, "hardware counter feature acl out").unwrap();
    }
    writeln!(out, "vrf instance {}", d.mgmt_vrf).unwrap();
    for vrf in data.unicast_vrfs {
        writeln!(out, "vrf instance vrf{vrf}").unwrap();
    }
}

fn render_interfaces(out: &mut String, data: &TemplateData<'_>) {
    for iface in &data.device.interfaces {
        writeln!(out, "interface {}", iface.name).unwrap();
        if let Some(prefix) = iface.prefix {
            writeln!(out, "   ip address {prefix}").unwrap();
        }
        if iface.is_link {
            writeln!(out, "   isis metric {}", iface.metric_us).unwrap();
        }
        if let Some(idx) = iface.node_segment_idx {
            writeln!(out, "   segment-routing prefix-segment index {idx}").unwrap();
        }
    }
}

fn render_tunnels(out: &mut String, data: &TemplateData<'_>) {
    for tunnel in &data.device.tunnels {
        if !tunnel.allocated {
            continue;
        }
        writeln!(out, "interface Tunnel{}", tunnel.id).unwrap();
        writeln!(out, "   tunnel source {}", tunnel.underlay_src).unwrap();
        writeln!(out, "   tunnel destination {}", tunnel.underlay_dst).unwrap();
        writeln!(out, "   ip address {}/31", tunnel.overlay_src).unwrap();
        writeln!(out, "   ! overlay peer {}", tunnel.overlay_dst).unwrap();
        writeln!(out, "   ! service ip {}", tunnel.service_ip).unwrap();
        if !data.no_hardware {
            writeln!(out, "   ip nat service-policy input").unwrap();
        }
        if tunnel.is_multicast {
            for sub in &tunnel.subscribers {
                writeln!(out, "   ! multicast subscriber {sub}").unwrap();
            }
            for publ in &tunnel.publishers {
                writeln!(out, "   ! multicast publisher {publ}").unwrap();
            }
            for boundary in &tunnel.boundary_list {
                writeln!(out, "   multicast boundary {boundary}").unwrap();
            }
        } else {
            writeln!(out, "   vrf forwarding vrf{}", tunnel.vrf_id).unwrap();
            if tunnel.metro_routing {
                writeln!(out, "   ! metro-routing enabled").unwrap();
            }
        }
    }
}

fn render_isis(out: &mut String, data: &TemplateData<'_>) {
    if let Some(net) = &data.device.isis_net {
        writeln!(out, "router isis DZ").unwrap();
        writeln!(out, "   net {net}").unwrap();
    }
}

fn render_bgp(out: &mut String, data: &TemplateData<'_>) {
    writeln!(out, "router bgp {}", data.local_asn).unwrap();
    for peer in data.vpnv4_bgp_peers {
        writeln!(out, "   neighbor {} remote-as {}", peer.ip, data.local_asn).unwrap();
        writeln!(out, "   ! vpnv4 peer {}", peer.name).unwrap();
    }
    for peer in data.ipv4_bgp_peers {
        writeln!(out, "   neighbor {} remote-as {}", peer.ip, data.local_asn).unwrap();
        writeln!(out, "   ! ipv4 peer {}", peer.name).unwrap();
    }
}

fn render_msdp(out: &mut String, data: &TemplateData<'_>) {
    if data.ipv4_bgp_peers.is_empty() {
        return;
    }
    writeln!(out, "router msdp").unwrap();
    for peer in data.ipv4_bgp_peers {
        writeln!(out, "   peer {}", peer.ip).unwrap();
    }
    writeln!(out, "   ! multicast group block {}", data.multicast_group_block).unwrap();
}

fn render_unknown_peers(out: &mut String, data: &TemplateData<'_>) {
    for peer in data.unknown_bgp_peers {
        writeln!(out, "router bgp {}", data.local_asn).unwrap();
        writeln!(out, "   no neighbor {peer}").unwrap();
    }
}
