use std::net::Ipv4Addr;

/// Returns true for addresses that must never be admitted as a tunnel service
/// IP or accepted as a peer: this-network, RFC1918 private space, CGNAT,
/// loopback, link-local, the three TEST-NET ranges, multicast, reserved, and
/// the limited broadcast address.
pub fn is_bgp_martian(ip: Ipv4Addr) -> bool {
    if ip.is_unspecified()
        || ip.is_private()
        || ip.is_loopback()
        || ip.is_link_local()
        || ip.is_broadcast()
        || ip.is_documentation()
    {
        return true;
    }

    let o = ip.octets();

    // 0.0.0.0/8, RFC1122 "this" network
    if o[0] == 0 {
        return true;
    }
    // 100.64.0.0/10, CGNAT
    if o[0] == 100 && (o[1] & 0xC0) == 64 {
        return true;
    }
    // 224.0.0.0/4, multicast
    if (o[0] & 0xF0) == 224 {
        return true;
    }
    // 240.0.0.0/4, reserved
    if o[0] >= 240 {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_documented_martian_ranges() {
        assert!(is_bgp_martian(Ipv4Addr::new(0, 0, 0, 0)));
        assert!(is_bgp_martian(Ipv4Addr::new(0, 1, 2, 3)));
        assert!(is_bgp_martian(Ipv4Addr::new(10, 0, 0, 1)));
        assert!(is_bgp_martian(Ipv4Addr::new(172, 16, 0, 1)));
        assert!(is_bgp_martian(Ipv4Addr::new(192, 168, 0, 1)));
        assert!(is_bgp_martian(Ipv4Addr::new(100, 64, 0, 1)));
        assert!(is_bgp_martian(Ipv4Addr::new(127, 0, 0, 1)));
        assert!(is_bgp_martian(Ipv4Addr::new(169, 254, 0, 1)));
        assert!(is_bgp_martian(Ipv4Addr::new(192, 0, 2, 1)));
        assert!(is_bgp_martian(Ipv4Addr::new(198, 51, 100, 1)));
        assert!(is_bgp_martian(Ipv4Addr::new(203, 0, 113, 1)));
        assert!(is_bgp_martian(Ipv4Addr::new(224, 0, 0, 1)));
        assert!(is_bgp_martian(Ipv4Addr::new(240, 0, 0, 1)));
        assert!(is_bgp_martian(Ipv4Addr::new(255, 255, 255, 255)));
    }

    #[test]
    fn accepts_globally_routable_addresses() {
        assert!(!is_bgp_martian(Ipv4Addr::new(1, 1, 1, 1)));
        assert!(!is_bgp_martian(Ipv4Addr::new(8, 8, 8, 8)));
        assert!(!is_bgp_martian(Ipv4Addr::new(100, 63, 255, 255)));
        assert!(!is_bgp_martian(Ipv4Addr::new(100, 128, 0, 0)));
        assert!(!is_bgp_martian(Ipv4Addr::new(7, 7, 7, 7)));
    }

    #[test]
    fn is_idempotent() {
        for ip in [
            Ipv4Addr::new(1, 1, 1, 1),
            Ipv4Addr::new(10, 0, 0, 1),
            Ipv4Addr::new(224, 0, 0, 9),
        ] {
            assert_eq!(is_bgp_martian(ip), is_bgp_martian(ip));
        }
    }
}
