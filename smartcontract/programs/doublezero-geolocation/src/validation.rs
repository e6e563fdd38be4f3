use std::net::Ipv4Addr;

use crate::error::GeolocationError;

pub const MAX_CODE_LENGTH: usize = 32;

pub fn validate_code_length(code: &str) -> Result<(), GeolocationError> {
    if code.is_empty() || code.len() > MAX_CODE_LENGTH {
        return Err(GeolocationError::InvalidCodeLength);
    }
    Ok(())
}

/// Validates that the given IPv4 address is publicly routable.
/// Rejects all non-globally-routable addresses including RFC 1918 private,
/// loopback, multicast, broadcast, link-local, shared address space (RFC 6598),
/// documentation/test ranges, benchmarking, protocol assignments, and reserved.
pub fn validate_public_ip(ip: &Ipv4Addr) -> Result<(), GeolocationError> {
    let octets = ip.octets();

    if ip.is_unspecified() {
        return Err(GeolocationError::InvalidIpAddress);
    }

    // 0.0.0.0/8 "This network" (RFC 791)
    if octets[0] == 0 {
        return Err(GeolocationError::InvalidIpAddress);
    }

    if ip.is_loopback() {
        return Err(GeolocationError::InvalidIpAddress);
    }

    // Private: 10.0.0.0/8
    if octets[0] == 10 {
        return Err(GeolocationError::InvalidIpAddress);
    }

    // Private: 172.16.0.0/12
    if octets[0] == 172 && (16..=31).contains(&octets[1]) {
        return Err(GeolocationError::InvalidIpAddress);
    }

    // Private: 192.168.0.0/16
    if octets[0] == 192 && octets[1] == 168 {
        return Err(GeolocationError::InvalidIpAddress);
    }

    // Shared Address Space: 100.64.0.0/10 (RFC 6598)
    if octets[0] == 100 && (64..=127).contains(&octets[1]) {
        return Err(GeolocationError::InvalidIpAddress);
    }

    // Link-local: 169.254.0.0/16
    if octets[0] == 169 && octets[1] == 254 {
        return Err(GeolocationError::InvalidIpAddress);
    }

    // Protocol Assignments: 192.0.0.0/24 (RFC 6890)
    if octets[0] == 192 && octets[1] == 0 && octets[2] == 0 {
        return Err(GeolocationError::InvalidIpAddress);
    }

    // Documentation: 192.0.2.0/24 TEST-NET-1 (RFC 5737)
    if octets[0] == 192 && octets[1] == 0 && octets[2] == 2 {
        return Err(GeolocationError::InvalidIpAddress);
    }

    // Benchmarking: 198.18.0.0/15 (RFC 2544)
    if octets[0] == 198 && (18..=19).contains(&octets[1]) {
        return Err(GeolocationError::InvalidIpAddress);
    }

    // Documentation: 198.51.100.0/24 TEST-NET-2 (RFC 5737)
    if octets[0] == 198 && octets[1] == 51 && octets[2] == 100 {
        return Err(GeolocationError::InvalidIpAddress);
    }

    // Documentation: 203.0.113.0/24 TEST-NET-3 (RFC 5737)
    if octets[0] == 203 && octets[1] == 0 && octets[2] == 113 {
        return Err(GeolocationError::InvalidIpAddress);
    }

    // Multicast: 224.0.0.0/4 (224-239.x.x.x)
    if (224..=239).contains(&octets[0]) {
        return Err(GeolocationError::InvalidIpAddress);
    }

    if ip.is_broadcast() {
        return Err(GeolocationError::InvalidIpAddress);
    }

    // Reserved: 240-254.x.x.x (future use)
    if octets[0] >= 240 {
        return Err(GeolocationError::InvalidIpAddress);
    }

    Ok(())
}
