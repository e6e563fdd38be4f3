//! TWAMP-Light ("unauthenticated" mode, RFC 5357 appendix I) packet wire
//! format shared by the sender and reflector.

use std::time::{SystemTime, UNIX_EPOCH};

/// Fixed 14-byte TWAMP-Light sender packet: sequence number, two timestamps,
/// and an error estimate. Padded by the caller to a minimum Ethernet-safe
/// size; the reflector doesn't care about trailing padding bytes.
pub const SENDER_PACKET_LEN: usize = 14;
/// Fixed 41-byte TWAMP-Light reflector (response) packet.
pub const REFLECTOR_PACKET_LEN: usize = 41;

/// A TWAMP timestamp: NTP-format seconds since 1900-01-01 plus a fractional
/// part, as required by RFC 1305 section 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub seconds: u32,
    pub fraction: u32,
}

const NTP_UNIX_EPOCH_OFFSET_SECS: u64 = 2_208_988_800;

impl Timestamp {
    pub fn now() -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            seconds: (since_epoch.as_secs() + NTP_UNIX_EPOCH_OFFSET_SECS) as u32,
            fraction: (since_epoch.subsec_nanos() as u64 * (1u64 << 32) / 1_000_000_000) as u32,
        }
    }

    fn to_bytes(self) -> [u8; 8] {
        let mut buf = [0u8; 8];
        buf[0..4].copy_from_slice(&self.seconds.to_be_bytes());
        buf[4..8].copy_from_slice(&self.fraction.to_be_bytes());
        buf
    }

    fn from_bytes(buf: &[u8]) -> Self {
        Self {
            seconds: u32::from_be_bytes(buf[0..4].try_into().unwrap()),
            fraction: u32::from_be_bytes(buf[4..8].try_into().unwrap()),
        }
    }

    /// Nanoseconds elapsed between `self` (sent) and `other` (received).
    /// Saturates to zero if the clocks disagree about ordering.
    pub fn elapsed_ns(self, other: Timestamp) -> u64 {
        let self_ns =
            self.seconds as u64 * 1_000_000_000 + (self.fraction as u64 * 1_000_000_000 >> 32);
        let other_ns =
            other.seconds as u64 * 1_000_000_000 + (other.fraction as u64 * 1_000_000_000 >> 32);
        other_ns.saturating_sub(self_ns)
    }
}

pub struct SenderPacket {
    pub sequence_number: u32,
    pub timestamp: Timestamp,
}

impl SenderPacket {
    pub fn encode(&self) -> [u8; SENDER_PACKET_LEN] {
        let mut buf = [0u8; SENDER_PACKET_LEN];
        buf[0..4].copy_from_slice(&self.sequence_number.to_be_bytes());
        buf[4..12].copy_from_slice(&self.timestamp.to_bytes());
        // error estimate (2 bytes), left zeroed: no synchronized clock claimed.
        buf
    }

    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < SENDER_PACKET_LEN {
            return None;
        }
        Some(Self {
            sequence_number: u32::from_be_bytes(buf[0..4].try_into().unwrap()),
            timestamp: Timestamp::from_bytes(&buf[4..12]),
        })
    }
}

pub struct ReflectorPacket {
    pub sequence_number: u32,
    pub receive_timestamp: Timestamp,
    pub sender_sequence_number: u32,
    pub sender_timestamp: Timestamp,
}

impl ReflectorPacket {
    /// Builds the reflector's response to a received sender packet.
    pub fn reflect(sender: &SenderPacket, sequence_number: u32) -> Self {
        Self {
            sequence_number,
            receive_timestamp: Timestamp::now(),
            sender_sequence_number: sender.sequence_number,
            sender_timestamp: sender.timestamp,
        }
    }

    pub fn encode(&self) -> [u8; REFLECTOR_PACKET_LEN] {
        let mut buf = [0u8; REFLECTOR_PACKET_LEN];
        buf[0..4].copy_from_slice(&self.sequence_number.to_be_bytes());
        buf[4..12].copy_from_slice(&self.receive_timestamp.to_bytes());
        // error estimate + MBZ (4 bytes), left zeroed.
        buf[16..20].copy_from_slice(&self.sender_sequence_number.to_be_bytes());
        buf[20..28].copy_from_slice(&self.sender_timestamp.to_bytes());
        buf
    }

    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < REFLECTOR_PACKET_LEN {
            return None;
        }
        Some(Self {
            sequence_number: u32::from_be_bytes(buf[0..4].try_into().unwrap()),
            receive_timestamp: Timestamp::from_bytes(&buf[4..12]),
            sender_sequence_number: u32::from_be_bytes(buf[16..20].try_into().unwrap()),
            sender_timestamp: Timestamp::from_bytes(&buf[20..28]),
        })
    }
}
