use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};

use tokio::net::UdpSocket;

use crate::twamp::{ReflectorPacket, SenderPacket, Timestamp};

/// A bound-and-connected TWAMP-Light sender socket for one peer. Tracks its
/// own age so the caller can decide when to recycle it.
pub struct Sender {
    socket: UdpSocket,
    created_at: Instant,
    next_sequence_number: u32,
}

impl Sender {
    pub async fn bind(local_ip: IpAddr, remote_addr: SocketAddr) -> std::io::Result<Self> {
        let bind_addr = SocketAddr::new(local_ip, 0);
        let socket = UdpSocket::bind(bind_addr).await?;
        socket.connect(remote_addr).await?;
        Ok(Self {
            socket,
            created_at: Instant::now(),
            next_sequence_number: 0,
        })
    }

    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    /// Sends one probe and waits up to `timeout` for the matching reflector
    /// response. Returns the round-trip time on success.
    pub async fn probe(&mut self, timeout: Duration) -> Option<Duration> {
        let sequence_number = self.next_sequence_number;
        self.next_sequence_number = self.next_sequence_number.wrapping_add(1);

        let packet = SenderPacket {
            sequence_number,
            timestamp: Timestamp::now(),
        };
        let sent_at = Instant::now();
        if let Err(err) = self.socket.send(&packet.encode()).await {
            log::debug!("twamp sender: send failed: {err}");
            return None;
        }

        let mut buf = [0u8; 256];
        let recv = tokio::time::timeout(timeout, self.socket.recv(&mut buf)).await;
        let len = match recv {
            Ok(Ok(len)) => len,
            Ok(Err(err)) => {
                log::debug!("twamp sender: recv failed: {err}");
                return None;
            }
            Err(_) => return None,
        };

        let reflected = ReflectorPacket::decode(&buf[..len])?;
        if reflected.sender_sequence_number != sequence_number {
            return None;
        }
        Some(sent_at.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflector::Reflector;
    use std::net::{IpAddr, Ipv4Addr};

    #[tokio::test]
    async fn probe_round_trips_against_a_live_reflector() {
        let reflector = Reflector::bind(
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0),
            Duration::from_secs(5),
        )
        .await
        .unwrap();
        let reflector_addr = reflector.local_addr().unwrap();
        let cancel = tokio_util::sync::CancellationToken::new();
        let reflector_cancel = cancel.clone();
        let reflector_task = tokio::spawn(async move { reflector.run(reflector_cancel).await });

        let mut sender = Sender::bind(IpAddr::V4(Ipv4Addr::LOCALHOST), reflector_addr)
            .await
            .unwrap();
        let rtt = sender.probe(Duration::from_secs(1)).await;
        assert!(rtt.is_some());

        cancel.cancel();
        reflector_task.await.unwrap();
    }

    #[tokio::test]
    async fn probe_times_out_with_no_reflector() {
        let mut sender = Sender::bind(
            IpAddr::V4(Ipv4Addr::LOCALHOST),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 1),
        )
        .await
        .unwrap();
        let rtt = sender.probe(Duration::from_millis(50)).await;
        assert!(rtt.is_none());
    }
}
