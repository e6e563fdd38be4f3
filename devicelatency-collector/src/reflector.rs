use std::time::Duration;

use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;

use crate::twamp::{ReflectorPacket, SenderPacket};

/// Long-running UDP listener that echoes TWAMP-Light probes addressed to
/// this device. One task, one socket, for the collector's lifetime.
pub struct Reflector {
    socket: UdpSocket,
    idle_timeout: Duration,
}

impl Reflector {
    pub async fn bind(listen_addr: std::net::SocketAddr, idle_timeout: Duration) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(listen_addr).await?;
        Ok(Self {
            socket,
            idle_timeout,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<std::net::SocketAddr> {
        self.socket.local_addr()
    }

    pub async fn run(&self, cancel: CancellationToken) {
        let mut buf = [0u8; 256];
        let mut sequence_number: u32 = 0;
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    log::info!("twamp reflector shutting down");
                    return;
                }
                result = tokio::time::timeout(self.idle_timeout, self.socket.recv_from(&mut buf)) => {
                    let Ok(recv_result) = result else {
                        continue;
                    };
                    let (len, from) = match recv_result {
                        Ok(v) => v,
                        Err(err) => {
                            log::warn!("twamp reflector recv error: {err}");
                            continue;
                        }
                    };
                    let Some(sender_packet) = SenderPacket::decode(&buf[..len]) else {
                        metrics::counter!("doublezero_collector_reflector_malformed_packets").increment(1);
                        continue;
                    };
                    sequence_number = sequence_number.wrapping_add(1);
                    let response = ReflectorPacket::reflect(&sender_packet, sequence_number);
                    if let Err(err) = self.socket.send_to(&response.encode(), from).await {
                        log::warn!("twamp reflector send error to {from}: {err}");
                    }
                }
            }
        }
    }
}
