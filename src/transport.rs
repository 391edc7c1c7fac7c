use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use crate::error::{GlimmerError, GlimmerResult};

/// Port the remote strip driver listens on.
pub const DEFAULT_PORT: u16 = 5765;

/// The consumed transport seam: one serialized frame in, best-effort
/// delivery out. The pipeline only ever sees this trait, so tests swap in
/// capturing or failing fakes.
pub trait FrameSink {
    fn send_frame(&mut self, payload: &[u8]) -> GlimmerResult<()>;
}

/// Best-effort datagram sender. The remote endpoint is resolved once at
/// construction; each frame goes out as a single datagram.
#[derive(Debug)]
pub struct UdpSender {
    socket: UdpSocket,
    remote: SocketAddr,
}

impl UdpSender {
    pub fn connect(host: &str, port: u16) -> GlimmerResult<Self> {
        let remote = (host, port)
            .to_socket_addrs()
            .map_err(|e| GlimmerError::transport(format!("resolve {host}:{port}: {e}")))?
            .next()
            .ok_or_else(|| {
                GlimmerError::transport(format!("{host}:{port} resolved to no addresses"))
            })?;

        let local: SocketAddr = if remote.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        let socket = UdpSocket::bind(local)
            .map_err(|e| GlimmerError::transport(format!("bind udp socket: {e}")))?;

        tracing::info!(%remote, "udp sender ready");
        Ok(Self { socket, remote })
    }

    pub fn remote(&self) -> SocketAddr {
        self.remote
    }
}

impl FrameSink for UdpSender {
    fn send_frame(&mut self, payload: &[u8]) -> GlimmerResult<()> {
        self.socket
            .send_to(payload, self.remote)
            .map_err(|e| GlimmerError::transport(format!("send to {}: {e}", self.remote)))?;
        Ok(())
    }
}
