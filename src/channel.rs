// Criação e configuração de sockets de baixo nível
use socket2::{Domain, Protocol, SockAddr, Socket, Type};

use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use tracing::debug;

use crate::error::{Error, Result};

/// Canal de transmissão de um destino fixo. O emissor só escreve; nunca lê.
pub trait Transmit {
    fn transmit(&mut self, packet: &[u8]) -> io::Result<usize>;
}

/// Socket ICMP RAW (AF_INET, SOCK_RAW, IPPROTO_ICMP) amarrado a um destino.
/// O socket é fechado no `Drop`, em qualquer caminho de saída.
pub struct RawChannel {
    sock: Socket,
    dst: SockAddr,
}

impl RawChannel {
    /// Abre o socket RAW. Requer root ou CAP_NET_RAW.
    pub fn open(dst: Ipv4Addr) -> Result<Self> {
        let sock = Socket::new(Domain::IPV4, Type::from(libc::SOCK_RAW), Some(Protocol::ICMPV4))
            .map_err(Error::from_open)?;

        // Porta 0 é ignorada para ICMP
        let dst = SockAddr::from(SocketAddr::V4(SocketAddrV4::new(dst, 0)));

        debug!("socket RAW aberto");
        Ok(Self { sock, dst })
    }
}

impl Transmit for RawChannel {
    fn transmit(&mut self, packet: &[u8]) -> io::Result<usize> {
        self.sock.send_to(packet, &self.dst)
    }
}

impl Drop for RawChannel {
    fn drop(&mut self) {
        debug!("socket RAW liberado");
    }
}
