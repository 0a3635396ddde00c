use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, info};

use crate::channel::Transmit;
use crate::error::{Error, Result};
use crate::icmp::EchoRequest;

/// Intervalo entre envios (~1000 pacotes/s, limitado pelo escalonador do SO).
pub const PACING_INTERVAL: Duration = Duration::from_millis(1);

/// Laço de envio: um canal, um pacote reaproveitado, uma flag de parada.
pub struct Emitter<T: Transmit> {
    channel: T,
    packet: EchoRequest,
    interval: Duration,
    running: Arc<AtomicBool>,
}

impl<T: Transmit> Emitter<T> {
    pub fn new(channel: T, packet: EchoRequest, running: Arc<AtomicBool>) -> Self {
        Self {
            channel,
            packet,
            interval: PACING_INTERVAL,
            running,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Envia até a flag `running` ser limpa (Ctrl+C / SIGTERM) ou até a
    /// primeira falha de envio, que é fatal. Consome o emissor: o canal é
    /// liberado ao retornar, com erro ou não.
    ///
    /// Devolve o número de pacotes transmitidos quando interrompido.
    pub fn run(mut self) -> Result<u64> {
        let mut transmitted = 0u64;

        loop {
            if !self.running.load(Ordering::SeqCst) {
                break;
            }

            let seq = self.packet.advance();
            debug_assert!(self.packet.is_valid());
            let pkt = self.packet.as_bytes();

            match self.channel.transmit(pkt) {
                Ok(n) if n == pkt.len() => {}
                Ok(n) => {
                    return Err(Error::Transmit {
                        seq,
                        reason: io::Error::new(
                            io::ErrorKind::WriteZero,
                            format!("envio truncado: {} de {} bytes", n, pkt.len()),
                        ),
                    });
                }
                Err(reason) => return Err(Error::Transmit { seq, reason }),
            }

            transmitted += 1;
            debug!(icmp_seq = seq, checksum = self.packet.checksum(), "echo request enviado");

            std::thread::sleep(self.interval);
        }

        info!(transmitted, "envio interrompido");
        Ok(transmitted)
    }
}
