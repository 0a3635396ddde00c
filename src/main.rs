// Tratamento de erros ergonômico na borda do binário
use anyhow::Context;

use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{error, info};

// Módulos locais
mod args;
mod channel;
mod emitter;
mod error;
mod icmp;
mod logging;

use args::Command;
use channel::RawChannel;
use emitter::{Emitter, PACING_INTERVAL};
use icmp::{EchoRequest, HEADER_SIZE, PACKET_SIZE};

/// 128 + SIGINT, como os shells reportam um processo interrompido.
const EXIT_INTERRUPTED: u8 = 130;

/// Dispara Echo Requests ICMP contra um IPv4 a ~1000 pacotes/s até ser
/// interrompido. Requer privilégios para abrir socket RAW.
fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let args = match args::parse()? {
        Command::Run(a) => a,
        Command::Help => {
            println!("{}", args::USAGE);
            return Ok(ExitCode::SUCCESS);
        }
    };
    let dst = args.dst;

    // Ctrl+C / SIGTERM apenas sinalizam; o laço sai e o socket é fechado no drop
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .context("Erro ao configurar handler de Ctrl+C")?;

    let channel = RawChannel::open(dst)?;

    // Identificador: PID do processo, fixo durante toda a execução
    let ident: u16 = (std::process::id() & 0xFFFF) as u16;
    let packet = EchoRequest::new(ident);

    info!(
        "Enviando ICMP echo requests para {} com {} bytes de dados (id={:#06x}) a cada {:?}",
        dst,
        PACKET_SIZE - HEADER_SIZE,
        packet.ident(),
        PACING_INTERVAL
    );

    let transmitted = Emitter::new(channel, packet, running).run()?;

    info!("--- {} --- {} pacotes transmitidos", dst, transmitted);
    Ok(ExitCode::from(EXIT_INTERRUPTED))
}
