//! Inicialização do tracing.
//!
//! `RUST_LOG` tem prioridade; sem ele o nível padrão é `info`. A saída vai
//! para stderr para que diagnósticos não se misturem com stdout.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub const DEFAULT_LEVEL: &str = "info";

pub fn init() {
    let env_filter = filter(std::env::var("RUST_LOG").ok().as_deref());

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(std::io::stderr),
    );
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn filter(directives: Option<&str>) -> EnvFilter {
    match directives {
        Some(d) if !d.trim().is_empty() => {
            EnvFilter::try_new(d).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
        }
        _ => EnvFilter::new(DEFAULT_LEVEL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info() {
        assert_eq!(filter(None).to_string(), "info");
        assert_eq!(filter(Some("  ")).to_string(), "info");
    }

    #[test]
    fn honours_directives() {
        assert_eq!(filter(Some("debug")).to_string(), "debug");
    }
}
