use std::io;

/// Erros fatais do emissor. Nenhum deles é repetido automaticamente.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error("endereço IPv4 inválido: {input:?}")]
    AddressFormat { input: String },

    #[error("sem permissão para abrir socket RAW (requer privilégios elevados, ex.: root ou CAP_NET_RAW): {0}")]
    Permission(io::Error),

    #[error("falha ao criar socket RAW: {0}")]
    Open(io::Error),

    #[error("falha ao enviar icmp_seq={seq}: {reason}")]
    Transmit { seq: u16, reason: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Classifica a falha de criação do socket.
    pub fn from_open(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Error::Permission(err),
            _ => match err.raw_os_error() {
                Some(libc::EPERM) | Some(libc::EACCES) => Error::Permission(err),
                _ => Error::Open(err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eperm_is_permission_error() {
        let err = Error::from_open(io::Error::from_raw_os_error(libc::EPERM));
        assert!(matches!(err, Error::Permission(_)));
        assert!(err.to_string().contains("privilégios elevados"));
    }

    #[test]
    fn eacces_is_permission_error() {
        let err = Error::from_open(io::Error::from_raw_os_error(libc::EACCES));
        assert!(matches!(err, Error::Permission(_)));
    }

    #[test]
    fn other_open_failures_keep_their_reason() {
        let err = Error::from_open(io::Error::from_raw_os_error(libc::EMFILE));
        assert!(matches!(err, Error::Open(_)));
    }

    #[test]
    fn transmit_error_names_the_sequence() {
        let err = Error::Transmit {
            seq: 42,
            reason: io::Error::other("network is unreachable"),
        };
        let msg = err.to_string();
        assert!(msg.contains("icmp_seq=42"));
        assert!(msg.contains("network is unreachable"));
    }
}
