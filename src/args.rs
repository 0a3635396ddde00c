use crate::error::{Error, Result};
use std::net::Ipv4Addr;

pub const USAGE: &str = "Uso: fastping <ipv4>";

pub struct EmitterArgs {
    pub dst: Ipv4Addr,
}

pub enum Command {
    Run(EmitterArgs),
    Help,
}

pub fn parse() -> Result<Command> {
    parse_from(std::env::args().skip(1))
}

/// Aceita exatamente um argumento posicional: o IPv4 de destino.
/// Não há resolução de DNS.
pub fn parse_from<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dst_str: Option<String> = None;

    for arg in args {
        match arg.as_ref() {
            "-h" | "--help" => return Ok(Command::Help),
            val => {
                if dst_str.is_some() {
                    return Err(Error::Usage(format!("argumento inesperado {val:?}. {USAGE}")));
                }
                dst_str = Some(val.to_string());
            }
        }
    }

    let dst_str = dst_str.ok_or_else(|| Error::Usage(USAGE.to_string()))?;
    let dst: Ipv4Addr = dst_str
        .parse()
        .map_err(|_| Error::AddressFormat { input: dst_str.clone() })?;

    Ok(Command::Run(EmitterArgs { dst }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<Ipv4Addr> {
        match parse_from(args)? {
            Command::Run(a) => Ok(a.dst),
            Command::Help => panic!("esperava Run"),
        }
    }

    #[test]
    fn parses_dotted_quad() {
        assert_eq!(run(&["192.0.2.1"]).unwrap(), Ipv4Addr::new(192, 0, 2, 1));
    }

    #[test]
    fn rejects_non_address() {
        let err = run(&["not-an-ip"]).unwrap_err();
        assert!(matches!(err, Error::AddressFormat { ref input } if input == "not-an-ip"));
    }

    #[test]
    fn rejects_hostnames_and_ipv6() {
        assert!(matches!(run(&["localhost"]), Err(Error::AddressFormat { .. })));
        assert!(matches!(run(&["::1"]), Err(Error::AddressFormat { .. })));
        assert!(matches!(run(&["10.0.0.256"]), Err(Error::AddressFormat { .. })));
    }

    #[test]
    fn missing_destination_is_usage_error() {
        let err = run(&[]).unwrap_err();
        assert!(matches!(err, Error::Usage(_)));
        assert!(err.to_string().contains(USAGE));
    }

    #[test]
    fn surplus_argument_is_usage_error() {
        assert!(matches!(run(&["10.0.0.1", "10.0.0.2"]), Err(Error::Usage(_))));
    }

    #[test]
    fn help_flag() {
        assert!(matches!(parse_from(["--help"]), Ok(Command::Help)));
        assert!(matches!(parse_from(["10.0.0.1", "-h"]), Ok(Command::Help)));
    }
}
