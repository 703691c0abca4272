//! Web server command.

use std::path::PathBuf;

use console::style;

use crate::config::{Settings, DEFAULT_HOST, DEFAULT_PORT};

/// Start the web server.
pub async fn cmd_serve(bind: &str, model: Option<PathBuf>) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;
    let settings = Settings { host, port, model };

    println!(
        "{} Starting NER service at http://{}:{}",
        style("→").cyan(),
        settings.host,
        settings.port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(&settings).await
}

/// Parse a bind address that can be:
/// - Just a port: "8000" -> 127.0.0.1:8000
/// - Just a host: "0.0.0.0" -> 0.0.0.0:8000
/// - Host and port: "0.0.0.0:8000" -> 0.0.0.0:8000
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok((DEFAULT_HOST.to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if host.is_empty() {
            anyhow::bail!("Invalid bind address: {}", bind);
        }
        return match port_str.parse::<u16>() {
            Ok(port) => Ok((host.to_string(), port)),
            Err(_) => Err(anyhow::anyhow!("Invalid bind address: {}", bind)),
        };
    }

    // Must be just a host, use default port
    Ok((bind.to_string(), DEFAULT_PORT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_port() {
        let (host, port) = parse_bind_address("9000").unwrap();
        assert_eq!(host, DEFAULT_HOST);
        assert_eq!(port, 9000);
    }

    #[test]
    fn test_parse_bare_host() {
        let (host, port) = parse_bind_address("0.0.0.0").unwrap();
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, DEFAULT_PORT);
    }

    #[test]
    fn test_parse_host_and_port() {
        let (host, port) = parse_bind_address("0.0.0.0:9000").unwrap();
        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, 9000);
    }

    #[test]
    fn test_parse_rejects_bad_port() {
        assert!(parse_bind_address("localhost:notaport").is_err());
    }
}
