use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use serde_json::{Map, Value, json};

/// Castellan service host
#[derive(Debug, Clone, Parser)]
#[command(name = "castellan", author, version, about, long_about = None)]
pub struct Args {
    /// The port for unencrypted dashboard connections [default: 80]
    #[arg(long, value_name = "PORT")]
    pub dashboard_port: Option<u16>,

    /// The host IP to listen on for dashboard connections [default: 0.0.0.0]
    #[arg(long, value_name = "IP")]
    pub dashboard_host: Option<IpAddr>,

    /// Configuration file. Without it, `config.{json,toml,yaml,yml}` is
    /// looked up in the working directory
    #[arg(long, short, value_name = "FILE", env = "CASTELLAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Prefix of environment variables that override configuration keys
    #[arg(long, value_name = "PREFIX", default_value = "CASTELLAN")]
    pub env_prefix: String,
}

impl Args {
    /// The command-line configuration layer: only flags that were given.
    pub fn overrides(&self) -> Value {
        let mut dashboard = Map::new();
        if let Some(port) = self.dashboard_port {
            dashboard.insert("port".into(), json!(port));
        }
        if let Some(host) = self.dashboard_host {
            dashboard.insert("host".into(), json!(host.to_string()));
        }

        if dashboard.is_empty() {
            json!({})
        } else {
            json!({ "dashboard": dashboard })
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_flags_no_overrides() {
        let args = Args::try_parse_from(["castellan"]).unwrap();
        assert_eq!(args.overrides(), json!({}));
        assert_eq!(args.env_prefix, "CASTELLAN");
    }

    #[test]
    fn given_flags_become_overrides() {
        let args = Args::try_parse_from([
            "castellan",
            "--dashboard-port",
            "8080",
            "--dashboard-host",
            "127.0.0.1",
        ])
        .unwrap();
        assert_eq!(
            args.overrides(),
            json!({"dashboard": {"port": 8080, "host": "127.0.0.1"}})
        );
    }

    #[test]
    fn port_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["castellan", "--dashboard-port", "70000"]).is_err());
        assert!(Args::try_parse_from(["castellan", "--dashboard-host", "not-an-ip"]).is_err());
    }

    #[test]
    fn ipv6_host_is_accepted() {
        let args = Args::try_parse_from(["castellan", "--dashboard-host", "::1"]).unwrap();
        assert_eq!(args.overrides(), json!({"dashboard": {"host": "::1"}}));
    }
}
