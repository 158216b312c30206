use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use castellan_action::Action;
use castellan_config::{Config, ConfigBuilder, ConfigResult, ConfigSource};
use serde::{Deserialize, Serialize};

use crate::cli::Args;

/// Stem of the configuration file looked up in the working directory.
pub const CONFIG_NAME: &str = "config";

/// Typed view of the merged configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Dashboard listener
    pub dashboard: DashboardSettings,
    /// Action definitions
    pub actions: Vec<Action>,
}

/// Dashboard listener settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// Listen address
    pub host: IpAddr,
    /// Listen port
    pub port: u16,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 80,
        }
    }
}

impl DashboardSettings {
    /// The socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ServiceSettings {
    /// Extract settings from a merged configuration.
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        config.get("")
    }
}

/// Build the layered configuration for this process.
///
/// Layers, lowest first: built-in defaults, the config file (explicit via
/// `--config`, otherwise discovered in `cwd`), prefixed environment
/// variables, then flags that were actually given.
pub async fn load_config(args: &Args, cwd: &Path) -> ConfigResult<Config> {
    let file = match &args.config {
        Some(path) => ConfigSource::File(cwd.join(path)),
        None => ConfigSource::discover(cwd, CONFIG_NAME),
    };

    ConfigBuilder::new()
        .with_defaults(ServiceSettings::default())?
        .with_source(file)
        .with_source(ConfigSource::EnvWithPrefix(args.env_prefix.clone()))
        .with_overrides(args.overrides())
        .build()
        .await
}
