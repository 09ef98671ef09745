use std::net::SocketAddr;

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Overrides the Leptos `site-addr` when present.
    #[serde(default)]
    pub server: Option<ServerConfig>,
    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DataConfig {
    #[serde(default = "default_issues_path")]
    pub issues_path: String,
}

fn default_issues_path() -> String {
    "data/issues.json".into()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            issues_path: default_issues_path(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        format!("{}:{}", self.bind, self.port).parse().ok()
    }
}

pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

pub fn load(path: &str) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to parse config {path}: {e}, using defaults");
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("failed to read config {path}: {e}, using defaults");
            Config::default()
        }
    }
}

/// Value following `--config`, if any.
pub fn path_from_args(args: &[String]) -> Option<String> {
    args.iter()
        .position(|a| a == "--config")
        .and_then(|idx| args.get(idx + 1))
        .cloned()
}
