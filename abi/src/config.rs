use std::fs;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    pub fn load(filename: &str) -> Result<Self> {
        let config = fs::read_to_string(filename)
            .with_context(|| format!("failed to read config file {}", filename))?;
        serde_yaml::from_str(&config).context("failed to parse config file")
    }
}

impl GatewayConfig {
    pub fn bookings_url(&self) -> String {
        format!("{}/bookings", self.endpoint.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_should_work() {
        let config = Config::load("../gateway/fixtures/config.yml").unwrap();
        assert_eq!(
            config,
            Config {
                gateway: GatewayConfig {
                    endpoint: "http://localhost:8080/api".to_string(),
                    timeout_secs: 10,
                },
            }
        )
    }

    #[test]
    fn timeout_should_default_when_missing() {
        let config: Config =
            serde_yaml::from_str("gateway:\n  endpoint: http://localhost:8080/api\n").unwrap();
        assert_eq!(config.gateway.timeout_secs, 30);
    }

    #[test]
    fn bookings_url_should_strip_trailing_slash() {
        let gateway = GatewayConfig {
            endpoint: "http://localhost:8080/api/".to_string(),
            timeout_secs: 30,
        };
        assert_eq!(gateway.bookings_url(), "http://localhost:8080/api/bookings");
    }
}
