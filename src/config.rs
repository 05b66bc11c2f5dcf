use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{env_var_error, Error};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_OSRM_BASE_URL: &str = "https://router.project-osrm.org";
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_USER_AGENT: &str = "ojek/0.1 (fare estimator)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub nominatim_base_url: String,
    pub osrm_base_url: String,
    pub tile_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = get("OJEK_BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse()
            .map_err(env_var_error)?;

        let timeout_secs: u64 = get("OJEK_HTTP_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(env_var_error)?;

        Ok(Config {
            bind_addr,
            nominatim_base_url: trim_base(get("NOMINATIM_BASE_URL", DEFAULT_NOMINATIM_BASE_URL)),
            osrm_base_url: trim_base(get("OSRM_BASE_URL", DEFAULT_OSRM_BASE_URL)),
            tile_url: get("OJEK_TILE_URL", DEFAULT_TILE_URL),
            user_agent: get("OJEK_USER_AGENT", DEFAULT_USER_AGENT),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn http_client(&self) -> Result<reqwest::Client, Error> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()?;

        Ok(client)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            nominatim_base_url: DEFAULT_NOMINATIM_BASE_URL.into(),
            osrm_base_url: DEFAULT_OSRM_BASE_URL.into(),
            tile_url: DEFAULT_TILE_URL.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.nominatim_base_url, DEFAULT_NOMINATIM_BASE_URL);
        assert_eq!(config.osrm_base_url, DEFAULT_OSRM_BASE_URL);
        assert_eq!(config.tile_url, DEFAULT_TILE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn overrides_and_trailing_slashes() {
        let config = Config::from_lookup(lookup(&[
            ("OJEK_BIND_ADDR", "0.0.0.0:8080"),
            ("OSRM_BASE_URL", "http://localhost:5000/"),
            ("OJEK_HTTP_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.osrm_base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn rejects_garbage() {
        let err = Config::from_lookup(lookup(&[("OJEK_HTTP_TIMEOUT_SECS", "soon")])).unwrap_err();
        assert_eq!(err.code, 1);

        assert!(Config::from_lookup(lookup(&[("OJEK_BIND_ADDR", "nowhere")])).is_err());
    }
}
