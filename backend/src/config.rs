use anyhow::{anyhow, Result};
use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};
use tracing::{info, warn};

pub const DEFAULT_FRONTEND_DIR: &str = "frontend/site";
pub const DEFAULT_WASM_PKG_DIR: &str = "frontend/restaurant-wasm/pkg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Landing page markup and styles.
    pub frontend_dir: PathBuf,
    /// Output of wasm-bindgen, mounted under `/pkg`.
    pub wasm_pkg_dir: PathBuf,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: try_load(&lookup, "PORT", "3000")?,
            frontend_dir: load(&lookup, "FRONTEND_DIR", DEFAULT_FRONTEND_DIR).into(),
            wasm_pkg_dir: load(&lookup, "WASM_PKG_DIR", DEFAULT_WASM_PKG_DIR).into(),
            request_timeout: Duration::from_secs(try_load(&lookup, "REQUEST_TIMEOUT_SECS", "30")?),
        })
    }
}

fn load<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<F, T>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let value = load(lookup, key, default);
    value.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        anyhow!("Invalid {key} value {value:?}: {e}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.frontend_dir, PathBuf::from(DEFAULT_FRONTEND_DIR));
        assert_eq!(config.wasm_pkg_dir, PathBuf::from(DEFAULT_WASM_PKG_DIR));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("FRONTEND_DIR", "/srv/site"),
            ("WASM_PKG_DIR", "/srv/pkg"),
            ("REQUEST_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.frontend_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.wasm_pkg_dir, PathBuf::from("/srv/pkg"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_invalid_numbers() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(config_from(&[("REQUEST_TIMEOUT_SECS", "-1")]).is_err());
    }
}
