use std::net::SocketAddr;
use std::path::PathBuf;

use appscout_catalog::DEFAULT_ENDPOINT;

/// Server configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub catalog_url: String,
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    /// PORT defaults to 3000.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = var("PORT")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("PORT", "must be a port number (0-65535)"))?;

        let host = var("APPSCOUT_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let listen_addr = format!("{}:{}", host, port)
            .parse()
            .map_err(|_| ConfigError::Invalid("APPSCOUT_HOST", "must be a valid IP address"))?;

        let catalog_url = var("APPSCOUT_CATALOG_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        if !(catalog_url.starts_with("http://") || catalog_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(
                "APPSCOUT_CATALOG_URL",
                "must be an http:// or https:// URL",
            ));
        }

        let static_dir = var("APPSCOUT_STATIC_DIR")
            .unwrap_or_else(|| "crates/appscout-server/static".to_string())
            .into();

        Ok(Config {
            listen_addr,
            catalog_url,
            static_dir,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str, &'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Invalid(var, msg) => write!(f, "Invalid value for {}: {}", var, msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.catalog_url, "https://itunes.apple.com/search");
        assert_eq!(
            config.static_dir,
            PathBuf::from("crates/appscout-server/static")
        );
    }

    #[test]
    fn test_port_from_env() {
        let config = load(&[("PORT", "8080"), ("APPSCOUT_HOST", "127.0.0.1")]).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn test_empty_port_uses_default() {
        let config = load(&[("PORT", "")]).unwrap();
        assert_eq!(config.listen_addr.port(), 3000);
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[("PORT", "http")]).is_err());
        assert!(load(&[("PORT", "70000")]).is_err());
        assert!(load(&[("APPSCOUT_HOST", "not a host")]).is_err());
        assert!(load(&[("APPSCOUT_CATALOG_URL", "ftp://example.com")]).is_err());
    }
}
