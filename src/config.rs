//! Server configuration
//!
//! Layered with figment: built-in defaults, then an optional TOML file,
//! then `FOLIO_*` environment variables.

use std::net::SocketAddr;
use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::theme::DEFAULT_THEME_ID;

/// Default config file, read from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// None = in-memory
    pub db_path: Option<String>,
    /// Template used when a portfolio names none (or an unknown one)
    pub default_theme: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            db_path: None,
            default_theme: DEFAULT_THEME_ID.to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Figment with every layer applied
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("FOLIO_"))
    }

    /// Load configuration from `path` (missing files are skipped) and the environment
    pub fn load(path: &Path) -> Result<Self, figment::Error> {
        Self::figment(path).extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = Config::load(Path::new("/nonexistent/folio.toml")).unwrap();
        assert_eq!(config.default_theme, "minimal");
        assert_eq!(config.bind_addr.port(), 8080);
        assert!(config.db_path.is_none());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "bind_addr = \"0.0.0.0:9000\"\ndefault_theme = \"elegant\"\ndb_path = \"folio.db\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.default_theme, "elegant");
        assert_eq!(config.db_path.as_deref(), Some("folio.db"));
        assert!(!config.log_json);
    }

    #[test]
    fn test_invalid_value_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bind_addr = \"not an address\"").unwrap();
        assert!(Config::load(file.path()).is_err());
    }
}
