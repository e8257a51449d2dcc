//! Configuration management for usergraph services.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (USERGRAPH_ prefix, `__` separator)
//! 2. Config file (usergraph.toml)
//! 3. Defaults

use std::path::Path;

use serde::Deserialize;

use crate::error::UsergraphError;

/// Default config file prefix, resolved as `usergraph.toml`.
pub const DEFAULT_CONFIG_PREFIX: &str = "usergraph";

/// Prefix for environment overrides, e.g. `USERGRAPH__NEO4J__URI`.
pub const ENV_PREFIX: &str = "USERGRAPH";

/// All settings shared by the server and the console.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub neo4j: Neo4jSettings,

    #[serde(default)]
    pub console: ConsoleSettings,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Socket address the HTTP API listens on.
    #[serde(default = "default_bind")]
    pub bind: String,
}

/// `[neo4j]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct Neo4jSettings {
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Upper bound for the driver's internal pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

/// `[console]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleSettings {
    /// Base URL of the HTTP API the menu talks to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Settings {
    /// Load settings from `<file_prefix>.toml` (optional) and `USERGRAPH__*`
    /// environment variables.
    pub fn load(file_prefix: &str) -> Result<Self, UsergraphError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(env_source())
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        tracing::debug!(file_prefix, bind = %settings.server.bind, "Settings loaded");
        Ok(settings)
    }

    /// Load settings from an explicit file path, which must exist.
    pub fn load_file(path: &Path) -> Result<Self, UsergraphError> {
        let cfg = config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .add_source(env_source())
            .build()?;

        Ok(cfg.try_deserialize()?)
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "neo4j".to_string()
}

fn default_max_connections() -> u32 {
    16
}

fn default_fetch_size() -> usize {
    256
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.bind, "127.0.0.1:3000");
        assert_eq!(settings.neo4j.uri, "bolt://localhost:7687");
        assert_eq!(settings.neo4j.max_connections, 16);
        assert_eq!(settings.neo4j.fetch_size, 256);
        assert_eq!(settings.console.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("absent");
        let settings = Settings::load(prefix.to_str().unwrap()).unwrap();
        assert_eq!(settings.neo4j.user, "neo4j");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
bind = "0.0.0.0:8080"

[neo4j]
uri = "bolt://graph.internal:7687"
password = "s3cret"
"#
        )
        .unwrap();

        let settings = Settings::load_file(file.path()).unwrap();
        assert_eq!(settings.server.bind, "0.0.0.0:8080");
        assert_eq!(settings.neo4j.uri, "bolt://graph.internal:7687");
        assert_eq!(settings.neo4j.password, "s3cret");
        assert_eq!(settings.neo4j.user, "neo4j");
        assert_eq!(settings.console.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, UsergraphError::Config(_)));
    }
}
