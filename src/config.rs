//! Server configuration
//!
//! Settings are layered: built-in defaults, then an optional YAML file, then
//! environment variables (a `.env` file is honoured), then CLI flags.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Secret used when `JWT_SECRET` is not set. Development only.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// Environment variable holding the signing secret
pub const ENV_JWT_SECRET: &str = "JWT_SECRET";

/// Environment variable overriding the bind host
pub const ENV_HOST: &str = "MOCK_API_HOST";

/// Environment variable overriding the bind port
pub const ENV_PORT: &str = "MOCK_API_PORT";

// ============================================================================
// Server Config
// ============================================================================

/// Runtime configuration for the HTTP service and the key tooling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Shared HS256 signing secret
    pub jwt_secret: String,

    /// Lifetime of keys minted by `generate-key`, in days
    pub default_ttl_days: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            default_ttl_days: default_ttl_days(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_ttl_days() -> i64 {
    30
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ServerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration from an optional file plus the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(problem) = dotenv_problem(dotenvy::dotenv()) {
            tracing::warn!("Ignoring .env file: {problem}");
        }

        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = base.with_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using the given lookup
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup(ENV_JWT_SECRET) {
            self.jwt_secret = secret;
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|e| Error::invalid_config(ENV_PORT, format!("'{port}': {e}")))?;
        }
        Ok(self)
    }

    /// Override the bind host
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Override the bind port
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Override the signing secret
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = secret.into();
        self
    }

    /// Check invariants that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.jwt_secret.is_empty() {
            return Err(Error::invalid_config("jwt_secret", "must not be empty"));
        }
        if self.host.trim().is_empty() {
            return Err(Error::invalid_config("host", "must not be empty"));
        }
        if self.default_ttl_days <= 0 {
            return Err(Error::invalid_config(
                "default_ttl_days",
                format!("must be positive, got {}", self.default_ttl_days),
            ));
        }
        Ok(())
    }

    /// Whether the development secret is in use
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

/// A `.env` loading failure worth reporting. A missing file is not one.
fn dotenv_problem(result: dotenvy::Result<PathBuf>) -> Option<dotenvy::Error> {
    match result {
        Err(e) if !e.not_found() => Some(e),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.default_ttl_days, 30);
        assert!(config.uses_default_secret());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_partial_override() {
        let yaml = r#"
port: 9100
jwt_secret: from-file
"#;
        let config = ServerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.jwt_secret, "from-file");
        assert_eq!(config.host, "0.0.0.0");
        assert!(!config.uses_default_secret());
    }

    #[test]
    fn test_yaml_rejects_empty_secret() {
        let err = ServerConfig::from_yaml_str("jwt_secret: \"\"\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_yaml_rejects_bad_types() {
        let err = ServerConfig::from_yaml_str("port: not-a-number\n").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host: 127.0.0.1\nport: 8181\ndefault_ttl_days: 7").unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8181);
        assert_eq!(config.default_ttl_days, 7);
    }

    #[test]
    fn test_from_missing_file() {
        let err = ServerConfig::from_file("/nonexistent/mock-api.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::default()
            .with_env(env(&[
                (ENV_JWT_SECRET, "env-secret"),
                (ENV_HOST, "127.0.0.1"),
                (ENV_PORT, "9000"),
            ]))
            .unwrap();
        assert_eq!(config.jwt_secret, "env-secret");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_env_bad_port() {
        let err = ServerConfig::default()
            .with_env(env(&[(ENV_PORT, "eighty")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == ENV_PORT));
    }

    #[test]
    fn test_missing_dotenv_is_quiet() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "no .env");
        assert!(dotenv_problem(Err(dotenvy::Error::Io(missing))).is_none());
        assert!(dotenv_problem(Ok(PathBuf::from(".env"))).is_none());
    }

    #[test]
    fn test_malformed_dotenv_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "JWT_SECRET='unterminated").unwrap();

        let result = dotenvy::from_path(file.path()).map(|()| file.path().to_path_buf());
        let problem = dotenv_problem(result).unwrap();
        assert!(matches!(problem, dotenvy::Error::LineParse(..)));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ServerConfig::default()
            .with_host("127.0.0.1")
            .with_port(0)
            .with_secret("s");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 0);
        assert_eq!(config.jwt_secret, "s");
        assert!(config.validate().is_ok());
    }
}
