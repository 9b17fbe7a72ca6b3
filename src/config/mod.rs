// Client configuration
//
// One immutable structure with named fields and documented defaults,
// constructed once and passed to the client. There is no late options
// merging: a YAML overrides file may fill fields at construction time,
// after which the configuration never changes.

mod overrides;

pub use overrides::ConfigOverrides;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Header identifying the client library stack to the service.
pub const API_CLIENT_HEADER: &str = "x-goog-api-client";

/// Default DNS address of the service.
pub const DEFAULT_ENDPOINT: &str = "cloudasset.googleapis.com";

/// Default TLS port.
pub const DEFAULT_PORT: u16 = 443;

/// OAuth scope required by every method of the service.
pub const DEFAULT_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// DNS address of the API remote host.
    pub endpoint: String,
    /// Port on which to connect to the remote host.
    pub port: u16,
    /// OAuth scopes requested for every call.
    pub scopes: Vec<String>,
    /// Optional wrapping-library name, appended to the client header.
    pub lib_name: Option<String>,
    /// Optional wrapping-library version, appended to the client header.
    pub lib_version: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            port: DEFAULT_PORT,
            scopes: vec![DEFAULT_SCOPE.to_string()],
            lib_name: None,
            lib_version: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_lib_info(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.lib_name = Some(name.into());
        self.lib_version = Some(version.into());
        self
    }

    /// Load overrides from a YAML file on top of the defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let overrides: ConfigOverrides = serde_yaml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded client config overrides");
        Ok(Self::default().apply(overrides))
    }

    fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(endpoint) = overrides.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(scopes) = overrides.scopes {
            self.scopes = scopes;
        }
        if let Some(lib_name) = overrides.lib_name {
            self.lib_name = Some(lib_name);
        }
        if let Some(lib_version) = overrides.lib_version {
            self.lib_version = Some(lib_version);
        }
        self
    }

    /// `host:port` form of the remote address.
    pub fn authority(&self) -> String {
        format!("{}:{}", self.endpoint, self.port)
    }

    /// Value for the [`API_CLIENT_HEADER`] header: space-separated
    /// `token/version` pairs identifying the client stack.
    pub fn api_client_header(&self) -> String {
        let mut tokens = vec![
            "gl-rust/1".to_string(),
            format!("gapic/{}", env!("CARGO_PKG_VERSION")),
        ];
        if let (Some(name), Some(version)) = (&self.lib_name, &self.lib_version) {
            tokens.push(format!("{}/{}", name, version));
        }
        tokens.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, "cloudasset.googleapis.com");
        assert_eq!(config.port, 443);
        assert_eq!(config.scopes, vec![DEFAULT_SCOPE.to_string()]);
        assert_eq!(config.authority(), "cloudasset.googleapis.com:443");
    }

    #[test]
    fn test_api_client_header_without_lib_info() {
        let header = ClientConfig::default().api_client_header();
        assert!(header.starts_with("gl-rust/1 gapic/"));
        assert!(!header.contains("  "));
    }

    #[test]
    fn test_api_client_header_with_lib_info() {
        let header = ClientConfig::default()
            .with_lib_info("inventory-tool", "2.3.1")
            .api_client_header();
        assert!(header.ends_with(" inventory-tool/2.3.1"));
    }

    #[test]
    fn test_apply_overrides_keeps_unset_defaults() {
        let config = ClientConfig::default().apply(ConfigOverrides {
            endpoint: Some("asset.example.test".to_string()),
            ..Default::default()
        });
        assert_eq!(config.endpoint, "asset.example.test");
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
