//! Client configuration.
//!
//! A [`Config`] is captured once when a [`CardanoWallet`](crate::CardanoWallet)
//! is built and never changes afterwards. Unset fields fall back to a local
//! wallet backend on `http://localhost:8090/v2`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{EXPECTED_CONFIG, Result, WalletError};

// ============================================================================
// Constants
// ============================================================================

pub const DEFAULT_PROTOCOL: &str = "http";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8090;

/// Path prefix of the versioned API.
pub const API_VERSION_PATH: &str = "/v2";

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(deserialize_with = "protocol_or_default")]
    pub protocol: String,
    #[serde(deserialize_with = "host_or_default")]
    pub host: String,
    #[serde(deserialize_with = "port_or_default")]
    pub port: u16,
    /// Full base URL. When set, `protocol`, `host` and `port` are ignored.
    pub url: Option<String>,
    /// PEM bundle installed as the only trust root.
    #[serde(alias = "cacert")]
    pub ca_cert: Option<PathBuf>,
    /// PEM file holding the client certificate and private key (mutual TLS).
    #[serde(alias = "pem")]
    pub client_cert: Option<PathBuf>,
    /// Request timeout in seconds. `None` waits forever.
    pub timeout: Option<u64>,
    /// Headers added to every request.
    #[serde(deserialize_with = "null_as_default")]
    pub headers: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            url: None,
            ca_cert: None,
            client_cert: None,
            timeout: None,
            headers: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Build a configuration from an untyped record.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `value` is not an object or
    /// one of its fields has the wrong type.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(WalletError::invalid_argument(EXPECTED_CONFIG));
        }
        serde_json::from_value(value)
            .map_err(|e| WalletError::invalid_argument(format!("{EXPECTED_CONFIG}: {e}")))
    }

    /// Load a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::Io` if the file cannot be read, or
    /// `WalletError::InvalidArgument` if it does not hold a configuration
    /// object.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| WalletError::io(path, e))?;
        let value: Value = serde_json::from_str(&raw)?;
        Self::from_value(value)
    }

    /// The base URL every request path is appended to.
    #[must_use]
    pub fn base_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "{}://{}:{}{}",
                self.protocol, self.host, self.port, API_VERSION_PATH
            ),
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// CA path, ignoring an empty string.
    #[must_use]
    pub fn ca_cert_path(&self) -> Option<&Path> {
        non_empty(self.ca_cert.as_deref())
    }

    /// Client certificate path, ignoring an empty string.
    #[must_use]
    pub fn client_cert_path(&self) -> Option<&Path> {
        non_empty(self.client_cert.as_deref())
    }

    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_cert = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_client_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.client_cert = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

// An explicit `null` counts as unset.

fn protocol_or_default<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    Ok(Option::deserialize(d)?.unwrap_or_else(|| DEFAULT_PROTOCOL.to_string()))
}

fn host_or_default<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<String, D::Error> {
    Ok(Option::deserialize(d)?.unwrap_or_else(|| DEFAULT_HOST.to_string()))
}

fn port_or_default<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<u16, D::Error> {
    Ok(Option::deserialize(d)?.unwrap_or(DEFAULT_PORT))
}

fn null_as_default<'de, D, T>(d: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::deserialize(d)?.unwrap_or_default())
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

// ============================================================================
// Tests
// ============================================================================
