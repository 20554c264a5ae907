//! Clients for the cardano-wallet REST API.
//!
//! [`CardanoWallet`] owns the configuration and a shared transport; every
//! namespace accessor hands out a cheap value that borrows nothing and
//! shares the same transport.
//!
//! # Example
//!
//! ```ignore
//! use cardano_wallet_client::{CardanoWallet, Config};
//! use serde_json::json;
//!
//! let cw = CardanoWallet::new(Config::default().with_port(8090))?;
//! let wallet = cw
//!     .byron()
//!     .wallets()
//!     .create(&json!({
//!         "style": "random",
//!         "name": "W",
//!         "passphrase": "Secure Passphrase",
//!         "mnemonic_sentence": cw.utils().mnemonic_sentence(12, "english")?,
//!     }))
//!     .await?;
//! println!("{} {:?}", wallet.status(), wallet.get("id"));
//! ```

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::domain::Result;
use crate::mnemonic::Utils;

pub mod addresses;
pub mod assets;
pub mod byron;
pub mod http;
pub mod keys;
pub mod migrations;
pub mod misc;
pub mod shared;
pub mod shelley;
pub mod transactions;
pub mod wallets;


// ============================================================================
// Re-exports
// ============================================================================

pub use http::{ApiRequest, ApiResponse, HttpTransport, RequestBody, Transport};

// ============================================================================
// Wallet Families
// ============================================================================

/// The three wallet kinds the backend serves, each under its own root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WalletFamily {
    #[default]
    Shelley,
    Byron,
    Shared,
}

impl WalletFamily {
    /// Collection path for this family.
    #[must_use]
    pub const fn root(&self) -> &'static str {
        match self {
            Self::Shelley => "/wallets",
            Self::Byron => "/byron-wallets",
            Self::Shared => "/shared-wallets",
        }
    }

    /// Path of one wallet, `{root}/{wid}`.
    #[must_use]
    pub fn wallet(&self, wid: &str) -> String {
        format!("{}/{wid}", self.root())
    }
}

// ============================================================================
// Client Factory
// ============================================================================

/// Entry point: configuration plus the transport every call goes through.
#[derive(Debug, Clone)]
pub struct CardanoWallet {
    config: Config,
    http: Arc<dyn Transport>,
}

impl CardanoWallet {
    /// Build a client with the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Fails if a configured certificate file cannot be read or parsed, or
    /// a default header is malformed. No client is returned in that case.
    pub fn new(config: Config) -> Result<Self> {
        let http = Arc::new(HttpTransport::new(&config)?);
        tracing::debug!(base_url = %config.base_url(), "cardano wallet client ready");
        Ok(Self { config, http })
    }

    /// Build a client from an untyped configuration record.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `value` is not a
    /// configuration object, then the same failures as [`CardanoWallet::new`].
    pub fn from_value(value: Value) -> Result<Self> {
        Self::new(Config::from_value(value)?)
    }

    /// Build a client over a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: Config, http: Arc<dyn Transport>) -> Self {
        Self { config, http }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn base_url(&self) -> String {
        self.config.base_url()
    }

    #[must_use]
    pub fn shelley(&self) -> shelley::Shelley {
        shelley::Shelley::new(Arc::clone(&self.http))
    }

    #[must_use]
    pub fn byron(&self) -> byron::Byron {
        byron::Byron::new(Arc::clone(&self.http))
    }

    #[must_use]
    pub fn shared(&self) -> shared::Shared {
        shared::Shared::new(Arc::clone(&self.http))
    }

    #[must_use]
    pub fn misc(&self) -> misc::Misc {
        misc::Misc::new(Arc::clone(&self.http))
    }

    /// Local helpers (mnemonic generation); no request is made.
    #[must_use]
    pub fn utils(&self) -> Utils {
        Utils
    }
}
