//! Shared (multi-signature) wallet API (`/shared-wallets`).

use std::sync::Arc;

use super::WalletFamily;
use super::addresses::Addresses;
use super::http::Transport;
use super::keys::Keys;
use super::transactions::Transactions;

mod wallets;

pub use wallets::Wallets;

const FAMILY: WalletFamily = WalletFamily::Shared;

#[derive(Debug, Clone)]
pub struct Shared {
    http: Arc<dyn Transport>,
}

impl Shared {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        Self { http }
    }

    #[must_use]
    pub fn wallets(&self) -> Wallets {
        Wallets::new(Arc::clone(&self.http))
    }

    #[must_use]
    pub fn keys(&self) -> Keys {
        Keys::new(Arc::clone(&self.http), FAMILY)
    }

    #[must_use]
    pub fn addresses(&self) -> Addresses {
        Addresses::new(Arc::clone(&self.http), FAMILY)
    }

    #[must_use]
    pub fn transactions(&self) -> Transactions {
        Transactions::new(Arc::clone(&self.http), FAMILY)
    }
}
