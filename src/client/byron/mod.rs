//! Byron wallet API (`/byron-wallets`).
//!
//! ```ignore
//! let byron = cw.byron();
//! byron.wallets().create(&json!({ "style": "icarus", ... })).await?;
//! byron.addresses().bulk_import(wid, &["37btjrVyb4K..."]).await?;
//! ```

use std::sync::Arc;

use super::WalletFamily;
use super::assets::Assets;
use super::http::Transport;
use super::migrations::Migrations;
use super::wallets::Wallets;

mod addresses;
mod coin_selections;
mod transactions;

pub use addresses::Addresses;
pub use coin_selections::CoinSelections;
pub use transactions::Transactions;

const FAMILY: WalletFamily = WalletFamily::Byron;

#[derive(Debug, Clone)]
pub struct Byron {
    http: Arc<dyn Transport>,
}

impl Byron {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        Self { http }
    }

    #[must_use]
    pub fn wallets(&self) -> Wallets {
        Wallets::new(Arc::clone(&self.http), FAMILY)
    }

    #[must_use]
    pub fn addresses(&self) -> Addresses {
        Addresses::new(Arc::clone(&self.http))
    }

    #[must_use]
    pub fn coin_selections(&self) -> CoinSelections {
        CoinSelections::new(Arc::clone(&self.http))
    }

    #[must_use]
    pub fn transactions(&self) -> Transactions {
        Transactions::new(Arc::clone(&self.http))
    }

    #[must_use]
    pub fn migrations(&self) -> Migrations {
        Migrations::new(Arc::clone(&self.http), FAMILY)
    }

    #[must_use]
    pub fn assets(&self) -> Assets {
        Assets::new(Arc::clone(&self.http), FAMILY)
    }
}
