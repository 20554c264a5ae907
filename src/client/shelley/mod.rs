//! Shelley wallet API (`/wallets`, `/stake-pools`).
//!
//! ```ignore
//! let shelley = cw.shelley();
//! shelley.wallets().list().await?;
//! shelley.transactions().create(wid, pass, &payments, &TransactionOptions::new()).await?;
//! shelley.stake_pools().join(pool_id, wid, pass).await?;
//! ```

use std::sync::Arc;

use super::WalletFamily;
use super::addresses::Addresses;
use super::http::Transport;
use super::migrations::Migrations;
use super::wallets::Wallets;

mod assets;
mod coin_selections;
mod keys;
mod stake_pools;
mod transactions;

pub use assets::Assets;
pub use coin_selections::CoinSelections;
pub use keys::Keys;
pub use stake_pools::StakePools;
pub use transactions::Transactions;

const FAMILY: WalletFamily = WalletFamily::Shelley;

#[derive(Debug, Clone)]
pub struct Shelley {
    http: Arc<dyn Transport>,
}

impl Shelley {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        Self { http }
    }

    #[must_use]
    pub fn wallets(&self) -> Wallets {
        Wallets::new(Arc::clone(&self.http), FAMILY)
    }

    #[must_use]
    pub fn addresses(&self) -> Addresses {
        Addresses::new(Arc::clone(&self.http), FAMILY)
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
    pub fn stake_pools(&self) -> StakePools {
        StakePools::new(Arc::clone(&self.http))
    }

    #[must_use]
    pub fn migrations(&self) -> Migrations {
        Migrations::new(Arc::clone(&self.http), FAMILY)
    }

    #[must_use]
    pub fn keys(&self) -> Keys {
        Keys::new(Arc::clone(&self.http))
    }

    #[must_use]
    pub fn assets(&self) -> Assets {
        Assets::new(Arc::clone(&self.http))
    }
}
