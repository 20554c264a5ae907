//! Wallet lifecycle endpoints shared by Shelley and Byron wallets.

use std::sync::Arc;

use serde_json::Value;

use super::WalletFamily;
use super::http::{ApiResponse, RequestBody, Transport};
use crate::domain::{Result, verify_param_is_map};

/// `/wallets` or `/byron-wallets`, depending on the family.
#[derive(Debug, Clone)]
pub struct Wallets {
    http: Arc<dyn Transport>,
    family: WalletFamily,
}

impl Wallets {
    pub(crate) fn new(http: Arc<dyn Transport>, family: WalletFamily) -> Self {
        Self { http, family }
    }

    #[must_use]
    pub const fn family(&self) -> WalletFamily {
        self.family
    }

    /// List all wallets of this family.
    pub async fn list(&self) -> Result<ApiResponse> {
        self.http.get(self.family.root()).await
    }

    pub async fn get(&self, wid: &str) -> Result<ApiResponse> {
        self.http.get(&self.family.wallet(wid)).await
    }

    /// Create (or restore) a wallet.
    ///
    /// `params` is forwarded as-is, e.g.
    /// `{"name": "W", "passphrase": "...", "mnemonic_sentence": [...]}`, or
    /// `{"name": "W", "account_public_key": "...", "address_pool_gap": 20}`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `params` is not an object.
    pub async fn create(&self, params: &Value) -> Result<ApiResponse> {
        verify_param_is_map(params)?;
        self.http
            .post(self.family.root(), RequestBody::Json(params.clone()))
            .await
    }

    pub async fn delete(&self, wid: &str) -> Result<ApiResponse> {
        self.http
            .delete(&self.family.wallet(wid), RequestBody::Empty)
            .await
    }

    /// Update wallet metadata, e.g. `{"name": "New wallet name"}`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `params` is not an object.
    pub async fn update_metadata(&self, wid: &str, params: &Value) -> Result<ApiResponse> {
        verify_param_is_map(params)?;
        self.http
            .put(&self.family.wallet(wid), RequestBody::Json(params.clone()))
            .await
    }

    /// UTxO distribution statistics.
    pub async fn utxo(&self, wid: &str) -> Result<ApiResponse> {
        self.http
            .get(&format!("{}/statistics/utxos", self.family.wallet(wid)))
            .await
    }

    /// Full UTxO snapshot.
    pub async fn utxo_snapshot(&self, wid: &str) -> Result<ApiResponse> {
        self.http
            .get(&format!("{}/utxo", self.family.wallet(wid)))
            .await
    }

    /// Change the spending passphrase,
    /// e.g. `{"old_passphrase": "...", "new_passphrase": "..."}`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `params` is not an object.
    pub async fn update_passphrase(&self, wid: &str, params: &Value) -> Result<ApiResponse> {
        verify_param_is_map(params)?;
        self.http
            .put(
                &format!("{}/passphrase", self.family.wallet(wid)),
                RequestBody::Json(params.clone()),
            )
            .await
    }
}
