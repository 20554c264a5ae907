//! Stake pool listing and delegation.

use std::sync::Arc;

use serde_json::{Value, json};

use super::FAMILY;
use crate::client::http::{ApiResponse, RequestBody, Transport};
use crate::domain::query::query_suffix;
use crate::domain::{Result, verify_param_is_map};

const STAKE_POOLS: &str = "/stake-pools";

#[derive(Debug, Clone)]
pub struct StakePools {
    http: Arc<dyn Transport>,
}

impl StakePools {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        Self { http }
    }

    /// Trigger a maintenance action, e.g.
    /// `{"maintenance_action": "gc_stake_pools"}`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `action` is not an object.
    pub async fn trigger_maintenance_actions(&self, action: &Value) -> Result<ApiResponse> {
        verify_param_is_map(action)?;
        self.http
            .post(
                &format!("{STAKE_POOLS}/maintenance-actions"),
                RequestBody::Json(action.clone()),
            )
            .await
    }

    /// Status of the pool metadata garbage collection.
    pub async fn view_maintenance_actions(&self) -> Result<ApiResponse> {
        self.http
            .get(&format!("{STAKE_POOLS}/maintenance-actions"))
            .await
    }

    /// List pools, optionally ranked for a stake, e.g. `{"stake": 10000}`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `query` is not an object.
    pub async fn list(&self, query: Option<&Value>) -> Result<ApiResponse> {
        self.http
            .get(&format!("{STAKE_POOLS}{}", query_suffix(query)?))
            .await
    }

    pub async fn list_stake_keys(&self, wid: &str) -> Result<ApiResponse> {
        self.http
            .get(&format!("{}/stake-keys", FAMILY.wallet(wid)))
            .await
    }

    /// Delegate the wallet's stake to `sp_id`.
    pub async fn join(&self, sp_id: &str, wid: &str, passphrase: &str) -> Result<ApiResponse> {
        self.http
            .put(
                &format!("{STAKE_POOLS}/{sp_id}/wallets/{wid}"),
                RequestBody::Json(json!({ "passphrase": passphrase })),
            )
            .await
    }

    /// Stop delegating, whichever pool the wallet is in.
    pub async fn quit(&self, wid: &str, passphrase: &str) -> Result<ApiResponse> {
        self.http
            .delete(
                &format!("{STAKE_POOLS}/*/wallets/{wid}"),
                RequestBody::Json(json!({ "passphrase": passphrase })),
            )
            .await
    }

    pub async fn delegation_fees(&self, wid: &str) -> Result<ApiResponse> {
        self.http
            .get(&format!("{}/delegation-fees", FAMILY.wallet(wid)))
            .await
    }
}
