//! Public key lookups shared by Shelley and shared wallets.

use std::sync::Arc;

use serde_json::Value;

use super::WalletFamily;
use super::http::{ApiResponse, RequestBody, Transport};
use crate::domain::query::query_suffix;
use crate::domain::{Result, verify_param_is_map};

#[derive(Debug, Clone)]
pub struct Keys {
    http: Arc<dyn Transport>,
    family: WalletFamily,
}

impl Keys {
    pub(crate) fn new(http: Arc<dyn Transport>, family: WalletFamily) -> Self {
        Self { http, family }
    }

    /// Public key for a role (`utxo_external`, `utxo_internal`,
    /// `mutable_account`) and derivation index.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `query` is not an object.
    pub async fn get_public_key(
        &self,
        wid: &str,
        role: &str,
        index: &str,
        query: Option<&Value>,
    ) -> Result<ApiResponse> {
        let path = format!(
            "{}/keys/{role}/{index}{}",
            self.family.wallet(wid),
            query_suffix(query)?
        );
        self.http.get(&path).await
    }

    /// Derive an account public key, e.g.
    /// `{"passphrase": "...", "format": "extended", "purpose": "1852H"}`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `payload` is not an object.
    pub async fn create_acc_public_key(
        &self,
        wid: &str,
        index: &str,
        payload: &Value,
    ) -> Result<ApiResponse> {
        verify_param_is_map(payload)?;
        self.http
            .post(
                &format!("{}/keys/{index}", self.family.wallet(wid)),
                RequestBody::Json(payload.clone()),
            )
            .await
    }

    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `query` is not an object.
    pub async fn get_acc_public_key(&self, wid: &str, query: Option<&Value>) -> Result<ApiResponse> {
        let path = format!("{}/keys{}", self.family.wallet(wid), query_suffix(query)?);
        self.http.get(&path).await
    }
}
