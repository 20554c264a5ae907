//! Shared wallet lifecycle and cosigner script templates.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::FAMILY;
use crate::client::http::{ApiResponse, RequestBody, Transport};
use crate::client::wallets;
use crate::domain::Result;

#[derive(Debug, Clone)]
pub struct Wallets {
    http: Arc<dyn Transport>,
    lifecycle: wallets::Wallets,
}

impl Wallets {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        let lifecycle = wallets::Wallets::new(Arc::clone(&http), FAMILY);
        Self { http, lifecycle }
    }

    pub async fn list(&self) -> Result<ApiResponse> {
        self.lifecycle.list().await
    }

    pub async fn get(&self, wid: &str) -> Result<ApiResponse> {
        self.lifecycle.get(wid).await
    }

    /// Create a shared wallet, e.g.
    ///
    /// ```ignore
    /// shared.wallets().create(&json!({
    ///     "name": "Shared",
    ///     "passphrase": "Secure Passphrase",
    ///     "mnemonic_sentence": mnemonics,
    ///     "account_index": "1852H",
    ///     "payment_script_template": {
    ///         "cosigners": { "cosigner#0": "self" },
    ///         "template": { "all": ["cosigner#0", "cosigner#1"] }
    ///     }
    /// })).await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `params` is not an object.
    pub async fn create(&self, params: &Value) -> Result<ApiResponse> {
        self.lifecycle.create(params).await
    }

    pub async fn delete(&self, wid: &str) -> Result<ApiResponse> {
        self.lifecycle.delete(wid).await
    }

    /// Add a cosigner's account key to the payment script template.
    pub async fn update_payment_script(
        &self,
        wid: &str,
        cosigner: &str,
        acc_pub_key: &str,
    ) -> Result<ApiResponse> {
        self.patch_template(wid, "payment-script-template", cosigner, acc_pub_key)
            .await
    }

    /// Add a cosigner's account key to the delegation script template.
    pub async fn update_delegation_script(
        &self,
        wid: &str,
        cosigner: &str,
        acc_pub_key: &str,
    ) -> Result<ApiResponse> {
        self.patch_template(wid, "delegation-script-template", cosigner, acc_pub_key)
            .await
    }

    pub async fn utxo(&self, wid: &str) -> Result<ApiResponse> {
        self.lifecycle.utxo(wid).await
    }

    pub async fn utxo_snapshot(&self, wid: &str) -> Result<ApiResponse> {
        self.lifecycle.utxo_snapshot(wid).await
    }

    async fn patch_template(
        &self,
        wid: &str,
        template: &str,
        cosigner: &str,
        acc_pub_key: &str,
    ) -> Result<ApiResponse> {
        let mut body = Map::new();
        body.insert(cosigner.to_owned(), Value::String(acc_pub_key.to_owned()));
        self.http
            .patch(
                &format!("{}/{template}", FAMILY.wallet(wid)),
                RequestBody::Json(Value::Object(body)),
            )
            .await
    }
}
