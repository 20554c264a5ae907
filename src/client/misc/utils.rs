//! Address inspection and other stateless helpers served by the backend.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::client::WalletFamily;
use crate::client::http::{APPLICATION_JSON, ApiRequest, ApiResponse, RequestBody, Transport};
use crate::domain::query::query_suffix;
use crate::domain::transaction::SignMetadataBody;
use crate::domain::{Result, verify_param_is_map};

#[derive(Debug, Clone)]
pub struct Utils {
    http: Arc<dyn Transport>,
}

impl Utils {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        Self { http }
    }

    /// Sign metadata with a Shelley wallet key, leaving the response type
    /// to the backend's default.
    pub async fn sign_metadata(
        &self,
        wid: &str,
        role: &str,
        index: &str,
        passphrase: &str,
        metadata: Option<&Value>,
    ) -> Result<ApiResponse> {
        let body = SignMetadataBody {
            passphrase,
            metadata,
        };
        self.http
            .post(
                &format!(
                    "{}/signatures/{role}/{index}",
                    WalletFamily::Shelley.wallet(wid)
                ),
                RequestBody::json(&body)?,
            )
            .await
    }

    pub async fn get_public_key(&self, wid: &str, role: &str, index: &str) -> Result<ApiResponse> {
        self.http
            .get(&format!(
                "{}/keys/{role}/{index}",
                WalletFamily::Shelley.wallet(wid)
            ))
            .await
    }

    /// Inspect an address.
    pub async fn addresses(&self, address_id: &str) -> Result<ApiResponse> {
        self.http.get(&format!("/addresses/{address_id}")).await
    }

    /// Construct an address from credentials, e.g.
    /// `{"payment": "addr_vk1...", "stake": "stake_vk1..."}`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `payload` is not an object.
    pub async fn post_address(&self, payload: &Value) -> Result<ApiResponse> {
        verify_param_is_map(payload)?;
        let request = ApiRequest::new(Method::POST, "/addresses")
            .with_body(RequestBody::Json(payload.clone()))
            .with_header("Accept", APPLICATION_JSON);
        self.http.execute(request).await
    }

    /// Health of the configured SMASH server, e.g. `{"url": "https://smash.io"}`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `query` is not an object.
    pub async fn smash_health(&self, query: Option<&Value>) -> Result<ApiResponse> {
        self.http
            .get(&format!("/smash/health{}", query_suffix(query)?))
            .await
    }
}
