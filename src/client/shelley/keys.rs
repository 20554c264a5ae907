//! Shelley keys: public keys, metadata signatures and minting policies.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{Value, json};

use super::FAMILY;
use crate::client::http::{ApiRequest, ApiResponse, OCTET_STREAM, RequestBody, Transport};
use crate::client::keys;
use crate::domain::Result;
use crate::domain::query::query_suffix;
use crate::domain::transaction::SignMetadataBody;

#[derive(Debug, Clone)]
pub struct Keys {
    http: Arc<dyn Transport>,
    public: keys::Keys,
}

impl Keys {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        let public = keys::Keys::new(Arc::clone(&http), FAMILY);
        Self { http, public }
    }

    /// Sign metadata with a wallet key. The backend answers with the raw
    /// signature bytes, available through [`ApiResponse::body`].
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
        let request = ApiRequest::new(
            Method::POST,
            format!("{}/signatures/{role}/{index}", FAMILY.wallet(wid)),
        )
        .with_body(RequestBody::json(&body)?)
        .with_header("Accept", OCTET_STREAM);

        self.http.execute(request).await
    }

    pub async fn get_public_key(
        &self,
        wid: &str,
        role: &str,
        index: &str,
        query: Option<&Value>,
    ) -> Result<ApiResponse> {
        self.public.get_public_key(wid, role, index, query).await
    }

    pub async fn create_acc_public_key(
        &self,
        wid: &str,
        index: &str,
        payload: &Value,
    ) -> Result<ApiResponse> {
        self.public.create_acc_public_key(wid, index, payload).await
    }

    pub async fn get_acc_public_key(&self, wid: &str, query: Option<&Value>) -> Result<ApiResponse> {
        self.public.get_acc_public_key(wid, query).await
    }

    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `query` is not an object.
    pub async fn get_policy_key(&self, wid: &str, query: Option<&Value>) -> Result<ApiResponse> {
        self.http
            .get(&format!(
                "{}/policy-key{}",
                FAMILY.wallet(wid),
                query_suffix(query)?
            ))
            .await
    }

    /// Create the wallet's policy key, e.g. with `{"hash": true}`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `query` is not an object.
    pub async fn create_policy_key(
        &self,
        wid: &str,
        passphrase: &str,
        query: Option<&Value>,
    ) -> Result<ApiResponse> {
        let path = format!("{}/policy-key{}", FAMILY.wallet(wid), query_suffix(query)?);
        self.http
            .post(&path, RequestBody::Json(json!({ "passphrase": passphrase })))
            .await
    }

    /// Policy id for a script template such as `"cosigner#0"` or
    /// `{"all": ["cosigner#0", {"active_from": 120}]}`.
    pub async fn create_policy_id(&self, wid: &str, template: &Value) -> Result<ApiResponse> {
        let body = json!({ "policy_script_template": template });
        self.http
            .post(
                &format!("{}/policy-id", FAMILY.wallet(wid)),
                RequestBody::Json(body),
            )
            .await
    }
}
