//! Byron addresses: random wallets create and import their own.

use std::sync::Arc;

use serde_json::{Value, json};

use super::FAMILY;
use crate::client::addresses;
use crate::client::http::{ApiResponse, RequestBody, Transport};
use crate::client::migrations::as_strs;
use crate::domain::{Result, verify_param_is_map};

#[derive(Debug, Clone)]
pub struct Addresses {
    http: Arc<dyn Transport>,
    listing: addresses::Addresses,
}

impl Addresses {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        let listing = addresses::Addresses::new(Arc::clone(&http), FAMILY);
        Self { http, listing }
    }

    fn path(wid: &str) -> String {
        format!("{}/addresses", FAMILY.wallet(wid))
    }

    pub async fn list(&self, wid: &str, query: Option<&Value>) -> Result<ApiResponse> {
        self.listing.list(wid, query).await
    }

    /// Create a new address, e.g. `{"passphrase": "...", "address_index": 2147483648}`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `params` is not an object.
    pub async fn create(&self, wid: &str, params: &Value) -> Result<ApiResponse> {
        verify_param_is_map(params)?;
        self.http
            .post(&Self::path(wid), RequestBody::Json(params.clone()))
            .await
    }

    /// Import a single address. No body is sent.
    pub async fn import(&self, wid: &str, address: &str) -> Result<ApiResponse> {
        self.http
            .put(&format!("{}/{address}", Self::path(wid)), RequestBody::Empty)
            .await
    }

    pub async fn bulk_import<A: AsRef<str>>(
        &self,
        wid: &str,
        addresses: &[A],
    ) -> Result<ApiResponse> {
        let body = json!({ "addresses": as_strs(addresses) });
        self.http
            .put(&Self::path(wid), RequestBody::Json(body))
            .await
    }
}
