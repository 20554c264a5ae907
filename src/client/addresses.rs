//! Address listing, common to every wallet family.

use std::sync::Arc;

use serde_json::Value;

use super::WalletFamily;
use super::http::{ApiResponse, Transport};
use crate::domain::Result;
use crate::domain::query::query_suffix;

#[derive(Debug, Clone)]
pub struct Addresses {
    http: Arc<dyn Transport>,
    family: WalletFamily,
}

impl Addresses {
    pub(crate) fn new(http: Arc<dyn Transport>, family: WalletFamily) -> Self {
        Self { http, family }
    }

    /// List addresses, optionally filtered, e.g. `{"state": "used"}`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `query` is not an object.
    pub async fn list(&self, wid: &str, query: Option<&Value>) -> Result<ApiResponse> {
        let path = format!(
            "{}/addresses{}",
            self.family.wallet(wid),
            query_suffix(query)?
        );
        self.http.get(&path).await
    }
}
