//! Random coin selection, computed by the backend.

use std::sync::Arc;

use serde_json::{Value, json};

use super::FAMILY;
use crate::client::http::{ApiResponse, RequestBody, Transport};
use crate::domain::transaction::PaymentBody;
use crate::domain::{Result, normalize_payments, verify_param_is_map};

#[derive(Debug, Clone)]
pub struct CoinSelections {
    http: Arc<dyn Transport>,
}

impl CoinSelections {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        Self { http }
    }

    fn path(wid: &str) -> String {
        format!("{}/coin-selections/random", FAMILY.wallet(wid))
    }

    /// Coin selection for a set of payments.
    ///
    /// `payments` may be the shorthand `[{"addr1": 1000000}]` or full
    /// payment objects with assets.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `payments` is malformed.
    pub async fn random(
        &self,
        wid: &str,
        payments: &Value,
        withdrawal: Option<&Value>,
        metadata: Option<&Value>,
    ) -> Result<ApiResponse> {
        let mut body = PaymentBody::new(normalize_payments(payments)?);
        body.withdrawal = withdrawal;
        body.metadata = metadata;

        self.http
            .post(&Self::path(wid), RequestBody::json(&body)?)
            .await
    }

    /// Coin selection for a delegation action,
    /// e.g. `{"action": "join", "pool": "pool1..."}` or `{"action": "quit"}`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `action` is not an object.
    pub async fn random_deleg(&self, wid: &str, action: &Value) -> Result<ApiResponse> {
        verify_param_is_map(action)?;
        let body = json!({ "delegation_action": action });
        self.http
            .post(&Self::path(wid), RequestBody::Json(body))
            .await
    }
}
