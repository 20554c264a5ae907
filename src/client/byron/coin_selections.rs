use std::sync::Arc;

use serde_json::Value;

use super::FAMILY;
use crate::client::http::{ApiResponse, RequestBody, Transport};
use crate::domain::transaction::PaymentBody;
use crate::domain::{Result, normalize_payments};

#[derive(Debug, Clone)]
pub struct CoinSelections {
    http: Arc<dyn Transport>,
}

impl CoinSelections {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        Self { http }
    }

    /// Random coin selection; Byron wallets take no withdrawal or metadata.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `payments` is malformed.
    pub async fn random(&self, wid: &str, payments: &Value) -> Result<ApiResponse> {
        let body = PaymentBody::new(normalize_payments(payments)?);
        self.http
            .post(
                &format!("{}/coin-selections/random", FAMILY.wallet(wid)),
                RequestBody::json(&body)?,
            )
            .await
    }
}
