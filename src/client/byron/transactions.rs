//! Byron transactions. Signing takes no output encoding and single
//! transaction lookups take no query.

use std::sync::Arc;

use serde_json::{Value, json};

use super::FAMILY;
use crate::client::http::{ApiResponse, RequestBody, Transport};
use crate::domain::query::query_suffix;
use crate::domain::transaction::{PaymentBody, SignBody};
use crate::domain::{ByronConstructTransaction, Result, normalize_payments};

#[derive(Debug, Clone)]
pub struct Transactions {
    http: Arc<dyn Transport>,
}

impl Transactions {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        Self { http }
    }

    fn path(wid: &str, endpoint: &str) -> String {
        format!("{}/{endpoint}", FAMILY.wallet(wid))
    }

    /// Build an unsigned transaction. Minting goes under `mint` here.
    pub async fn construct(
        &self,
        wid: &str,
        construct: &ByronConstructTransaction,
    ) -> Result<ApiResponse> {
        self.http
            .post(
                &Self::path(wid, "transactions-construct"),
                RequestBody::json(construct)?,
            )
            .await
    }

    pub async fn sign(&self, wid: &str, passphrase: &str, transaction: &str) -> Result<ApiResponse> {
        let body = SignBody {
            passphrase,
            transaction,
            encoding: None,
        };
        self.http
            .post(
                &Self::path(wid, "transactions-sign"),
                RequestBody::json(&body)?,
            )
            .await
    }

    pub async fn submit(&self, wid: &str, transaction: &str) -> Result<ApiResponse> {
        self.http
            .post(
                &Self::path(wid, "transactions-submit"),
                RequestBody::Json(json!({ "transaction": transaction })),
            )
            .await
    }

    pub async fn get(&self, wid: &str, tx_id: &str) -> Result<ApiResponse> {
        self.http
            .get(&Self::path(wid, &format!("transactions/{tx_id}")))
            .await
    }

    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `query` is not an object.
    pub async fn list(&self, wid: &str, query: Option<&Value>) -> Result<ApiResponse> {
        let path = format!("{}{}", Self::path(wid, "transactions"), query_suffix(query)?);
        self.http.get(&path).await
    }

    /// Create, sign and submit a payment.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `payments` is malformed.
    pub async fn create(
        &self,
        wid: &str,
        passphrase: &str,
        payments: &Value,
    ) -> Result<ApiResponse> {
        let mut body = PaymentBody::new(normalize_payments(payments)?);
        body.passphrase = Some(passphrase);
        self.http
            .post(&Self::path(wid, "transactions"), RequestBody::json(&body)?)
            .await
    }

    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `payments` is malformed.
    pub async fn payment_fees(&self, wid: &str, payments: &Value) -> Result<ApiResponse> {
        let body = PaymentBody::new(normalize_payments(payments)?);
        self.http
            .post(&Self::path(wid, "payment-fees"), RequestBody::json(&body)?)
            .await
    }

    pub async fn forget(&self, wid: &str, tx_id: &str) -> Result<ApiResponse> {
        self.http
            .delete(
                &Self::path(wid, &format!("transactions/{tx_id}")),
                RequestBody::Empty,
            )
            .await
    }
}
