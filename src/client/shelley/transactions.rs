//! Shelley transactions.

use std::sync::Arc;

use serde_json::Value;

use super::FAMILY;
use crate::client::http::{ApiResponse, RequestBody, Transport};
use crate::client::transactions;
use crate::domain::transaction::PaymentBody;
use crate::domain::{
    ConstructTransaction, Result, TransactionOptions, normalize_payments, verify_param_is_map,
};

#[derive(Debug, Clone)]
pub struct Transactions {
    http: Arc<dyn Transport>,
    workflow: transactions::Transactions,
}

impl Transactions {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        let workflow = transactions::Transactions::new(Arc::clone(&http), FAMILY);
        Self { http, workflow }
    }

    fn path(wid: &str, endpoint: &str) -> String {
        format!("{}/{endpoint}", FAMILY.wallet(wid))
    }

    /// Balance a partially built transaction; `payload` is forwarded as-is.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `payload` is not an object.
    pub async fn balance(&self, wid: &str, payload: &Value) -> Result<ApiResponse> {
        verify_param_is_map(payload)?;
        self.http
            .post(
                &Self::path(wid, "transactions-balance"),
                RequestBody::Json(payload.clone()),
            )
            .await
    }

    pub async fn decode(&self, wid: &str, transaction: &str) -> Result<ApiResponse> {
        self.workflow.decode(wid, transaction).await
    }

    pub async fn construct(
        &self,
        wid: &str,
        construct: &ConstructTransaction,
    ) -> Result<ApiResponse> {
        self.workflow.construct(wid, construct).await
    }

    pub async fn sign(
        &self,
        wid: &str,
        passphrase: &str,
        transaction: &str,
        encoding: Option<&str>,
    ) -> Result<ApiResponse> {
        self.workflow
            .sign(wid, passphrase, transaction, encoding)
            .await
    }

    pub async fn submit(&self, wid: &str, transaction: &str) -> Result<ApiResponse> {
        self.workflow.submit(wid, transaction).await
    }

    pub async fn get(&self, wid: &str, tx_id: &str, query: Option<&Value>) -> Result<ApiResponse> {
        self.workflow.get(wid, tx_id, query).await
    }

    pub async fn list(&self, wid: &str, query: Option<&Value>) -> Result<ApiResponse> {
        self.workflow.list(wid, query).await
    }

    /// Create, sign and submit a payment in one call.
    ///
    /// ```ignore
    /// let options = TransactionOptions::new()
    ///     .withdrawal("self")
    ///     .metadata(json!({ "1": "abc" }))
    ///     .time_to_live(10);
    /// transactions.create(wid, pass, &json!([{ "addr1...": 1_000_000 }]), &options).await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `payments` is malformed.
    pub async fn create(
        &self,
        wid: &str,
        passphrase: &str,
        payments: &Value,
        options: &TransactionOptions,
    ) -> Result<ApiResponse> {
        let mut body = PaymentBody::new(normalize_payments(payments)?).with_options(options);
        body.passphrase = Some(passphrase);

        self.http
            .post(&Self::path(wid, "transactions"), RequestBody::json(&body)?)
            .await
    }

    /// Estimate the fee of a payment.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `payments` is malformed.
    pub async fn payment_fees(
        &self,
        wid: &str,
        payments: &Value,
        options: &TransactionOptions,
    ) -> Result<ApiResponse> {
        let body = PaymentBody::new(normalize_payments(payments)?).with_options(options);

        self.http
            .post(&Self::path(wid, "payment-fees"), RequestBody::json(&body)?)
            .await
    }

    /// Forget a pending transaction.
    pub async fn forget(&self, wid: &str, tx_id: &str) -> Result<ApiResponse> {
        self.http
            .delete(
                &Self::path(wid, &format!("transactions/{tx_id}")),
                RequestBody::Empty,
            )
            .await
    }
}
