//! Construct / sign / submit workflow and transaction history, shared by
//! Shelley and shared wallets.

use std::sync::Arc;

use serde_json::{Value, json};

use super::WalletFamily;
use super::http::{ApiResponse, RequestBody, Transport};
use crate::domain::query::query_suffix;
use crate::domain::transaction::SignBody;
use crate::domain::{ConstructTransaction, Result};

#[derive(Debug, Clone)]
pub struct Transactions {
    http: Arc<dyn Transport>,
    family: WalletFamily,
}

impl Transactions {
    pub(crate) fn new(http: Arc<dyn Transport>, family: WalletFamily) -> Self {
        Self { http, family }
    }

    fn path(&self, wid: &str, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.family.wallet(wid))
    }

    /// Build an unsigned transaction. Unset fields are left out of the body.
    pub async fn construct(
        &self,
        wid: &str,
        construct: &ConstructTransaction,
    ) -> Result<ApiResponse> {
        self.http
            .post(
                &self.path(wid, "transactions-construct"),
                RequestBody::json(construct)?,
            )
            .await
    }

    /// Decode a CBOR transaction (base16 or base64).
    pub async fn decode(&self, wid: &str, transaction: &str) -> Result<ApiResponse> {
        let body = json!({ "transaction": transaction });
        self.http
            .post(
                &self.path(wid, "transactions-decode"),
                RequestBody::Json(body),
            )
            .await
    }

    /// Sign a constructed transaction with the wallet's keys.
    pub async fn sign(
        &self,
        wid: &str,
        passphrase: &str,
        transaction: &str,
        encoding: Option<&str>,
    ) -> Result<ApiResponse> {
        let body = SignBody {
            passphrase,
            transaction,
            encoding,
        };
        self.http
            .post(
                &self.path(wid, "transactions-sign"),
                RequestBody::json(&body)?,
            )
            .await
    }

    pub async fn submit(&self, wid: &str, transaction: &str) -> Result<ApiResponse> {
        let body = json!({ "transaction": transaction });
        self.http
            .post(
                &self.path(wid, "transactions-submit"),
                RequestBody::Json(body),
            )
            .await
    }

    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `query` is not an object.
    pub async fn get(&self, wid: &str, tx_id: &str, query: Option<&Value>) -> Result<ApiResponse> {
        let path = format!(
            "{}{}",
            self.path(wid, &format!("transactions/{tx_id}")),
            query_suffix(query)?
        );
        self.http.get(&path).await
    }

    /// List transactions, e.g. with `{"start": "2012-09-25T10:15:00Z",
    /// "order": "descending"}` or a [`TransactionQuery`](crate::TransactionQuery).
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `query` is not an object.
    pub async fn list(&self, wid: &str, query: Option<&Value>) -> Result<ApiResponse> {
        let path = format!(
            "{}{}",
            self.path(wid, "transactions"),
            query_suffix(query)?
        );
        self.http.get(&path).await
    }
}
