//! Submission of transactions built outside the wallet.

use std::sync::Arc;

use crate::client::http::{ApiResponse, RequestBody, Transport};
use crate::domain::Result;

#[derive(Debug, Clone)]
pub struct Proxy {
    http: Arc<dyn Transport>,
}

impl Proxy {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        Self { http }
    }

    /// Submit a signed, CBOR-serialized transaction as raw bytes.
    pub async fn submit_external_transaction(&self, transaction: Vec<u8>) -> Result<ApiResponse> {
        self.http
            .post("/proxy/transactions", RequestBody::Binary(transaction))
            .await
    }
}
