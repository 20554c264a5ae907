//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting client and transport setup
//! across tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::client::http::{ApiRequest, ApiResponse, Transport};
use crate::client::CardanoWallet;
use crate::config::Config;
use crate::domain::Result;

// ============================================================================
// Recording Transport
// ============================================================================

/// Transport that records every request and answers with a canned response.
#[derive(Debug)]
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    response: ApiResponse,
}

impl MockTransport {
    #[must_use]
    pub fn new(response: ApiResponse) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response,
        }
    }

    #[must_use]
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The single request a call produced.
    ///
    /// # Panics
    ///
    /// Panics unless exactly one request was recorded.
    #[must_use]
    pub fn only(&self) -> ApiRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected one request, got {requests:?}");
        requests[0].clone()
    }

    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.requests().is_empty()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        Ok(self.response.clone())
    }
}

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct ResponseMother;

impl ResponseMother {
    #[must_use]
    pub fn ok() -> ApiResponse {
        ApiResponse::new(200, b"{}".to_vec())
    }

    #[must_use]
    pub fn json(status: u16, body: &Value) -> ApiResponse {
        ApiResponse::new(status, body.to_string().into_bytes())
    }

    #[must_use]
    pub fn not_found() -> ApiResponse {
        ApiResponse::new(
            404,
            br#"{"code":"no_such_wallet","message":"I couldn't find a wallet with the given id"}"#
                .to_vec(),
        )
    }
}

pub struct ClientMother;

impl ClientMother {
    /// Client over a mock that answers `200 {}`.
    #[must_use]
    pub fn recording() -> (CardanoWallet, Arc<MockTransport>) {
        Self::answering(ResponseMother::ok())
    }

    #[must_use]
    pub fn answering(response: ApiResponse) -> (CardanoWallet, Arc<MockTransport>) {
        let mock = Arc::new(MockTransport::new(response));
        let client = CardanoWallet::with_transport(Config::default(), mock.clone());
        (client, mock)
    }
}

pub struct PaymentMother;

impl PaymentMother {
    pub const ADDR: &'static str = "addr_test1qqhdfcgtc3r5dm9v6sr4x8sk3lrvlvwp3r2p";

    /// Shorthand `[{address: amount}]` list.
    #[must_use]
    pub fn shorthand(amount: u64) -> Value {
        serde_json::json!([{ (Self::ADDR): amount }])
    }

    /// Full payment object with an asset.
    #[must_use]
    pub fn full() -> Value {
        serde_json::json!([{
            "address": Self::ADDR,
            "amount": { "quantity": 42_000_000, "unit": "lovelace" },
            "assets": [{ "policy_id": "pid", "asset_name": "name", "quantity": 0 }]
        }])
    }
}

pub const WID: &str = "2512a00e9653fe49a44a5886202e24d77eeb998f";
