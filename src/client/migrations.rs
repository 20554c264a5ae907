//! Moving all funds out of a wallet.

use std::sync::Arc;

use serde_json::json;

use super::WalletFamily;
use super::http::{ApiResponse, RequestBody, Transport};
use crate::domain::Result;

#[derive(Debug, Clone)]
pub struct Migrations {
    http: Arc<dyn Transport>,
    family: WalletFamily,
}

impl Migrations {
    pub(crate) fn new(http: Arc<dyn Transport>, family: WalletFamily) -> Self {
        Self { http, family }
    }

    /// Ask the backend how a migration to `addresses` would look.
    pub async fn plan<A: AsRef<str>>(&self, wid: &str, addresses: &[A]) -> Result<ApiResponse> {
        let body = json!({ "addresses": as_strs(addresses) });
        self.http
            .post(
                &format!("{}/migrations/plan", self.family.wallet(wid)),
                RequestBody::Json(body),
            )
            .await
    }

    /// Migrate all funds to `addresses`.
    pub async fn migrate<A: AsRef<str>>(
        &self,
        wid: &str,
        passphrase: &str,
        addresses: &[A],
    ) -> Result<ApiResponse> {
        let body = json!({
            "addresses": as_strs(addresses),
            "passphrase": passphrase,
        });
        self.http
            .post(
                &format!("{}/migrations", self.family.wallet(wid)),
                RequestBody::Json(body),
            )
            .await
    }

    /// Migrations submitted for this wallet.
    pub async fn list(&self, wid: &str) -> Result<ApiResponse> {
        self.http
            .get(&format!("{}/migrations", self.family.wallet(wid)))
            .await
    }
}

pub(crate) fn as_strs<A: AsRef<str>>(items: &[A]) -> Vec<&str> {
    items.iter().map(AsRef::as_ref).collect()
}
