//! Shelley assets: lookups plus minting/burning.

use std::sync::Arc;

use serde_json::Value;

use super::FAMILY;
use crate::client::assets;
use crate::client::http::{ApiResponse, RequestBody, Transport};
use crate::domain::{Result, verify_param_is_map};

#[derive(Debug, Clone)]
pub struct Assets {
    http: Arc<dyn Transport>,
    lookups: assets::Assets,
}

impl Assets {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        let lookups = assets::Assets::new(Arc::clone(&http), FAMILY);
        Self { http, lookups }
    }

    /// See [`assets::Assets::get`].
    pub async fn get(
        &self,
        wid: &str,
        policy_id: Option<&str>,
        asset_name: Option<&str>,
    ) -> Result<ApiResponse> {
        self.lookups.get(wid, policy_id, asset_name).await
    }

    /// Mint or burn assets; `payload` follows the backend's mint schema.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `payload` is not an object.
    pub async fn mint(&self, wid: &str, payload: &Value) -> Result<ApiResponse> {
        verify_param_is_map(payload)?;
        self.http
            .post(
                &format!("{}/assets", FAMILY.wallet(wid)),
                RequestBody::Json(payload.clone()),
            )
            .await
    }
}
