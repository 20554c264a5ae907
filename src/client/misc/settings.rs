use std::sync::Arc;

use serde_json::{Value, json};

use crate::client::http::{ApiResponse, RequestBody, Transport};
use crate::domain::{Result, verify_param_is_map};

#[derive(Debug, Clone)]
pub struct Settings {
    http: Arc<dyn Transport>,
}

impl Settings {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        Self { http }
    }

    pub async fn get(&self) -> Result<ApiResponse> {
        self.http.get("/settings").await
    }

    /// Update backend settings, e.g. `{"pool_metadata_source": "direct"}`.
    /// The mapping is wrapped as `{"settings": params}`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` if `params` is not an object.
    pub async fn update(&self, params: &Value) -> Result<ApiResponse> {
        verify_param_is_map(params)?;
        self.http
            .put("/settings", RequestBody::Json(json!({ "settings": params })))
            .await
    }
}
