use std::sync::Arc;

use crate::client::http::{ApiResponse, Transport};
use crate::domain::Result;

#[derive(Debug, Clone)]
pub struct Network {
    http: Arc<dyn Transport>,
}

impl Network {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        Self { http }
    }

    /// Sync progress and tip of the node the backend follows.
    pub async fn information(&self) -> Result<ApiResponse> {
        self.http.get("/network/information").await
    }

    /// NTP drift of the host.
    pub async fn clock(&self) -> Result<ApiResponse> {
        self.http.get("/network/clock").await
    }

    /// Protocol parameters currently in effect.
    pub async fn parameters(&self) -> Result<ApiResponse> {
        self.http.get("/network/parameters").await
    }
}
