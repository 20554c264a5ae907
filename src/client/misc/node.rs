use std::sync::Arc;

use crate::client::http::{ApiResponse, Transport};
use crate::domain::Result;

#[derive(Debug, Clone)]
pub struct Node {
    http: Arc<dyn Transport>,
}

impl Node {
    pub(crate) fn new(http: Arc<dyn Transport>) -> Self {
        Self { http }
    }

    /// Header of the latest block seen by the node.
    pub async fn block_header(&self) -> Result<ApiResponse> {
        self.http.get("/blocks/latest/header").await
    }
}
