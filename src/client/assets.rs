//! Native asset lookups.

use std::sync::Arc;

use super::WalletFamily;
use super::http::{ApiResponse, Transport};
use crate::domain::Result;

#[derive(Debug, Clone)]
pub struct Assets {
    http: Arc<dyn Transport>,
    family: WalletFamily,
}

impl Assets {
    pub(crate) fn new(http: Arc<dyn Transport>, family: WalletFamily) -> Self {
        Self { http, family }
    }

    /// Without a policy id: every asset the wallet ever held. With a policy
    /// id and no name: the asset with an empty name under that policy.
    pub async fn get(
        &self,
        wid: &str,
        policy_id: Option<&str>,
        asset_name: Option<&str>,
    ) -> Result<ApiResponse> {
        let mut path = format!("{}/assets", self.family.wallet(wid));
        if let Some(policy_id) = policy_id {
            path.push('/');
            path.push_str(policy_id);
        }
        if let Some(asset_name) = asset_name {
            path.push('/');
            path.push_str(asset_name);
        }
        self.http.get(&path).await
    }
}
