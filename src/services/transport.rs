use async_trait::async_trait;

use crate::error::AppResult;

/// Status and body of a completed POST. The status is carried for logging
/// only; the reporter never branches on it.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait RunTransport: Send + Sync {
    async fn post_run(
        &self,
        url: &str,
        authorization: &str,
        body: String,
    ) -> AppResult<TransportResponse>;
}
