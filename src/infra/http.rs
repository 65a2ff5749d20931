use async_trait::async_trait;
use reqwest::{
    Client,
    header::{AUTHORIZATION, CONTENT_TYPE},
};

use crate::error::{AppError, AppResult};
use crate::services::{RunTransport, TransportResponse};

/// `RunTransport` over a shared `reqwest::Client`. Connections and response
/// bodies are released when the response is dropped, on every exit path.
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RunTransport for HttpTransport {
    async fn post_run(
        &self,
        url: &str,
        authorization: &str,
        body: String,
    ) -> AppResult<TransportResponse> {
        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|err| AppError::Transport(format!("failed to call Vansah: {err}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| AppError::Transport(format!("failed to read response body: {err}")))?;

        Ok(TransportResponse { status, body })
    }
}
