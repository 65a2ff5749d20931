use std::sync::Arc;

use crate::config::RunConfig;
use crate::domain::run::{RunDocument, ServiceResponse};
use crate::error::{AppError, AppResult};
use crate::infra::console::ConsoleLog;
use crate::infra::http::HttpTransport;
use crate::services::{RunLog, RunTransport};

const API_VERSION: &str = "v1";

/// Sends one test-case outcome per call to the Vansah result service.
///
/// Fire-and-forget: a failed delivery is logged and swallowed so that
/// reporting can never fail the test run it reports on. Holds no state
/// between calls.
pub struct Reporter {
    config: RunConfig,
    transport: Arc<dyn RunTransport>,
    log: Arc<dyn RunLog>,
}

impl Reporter {
    pub fn new(config: RunConfig, transport: Arc<dyn RunTransport>, log: Arc<dyn RunLog>) -> Self {
        Self {
            config,
            transport,
            log,
        }
    }

    /// Wires the HTTP transport and console sinks.
    pub fn with_defaults(config: RunConfig) -> Self {
        Self::new(config, Arc::new(HttpTransport::new()), Arc::new(ConsoleLog))
    }

    /// Reports one test-case outcome.
    ///
    /// `asset_identifier` is an issue key when it matches `PROJECT-NUMBER`,
    /// otherwise a folder identifier. `result_label` is passed through to
    /// the service verbatim (e.g. "PASSED", "FAILED"). Errors from the
    /// transport or the response are logged and never propagated.
    pub async fn send_result(&self, test_case_key: &str, asset_identifier: &str, result_label: &str) {
        if let Err(error) = self
            .try_send(test_case_key, asset_identifier, result_label)
            .await
        {
            self.log.error(&format!("{error}"));
        }
    }

    async fn try_send(
        &self,
        test_case_key: &str,
        asset_identifier: &str,
        result_label: &str,
    ) -> AppResult<()> {
        let document = RunDocument::new(test_case_key, asset_identifier, result_label, &self.config);
        let body = serde_json::to_string(&document)
            .map_err(|err| AppError::Response(format!("failed to serialize request: {err}")))?;

        let response = self
            .transport
            .post_run(&self.run_endpoint(), &self.config.token, body)
            .await?;

        self.log
            .info(&format!("Vansah Response status code: {}", response.status));

        let parsed: ServiceResponse = serde_json::from_str(&response.body)
            .map_err(|err| AppError::Response(format!("failed to parse response body: {err}")))?;
        self.log
            .info(&format!("Vansah Response Message: {}", parsed.message));

        Ok(())
    }

    fn run_endpoint(&self) -> String {
        format!(
            "{}/api/{}/run",
            self.config.base_url.trim_end_matches('/'),
            API_VERSION
        )
    }
}
