use std::env;

use crate::error::{AppError, AppResult};

/// Per-run configuration, fixed for the duration of a call.
///
/// The sprint, release, and environment names are attached to a run only
/// when they trim to a non-empty string. The token is sent verbatim as the
/// `Authorization` header value; an empty token is sent as-is and left for
/// the service to reject.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub base_url: String,
    pub sprint_name: String,
    pub release_name: String,
    pub environment_name: String,
    pub token: String,
}

impl RunConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            sprint_name: String::new(),
            release_name: String::new(),
            environment_name: String::new(),
            token: token.into(),
        }
    }

    pub fn with_sprint(mut self, name: impl Into<String>) -> Self {
        self.sprint_name = name.into();
        self
    }

    pub fn with_release(mut self, name: impl Into<String>) -> Self {
        self.release_name = name.into();
        self
    }

    pub fn with_environment(mut self, name: impl Into<String>) -> Self {
        self.environment_name = name.into();
        self
    }

    /// Reads the configuration from the process environment.
    ///
    /// `VANSAH_URL` is required; `VANSAH_SPRINT`, `VANSAH_RELEASE`, and
    /// `VANSAH_ENVIRONMENT` default to empty. A missing `VANSAH_TOKEN`
    /// yields an empty credential rather than an error.
    pub fn from_env() -> AppResult<Self> {
        let base_url = env::var("VANSAH_URL")
            .map_err(|_| AppError::Configuration("VANSAH_URL not set".to_string()))?;

        Ok(Self {
            base_url,
            sprint_name: env::var("VANSAH_SPRINT").unwrap_or_default(),
            release_name: env::var("VANSAH_RELEASE").unwrap_or_default(),
            environment_name: env::var("VANSAH_ENVIRONMENT").unwrap_or_default(),
            token: env::var("VANSAH_TOKEN").unwrap_or_default(),
        })
    }
}
