//! Client adapter that reports test-case outcomes to the Vansah result
//! service, one authenticated POST per test case.
//!
//! ```no_run
//! use vansah_reporter::{Reporter, RunConfig};
//!
//! # async fn example() {
//! let config = RunConfig::new("https://vansah.example.com", "token")
//!     .with_sprint("Sprint 4")
//!     .with_environment("QA");
//! let reporter = Reporter::with_defaults(config);
//! reporter.send_result("TC-12", "ABC-123", "PASSED").await;
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod reporter;
pub mod services;

pub use config::RunConfig;
pub use domain::asset::AssetRef;
pub use error::{AppError, AppResult};
pub use reporter::Reporter;
pub use services::{RunLog, RunTransport, TransportResponse};
