pub mod log;
pub mod transport;

pub use log::RunLog;
pub use transport::{RunTransport, TransportResponse};
