//! Mail transport adapters.
//!
//! - `LogMailTransport` - writes messages to the log (development)
//! - `ResendMailTransport` - Resend HTTP API
//! - `InMemoryMailTransport` - captures messages for tests

mod in_memory;
mod log_transport;
mod resend;

pub use in_memory::{InMemoryMailTransport, SentMail};
pub use log_transport::LogMailTransport;
pub use resend::ResendMailTransport;
