use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::ports::MailTransport;

/// Mail transport that logs instead of sending.
#[derive(Debug, Clone, Default)]
pub struct LogMailTransport;

impl LogMailTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MailTransport for LogMailTransport {
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> Result<(), DomainError> {
        tracing::info!(
            target: "pair_connect::mail",
            recipient = %recipient,
            subject = %subject,
            body_len = body.len(),
            "Mail delivery skipped (log transport)"
        );
        tracing::debug!(target: "pair_connect::mail", %body);
        Ok(())
    }
}
