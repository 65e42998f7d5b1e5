//! In-memory mail transport for tests.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::MailTransport;

/// One captured message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub subject: String,
    pub body: String,
    pub recipient: String,
}

/// Captures every message; can be switched into a failing mode.
#[derive(Debug, Default)]
pub struct InMemoryMailTransport {
    sent: Mutex<Vec<SentMail>>,
    failing: Mutex<bool>,
}

impl InMemoryMailTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose every send fails.
    pub fn failing() -> Self {
        let transport = Self::default();
        transport.set_failing(true);
        transport
    }

    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap_or_else(PoisonError::into_inner) = failing;
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn sent_to(&self, recipient: &str) -> Vec<SentMail> {
        self.sent()
            .into_iter()
            .filter(|m| m.recipient == recipient)
            .collect()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait]
impl MailTransport for InMemoryMailTransport {
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> Result<(), DomainError> {
        if *self.failing.lock().unwrap_or_else(PoisonError::into_inner) {
            return Err(DomainError::new(
                ErrorCode::NotificationFailed,
                format!("Simulated delivery failure to {}", recipient),
            ));
        }
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SentMail {
                subject: subject.to_string(),
                body: body.to_string(),
                recipient: recipient.to_string(),
            });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_sent_messages() {
        let transport = InMemoryMailTransport::new();
        transport.send("A", "first", "a@example.com").await.unwrap();
        transport.send("B", "second", "b@example.com").await.unwrap();

        assert_eq!(transport.sent_count(), 2);
        assert_eq!(transport.sent_to("b@example.com")[0].subject, "B");
    }

    #[tokio::test]
    async fn failing_mode_rejects_and_records_nothing() {
        let transport = InMemoryMailTransport::failing();

        let err = transport.send("A", "body", "a@example.com").await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NotificationFailed);
        assert_eq!(transport.sent_count(), 0);
    }

    #[tokio::test]
    async fn failing_mode_can_be_cleared() {
        let transport = InMemoryMailTransport::failing();
        transport.set_failing(false);
        assert!(transport.send("A", "body", "a@example.com").await.is_ok());
    }
}
