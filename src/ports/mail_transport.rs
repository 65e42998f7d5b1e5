//! Mail transport port - the outbound delivery collaborator.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// Sends one plain-text message.
///
/// Failures carry `ErrorCode::NotificationFailed`.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> Result<(), DomainError>;
}
