use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::notification::Notification;
use crate::ports::{MailTransport, NotificationDispatcher};

/// Delivers each notification before returning.
///
/// A transport call that outlives `timeout` is abandoned and reported as
/// `NotificationFailed`.
pub struct DirectDispatcher {
    transport: Arc<dyn MailTransport>,
    timeout: Duration,
}

impl DirectDispatcher {
    pub fn new(transport: Arc<dyn MailTransport>, timeout: Duration) -> Self {
        Self { transport, timeout }
    }
}

/// Sends one notification under `timeout`.
pub(super) async fn deliver(
    transport: &dyn MailTransport,
    notification: &Notification,
    timeout: Duration,
) -> Result<(), DomainError> {
    let send = transport.send(
        &notification.subject,
        &notification.body,
        &notification.recipient_email,
    );

    match tokio::time::timeout(timeout, send).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(err)) if err.code == ErrorCode::NotificationFailed => Err(err),
        Ok(Err(err)) => Err(DomainError::new(ErrorCode::NotificationFailed, err.message)),
        Err(_) => Err(DomainError::new(
            ErrorCode::NotificationFailed,
            format!("Mail delivery timed out after {:?}", timeout),
        )),
    }
}

#[async_trait]
impl NotificationDispatcher for DirectDispatcher {
    async fn dispatch(&self, notification: Notification) -> Result<(), DomainError> {
        deliver(self.transport.as_ref(), &notification, self.timeout).await?;
        tracing::info!(
            kind = %notification.kind,
            session_id = %notification.session_id,
            recipient = %notification.recipient_id,
            "Notification delivered"
        );
        Ok(())
    }
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use crate::adapters::mail::InMemoryMailTransport;
    use crate::domain::foundation::{SessionId, UserId};
    use crate::domain::notification::NotificationKind;

    pub(crate) fn notification(recipient: &str) -> Notification {
        Notification {
            kind: NotificationKind::Confirmation,
            session_id: SessionId::new(),
            recipient_id: UserId::new("dev-1").unwrap(),
            recipient_email: recipient.to_string(),
            subject: "You're in".to_string(),
            body: "See you there".to_string(),
        }
    }

    /// Transport that never completes in time.
    struct SlowTransport;

    #[async_trait]
    impl MailTransport for SlowTransport {
        async fn send(&self, _: &str, _: &str, _: &str) -> Result<(), DomainError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn delivers_through_transport() {
        let transport = Arc::new(InMemoryMailTransport::new());
        let dispatcher = DirectDispatcher::new(transport.clone(), Duration::from_secs(1));

        dispatcher.dispatch(notification("dev@example.com")).await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].recipient, "dev@example.com");
        assert_eq!(sent[0].subject, "You're in");
    }

    #[tokio::test]
    async fn transport_failure_is_delivery_failure() {
        let transport = Arc::new(InMemoryMailTransport::failing());
        let dispatcher = DirectDispatcher::new(transport, Duration::from_secs(1));

        let err = dispatcher
            .dispatch(notification("dev@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotificationFailed);
    }

    #[tokio::test]
    async fn slow_transport_times_out() {
        let dispatcher = DirectDispatcher::new(Arc::new(SlowTransport), Duration::from_millis(50));

        let err = dispatcher
            .dispatch(notification("dev@example.com"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotificationFailed);
        assert!(err.message.contains("timed out"));
    }
}
