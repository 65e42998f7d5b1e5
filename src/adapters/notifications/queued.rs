//! Background notification delivery.
//!
//! `dispatch` only enqueues; a single worker task drains the channel and
//! delivers each message under the transport timeout. Delivery failures are
//! logged by the worker and never reach the caller.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;

use super::direct::deliver;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::notification::Notification;
use crate::ports::{MailTransport, NotificationDispatcher};

/// Queue-backed dispatcher.
pub struct QueuedDispatcher {
    sender: mpsc::Sender<Notification>,
    worker: JoinHandle<()>,
}

impl QueuedDispatcher {
    /// Starts the worker on the current tokio runtime.
    pub fn spawn(transport: Arc<dyn MailTransport>, capacity: usize, timeout: Duration) -> Self {
        let (sender, mut receiver) = mpsc::channel::<Notification>(capacity.max(1));

        let worker = tokio::spawn(async move {
            while let Some(notification) = receiver.recv().await {
                match deliver(transport.as_ref(), &notification, timeout).await {
                    Ok(()) => tracing::info!(
                        kind = %notification.kind,
                        session_id = %notification.session_id,
                        recipient = %notification.recipient_id,
                        "Notification delivered"
                    ),
                    Err(e) => tracing::warn!(
                        kind = %notification.kind,
                        session_id = %notification.session_id,
                        recipient = %notification.recipient_id,
                        error = %e,
                        "Notification delivery failed"
                    ),
                }
            }
            tracing::debug!("Notification worker stopped");
        });

        Self { sender, worker }
    }

    /// Closes the queue and waits until everything already enqueued is handled.
    pub async fn shutdown(self) {
        drop(self.sender);
        if let Err(e) = self.worker.await {
            tracing::error!(error = %e, "Notification worker panicked");
        }
    }
}

#[async_trait]
impl NotificationDispatcher for QueuedDispatcher {
    async fn dispatch(&self, notification: Notification) -> Result<(), DomainError> {
        self.sender.try_send(notification).map_err(|e| {
            let reason = match e {
                TrySendError::Full(_) => "Notification queue is full",
                TrySendError::Closed(_) => "Notification queue is closed",
            };
            DomainError::new(ErrorCode::NotificationFailed, reason)
        })
    }
}
