//! Notification dispatcher port.
//!
//! Decouples lifecycle handlers from delivery. A dispatcher may deliver
//! inline or hand the message to a background worker; either way it runs
//! after the triggering state change is stored.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::notification::Notification;

#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Deliver or enqueue a notification.
    ///
    /// # Errors
    ///
    /// - `NotificationFailed` on delivery failure, timeout or a full queue
    async fn dispatch(&self, notification: Notification) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_dispatcher_is_object_safe() {
        fn _accepts_dyn(_dispatcher: &dyn NotificationDispatcher) {}
    }
}
