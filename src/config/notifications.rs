//! Notification dispatch configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// How lifecycle notifications are delivered.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMode {
    /// Deliver inside the request, under the delivery timeout
    Direct,
    /// Hand off to a background worker through a bounded queue
    #[default]
    Queued,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default)]
    pub mode: NotificationMode,

    /// Bounded queue size for `queued` mode
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Per-message transport timeout in seconds
    #[serde(default = "default_delivery_timeout")]
    pub delivery_timeout_secs: u64,
}

impl NotificationsConfig {
    pub fn delivery_timeout(&self) -> Duration {
        Duration::from_secs(self.delivery_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.queue_capacity == 0 || self.queue_capacity > 100_000 {
            return Err(ValidationError::InvalidQueueCapacity);
        }
        if self.delivery_timeout_secs == 0 || self.delivery_timeout_secs > 120 {
            return Err(ValidationError::InvalidDeliveryTimeout);
        }
        Ok(())
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            mode: NotificationMode::default(),
            queue_capacity: default_queue_capacity(),
            delivery_timeout_secs: default_delivery_timeout(),
        }
    }
}

fn default_queue_capacity() -> usize {
    256
}

fn default_delivery_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = NotificationsConfig::default();
        assert_eq!(config.mode, NotificationMode::Queued);
        assert_eq!(config.delivery_timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_is_rejected() {
        let config = NotificationsConfig {
            queue_capacity: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidQueueCapacity));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = NotificationsConfig {
            delivery_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDeliveryTimeout));
    }
}
