//! Outbound port for domain events.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Receives every event a handler emits.
///
/// Handlers publish after the state change is stored. A publish failure is
/// logged by the caller and never undoes the change.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError>;
}
