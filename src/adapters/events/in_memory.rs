//! Capturing event publisher for tests.

use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// Keeps every published envelope in order.
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// handler.handle(cmd, metadata).await?;
/// assert!(bus.has_event("session.created"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    published: Mutex<Vec<EventEnvelope>>,
    rejects: bool,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bus that refuses every event.
    pub fn failing() -> Self {
        Self {
            rejects: true,
            ..Self::default()
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<EventEnvelope>> {
        self.published.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.lock().clone()
    }

    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.lock()
            .iter()
            .filter(|e| e.event_type == event_type)
            .cloned()
            .collect()
    }

    pub fn event_count(&self) -> usize {
        self.lock().len()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.lock().iter().any(|e| e.event_type == event_type)
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.rejects {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "event bus rejected the event",
            ));
        }
        self.lock().push(event);
        Ok(())
    }
}
