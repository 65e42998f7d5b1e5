//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.
//!
//! - `project` - Project CRUD and per-project session listing
//! - `session` - Session lifecycle, confirmation, invitations, interest
//! - `matching` - Developer and session suggestions
//! - `queries` - Per-user session projections

pub mod matching;
pub mod project;
pub mod queries;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;

use crate::domain::foundation::{
    CommandMetadata, DomainError, DomainEvent, ErrorCode, SerializableDomainEvent,
};
use crate::ports::EventPublisher;

/// Publishes `event` with the request's correlation metadata.
///
/// The state change has already been committed, so a publish failure is
/// logged and swallowed.
pub(crate) async fn publish_event<E: SerializableDomainEvent>(
    publisher: &dyn EventPublisher,
    event: &E,
    metadata: &CommandMetadata,
) {
    let envelope = event
        .to_envelope()
        .with_correlation_id(metadata.correlation_id())
        .with_user_id(metadata.user_id.to_string());

    if let Err(e) = publisher.publish(envelope).await {
        tracing::warn!(
            event_type = event.event_type(),
            aggregate_id = %event.aggregate_id(),
            error = %e,
            "Failed to publish domain event"
        );
    }
}

/// Names carried by a catalog `LanguageNotFound` error, if that is what `err` is.
pub(crate) fn unknown_language_names(err: &DomainError) -> Option<Vec<String>> {
    if err.code != ErrorCode::LanguageNotFound {
        return None;
    }
    let names = err
        .details
        .get("names")
        .map(|joined| joined.split(',').map(str::to_string).collect())
        .unwrap_or_default();
    Some(names)
}
