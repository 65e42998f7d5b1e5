//! Session domain events.
//!
//! Events published when session lifecycle changes occur:
//! - `SessionCreated` - New session scheduled under a project
//! - `SessionUpdated` - Host changed session details
//! - `ParticipantConfirmed` - Host confirmed a developer
//! - `InterestRecorded` - A user expressed interest
//! - `DeveloperInvited` - Host invited a developer

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Stack;
use crate::domain::foundation::{domain_event, EventId, ProjectId, SessionId, Timestamp, UserId};

/// Published when a host schedules a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreated {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// ID of the created session.
    pub session_id: SessionId,

    /// Project the session is scoped to.
    pub project_id: ProjectId,

    /// Host (project owner).
    pub host_id: UserId,

    pub stack: Stack,

    /// Scheduled start.
    pub schedule_date_time: Timestamp,

    /// When the session was created.
    pub created_at: Timestamp,
}

domain_event!(SessionCreated => "session.created", Session(session_id), at created_at);

/// Published when the host edits a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUpdated {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub updated_by: UserId,
    pub updated_at: Timestamp,
}

domain_event!(SessionUpdated => "session.updated", Session(session_id), at updated_at);

/// Published when a developer is confirmed into a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantConfirmed {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub developer_id: UserId,

    /// Confirmed participants after this one was added.
    pub participant_count: usize,

    pub confirmed_at: Timestamp,
}

domain_event!(ParticipantConfirmed => "session.participant_confirmed", Session(session_id), at confirmed_at);

/// Published when a user records interest in a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestRecorded {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub user_id: UserId,
    pub recorded_at: Timestamp,
}

domain_event!(InterestRecorded => "session.interest_recorded", Session(session_id), at recorded_at);

/// Published after an invitation was delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeveloperInvited {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub developer_id: UserId,
    pub invited_by: UserId,
    pub invited_at: Timestamp,
}

domain_event!(DeveloperInvited => "session.developer_invited", Session(session_id), at invited_at);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, EventEnvelope};

    #[test]
    fn participant_confirmed_envelope_carries_payload() {
        let event = ParticipantConfirmed {
            event_id: EventId::new(),
            session_id: SessionId::new(),
            developer_id: UserId::new("dev-1").unwrap(),
            participant_count: 2,
            confirmed_at: Timestamp::now(),
        };

        let envelope = EventEnvelope::from_event(&event);
        assert_eq!(envelope.event_type, "session.participant_confirmed");
        assert_eq!(envelope.aggregate_type, "Session");
        assert_eq!(envelope.aggregate_id, event.session_id.to_string());
        assert_eq!(envelope.payload["participant_count"], 2);
    }

    #[test]
    fn interest_recorded_uses_session_as_aggregate() {
        let event = InterestRecorded {
            event_id: EventId::new(),
            session_id: SessionId::new(),
            user_id: UserId::new("dev-1").unwrap(),
            recorded_at: Timestamp::now(),
        };
        assert_eq!(event.event_type(), "session.interest_recorded");
        assert_eq!(event.aggregate_id(), event.session_id.to_string());
    }
}
