//! Project domain events.
//!
//! - `ProjectCreated` - New project registered by its owner
//! - `ProjectUpdated` - Owner changed one or more fields

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Stack;
use crate::domain::foundation::{domain_event, EventId, ProjectId, Timestamp, UserId};

/// Published when a project is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreated {
    pub event_id: EventId,
    pub project_id: ProjectId,
    pub owner_id: UserId,
    pub name: String,
    pub stack: Stack,
    pub created_at: Timestamp,
}

domain_event!(ProjectCreated => "project.created", Project(project_id), at created_at);

/// Published when the owner updates a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectUpdated {
    pub event_id: EventId,
    pub project_id: ProjectId,
    pub updated_by: UserId,
    /// Whether the project is still accepting new sessions.
    pub active: bool,
    pub updated_at: Timestamp,
}

domain_event!(ProjectUpdated => "project.updated", Project(project_id), at updated_at);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DomainEvent;

    #[test]
    fn project_created_implements_domain_event() {
        let event = ProjectCreated {
            event_id: EventId::new(),
            project_id: ProjectId::new(),
            owner_id: UserId::new("owner-1").unwrap(),
            name: "Pair Connect".to_string(),
            stack: Stack::Frontend,
            created_at: Timestamp::now(),
        };

        assert_eq!(event.event_type(), "project.created");
        assert_eq!(event.aggregate_type(), "Project");
        assert_eq!(event.aggregate_id(), event.project_id.to_string());
    }
}
