//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::adapters::http::project::double_option;
use crate::domain::developer::Developer;
use crate::domain::foundation::{ProjectId, Timestamp};
use crate::domain::session::Session;

fn default_true() -> bool {
    true
}

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSessionRequest {
    pub project_id: ProjectId,
    pub description: String,
    pub schedule_date_time: Timestamp,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub session_link: Option<String>,
    /// Zero means unlimited.
    #[serde(default)]
    pub participant_limit: u32,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default = "default_true")]
    pub public: bool,
    pub stack: String,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// Partial update; omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSessionRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub schedule_date_time: Option<Timestamp>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default, deserialize_with = "double_option")]
    pub session_link: Option<Option<String>>,
    #[serde(default)]
    pub participant_limit: Option<u32>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub stack: Option<String>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmParticipantRequest {
    pub username: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub project_id: String,
    pub host_id: String,
    pub description: String,
    pub schedule_date_time: String,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_link: Option<String>,
    pub participant_limit: u32,
    pub participants: Vec<String>,
    pub active: bool,
    pub public: bool,
    pub stack: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub languages: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id().to_string(),
            project_id: session.project_id().to_string(),
            host_id: session.host_id().to_string(),
            description: session.description().to_string(),
            schedule_date_time: session.schedule_date_time().to_rfc3339(),
            duration_minutes: session.duration_minutes(),
            session_link: session.session_link().map(str::to_string),
            participant_limit: session.participant_limit().value(),
            participants: session.participants().iter().map(|p| p.to_string()).collect(),
            active: session.is_active(),
            public: session.is_public(),
            stack: session.stack().to_string(),
            level: session.level().map(|l| l.name.clone()),
            languages: session.languages().names(),
            created_at: session.created_at().to_rfc3339(),
            updated_at: session.updated_at().to_rfc3339(),
        }
    }
}

/// Public profile of a developer; the email address is not exposed.
#[derive(Debug, Clone, Serialize)]
pub struct DeveloperResponse {
    pub id: String,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    pub languages: Vec<String>,
}

impl From<&Developer> for DeveloperResponse {
    fn from(developer: &Developer) -> Self {
        Self {
            id: developer.id.to_string(),
            username: developer.username.clone(),
            name: developer.name.clone(),
            stack: developer.stack.map(|s| s.to_string()),
            level: developer.level.as_ref().map(|l| l.name.clone()),
            languages: developer.languages.names(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfirmParticipantResponse {
    pub message: String,
    pub session: SessionResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterestStatusResponse {
    pub session_id: String,
    pub interested: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticipationResponse {
    pub session_id: String,
    pub user_id: String,
    pub is_participant: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_applies_defaults() {
        let json = format!(
            r#"{{
                "project_id": "{}",
                "description": "Pairing on the API",
                "schedule_date_time": "2030-01-15T18:00:00Z",
                "stack": "Backend"
            }}"#,
            ProjectId::new()
        );
        let req: CreateSessionRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(req.participant_limit, 0);
        assert!(req.active);
        assert!(req.public);
        assert!(req.duration_minutes.is_none());
        assert!(req.languages.is_empty());
    }

    #[test]
    fn update_request_can_clear_link() {
        let req: UpdateSessionRequest =
            serde_json::from_str(r#"{"session_link": null}"#).unwrap();
        assert_eq!(req.session_link, Some(None));
        assert!(req.participant_limit.is_none());
    }
}
