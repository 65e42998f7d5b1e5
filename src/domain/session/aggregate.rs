//! Session aggregate entity.
//!
//! A session is a scheduled pairing slot hosted under a project. The host
//! is the project owner at creation time; stack, level and languages are
//! constrained by the project (see `rules`).
//!
//! # Participants
//!
//! Confirmed participants only ever grow. Whether one more fits is decided
//! by `ParticipantLimit`, and the repository re-checks it atomically.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{LanguageSet, Level, Stack};
use crate::domain::foundation::{ProjectId, SessionId, Timestamp, UserId, ValidationError};
use crate::domain::project::Project;

use super::rules::{validate_languages, validate_stack_assignment};
use super::errors::LIMIT_BELOW_CONFIRMED_REASON;
use super::{ParticipantLimit, SessionError};

/// Default session length in minutes.
pub const DEFAULT_DURATION_MINUTES: u32 = 120;

/// Maximum length for the meeting link.
pub const MAX_LINK_LENGTH: usize = 255;

/// Input for a new session.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub description: String,
    pub schedule_date_time: Timestamp,
    pub duration_minutes: u32,
    pub session_link: Option<String>,
    pub participant_limit: ParticipantLimit,
    pub active: bool,
    pub public: bool,
    pub stack: Stack,
    pub languages: LanguageSet,
}

/// Partial update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct SessionChanges {
    pub description: Option<String>,
    pub schedule_date_time: Option<Timestamp>,
    pub duration_minutes: Option<u32>,
    pub session_link: Option<Option<String>>,
    pub participant_limit: Option<ParticipantLimit>,
    pub active: Option<bool>,
    pub public: Option<bool>,
    pub stack: Option<Stack>,
    pub languages: Option<LanguageSet>,
}

/// Result of confirming a developer into a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    AlreadyConfirmed,
}

/// Session aggregate.
///
/// # Invariants
///
/// - `stack` is permitted by the project's stack
/// - `languages` is a subset of the project's languages
/// - `level` equals the project's level once inherited
/// - `participants` has no duplicates and never exceeds `participant_limit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    project_id: ProjectId,
    host_id: UserId,
    description: String,
    schedule_date_time: Timestamp,
    duration_minutes: u32,
    session_link: Option<String>,
    participant_limit: ParticipantLimit,
    active: bool,
    public: bool,
    stack: Stack,
    level: Option<Level>,
    languages: LanguageSet,
    participants: Vec<UserId>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Session {
    /// Create a session under `project`, hosted by `host`.
    ///
    /// # Errors
    ///
    /// - `NotOwner` if `host` does not own the project
    /// - `ProjectInactive` if the project no longer accepts sessions
    /// - `InvalidStack` / `InvalidLanguages` if the project scope is violated
    /// - `ValidationFailed` for malformed fields
    pub fn create(
        id: SessionId,
        project: &Project,
        host: &UserId,
        input: NewSession,
    ) -> Result<Self, SessionError> {
        project.authorize(host)?;
        if !project.is_active() {
            return Err(SessionError::ProjectInactive(*project.id()));
        }
        Self::validate_description(&input.description)?;
        Self::validate_duration(input.duration_minutes)?;
        Self::validate_link(input.session_link.as_deref())?;

        let now = Timestamp::now();
        let mut session = Self {
            id,
            project_id: *project.id(),
            host_id: host.clone(),
            description: input.description.trim().to_string(),
            schedule_date_time: input.schedule_date_time,
            duration_minutes: input.duration_minutes,
            session_link: input.session_link,
            participant_limit: input.participant_limit,
            active: input.active,
            public: input.public,
            stack: input.stack,
            level: None,
            languages: input.languages,
            participants: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        session.validate_against(project)?;
        session.inherit_level_from_project(project)?;
        Ok(session)
    }

    /// Reconstitute a session from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        project_id: ProjectId,
        host_id: UserId,
        description: String,
        schedule_date_time: Timestamp,
        duration_minutes: u32,
        session_link: Option<String>,
        participant_limit: ParticipantLimit,
        active: bool,
        public: bool,
        stack: Stack,
        level: Option<Level>,
        languages: LanguageSet,
        participants: Vec<UserId>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            project_id,
            host_id,
            description,
            schedule_date_time,
            duration_minutes,
            session_link,
            participant_limit,
            active,
            public,
            stack,
            level,
            languages,
            participants,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn project_id(&self) -> &ProjectId {
        &self.project_id
    }

    pub fn host_id(&self) -> &UserId {
        &self.host_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule_date_time(&self) -> &Timestamp {
        &self.schedule_date_time
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn session_link(&self) -> Option<&str> {
        self.session_link.as_deref()
    }

    pub fn participant_limit(&self) -> ParticipantLimit {
        self.participant_limit
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_public(&self) -> bool {
        self.public
    }

    pub fn stack(&self) -> Stack {
        self.stack
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn languages(&self) -> &LanguageSet {
        &self.languages
    }

    pub fn participants(&self) -> &[UserId] {
        &self.participants
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_host(&self, user_id: &UserId) -> bool {
        &self.host_id == user_id
    }

    pub fn is_participant(&self, user_id: &UserId) -> bool {
        self.participants.contains(user_id)
    }

    /// True if the cap leaves room for one more participant.
    pub fn has_capacity(&self) -> bool {
        self.participant_limit.admits(self.participants.len())
    }

    /// # Errors
    ///
    /// - `NotHost` if user is not the host
    pub fn authorize_host(&self, user_id: &UserId) -> Result<(), SessionError> {
        if self.is_host(user_id) {
            Ok(())
        } else {
            Err(SessionError::NotHost)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Project scoping
    // ─────────────────────────────────────────────────────────────────────────

    /// Copy the level of the owning project onto this session.
    ///
    /// # Errors
    ///
    /// - `LevelInheritance` if `project` is not the session's project
    pub fn inherit_level_from_project(&mut self, project: &Project) -> Result<(), SessionError> {
        if project.id() != &self.project_id {
            return Err(SessionError::LevelInheritance(format!(
                "session {} belongs to project {}, not {}",
                self.id,
                self.project_id,
                project.id()
            )));
        }
        self.level = Some(project.level().clone());
        Ok(())
    }

    /// Check stack compatibility against the owning project.
    pub fn validate_stack_assignment(&self, project: &Project) -> Result<(), SessionError> {
        validate_stack_assignment(project.stack(), self.stack)
    }

    fn validate_against(&self, project: &Project) -> Result<(), SessionError> {
        self.validate_stack_assignment(project)?;
        validate_languages(project.languages(), &self.languages)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Confirm `developer` as a participant on behalf of `requester`.
    ///
    /// Confirming someone already confirmed is a no-op and never trips the
    /// limit.
    ///
    /// # Errors
    ///
    /// - `NotHost` if requester is not the host
    /// - `ParticipantLimitReached` if the cap is full
    pub fn confirm_participant(
        &mut self,
        requester: &UserId,
        developer: &UserId,
    ) -> Result<ConfirmOutcome, SessionError> {
        self.authorize_host(requester)?;

        if self.is_participant(developer) {
            return Ok(ConfirmOutcome::AlreadyConfirmed);
        }
        if !self.has_capacity() {
            return Err(SessionError::ParticipantLimitReached {
                limit: self.participant_limit.value(),
            });
        }

        self.participants.push(developer.clone());
        self.updated_at = Timestamp::now();
        Ok(ConfirmOutcome::Confirmed)
    }

    /// Apply a partial update on behalf of `requester`.
    ///
    /// Project scoping is re-checked on the merged result and the level is
    /// re-inherited; a failed update leaves the session untouched.
    pub fn apply_changes(
        &mut self,
        requester: &UserId,
        project: &Project,
        changes: SessionChanges,
    ) -> Result<(), SessionError> {
        self.authorize_host(requester)?;

        let mut next = self.clone();
        if let Some(description) = changes.description {
            Self::validate_description(&description)?;
            next.description = description.trim().to_string();
        }
        if let Some(at) = changes.schedule_date_time {
            next.schedule_date_time = at;
        }
        if let Some(minutes) = changes.duration_minutes {
            Self::validate_duration(minutes)?;
            next.duration_minutes = minutes;
        }
        if let Some(link) = changes.session_link {
            Self::validate_link(link.as_deref())?;
            next.session_link = link;
        }
        if let Some(limit) = changes.participant_limit {
            if !limit.allows_total(next.participants.len()) {
                return Err(SessionError::validation(
                    "participant_limit",
                    LIMIT_BELOW_CONFIRMED_REASON,
                ));
            }
            next.participant_limit = limit;
        }
        if let Some(active) = changes.active {
            next.active = active;
        }
        if let Some(public) = changes.public {
            next.public = public;
        }
        if let Some(stack) = changes.stack {
            next.stack = stack;
        }
        if let Some(languages) = changes.languages {
            next.languages = languages;
        }

        next.validate_against(project)?;
        next.inherit_level_from_project(project)?;
        next.updated_at = Timestamp::now();

        *self = next;
        Ok(())
    }

    /// Storage helper: this session's fields with `stored`'s participants.
    ///
    /// Updates never write participants; only the atomic insert does.
    pub(crate) fn with_participants_from(&self, stored: &Session) -> Session {
        let mut merged = self.clone();
        merged.participants = stored.participants.clone();
        merged
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_description(description: &str) -> Result<(), ValidationError> {
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        Ok(())
    }

    fn validate_duration(minutes: u32) -> Result<(), ValidationError> {
        if minutes == 0 {
            return Err(ValidationError::invalid_format(
                "duration_minutes",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    fn validate_link(link: Option<&str>) -> Result<(), ValidationError> {
        match link {
            Some(url) if url.chars().count() > MAX_LINK_LENGTH => Err(ValidationError::too_long(
                "session_link",
                MAX_LINK_LENGTH,
                url.chars().count(),
            )),
            _ => Ok(()),
        }
    }
}
