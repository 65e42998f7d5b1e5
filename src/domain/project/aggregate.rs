//! Project aggregate entity.
//!
//! A project is owned exclusively by its creator and scopes the sessions
//! hosted under it: their stack, level and languages all derive from it.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{LanguageSet, Level, Stack};
use crate::domain::foundation::{ProjectId, Timestamp, UserId, ValidationError};

use super::ProjectError;

/// Maximum length for project name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for the stored image reference.
pub const MAX_IMAGE_REF_LENGTH: usize = 255;

/// Input for a new project; stack, level and languages are already resolved.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub stack: Stack,
    pub languages: LanguageSet,
    pub level: Level,
    pub active: bool,
}

/// Partial update. `None` leaves a field untouched; languages are replaced wholesale.
#[derive(Debug, Clone, Default)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub stack: Option<Stack>,
    pub languages: Option<LanguageSet>,
    pub level: Option<Level>,
    pub active: Option<bool>,
}

/// Project aggregate.
///
/// # Invariants
///
/// - `owner_id` is fixed at creation
/// - `name` is 1-255 characters, non-empty
/// - `languages` is never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    owner_id: UserId,
    name: String,
    description: Option<String>,
    image_url: Option<String>,
    stack: Stack,
    languages: LanguageSet,
    level: Level,
    active: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Project {
    /// Create a new project owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the name is empty/too long or no language is given
    pub fn new(id: ProjectId, owner_id: UserId, input: NewProject) -> Result<Self, ProjectError> {
        Self::validate_name(&input.name)?;
        Self::validate_image_url(input.image_url.as_deref())?;
        Self::validate_languages(&input.languages)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            owner_id,
            name: input.name.trim().to_string(),
            description: input.description,
            image_url: input.image_url,
            stack: input.stack,
            languages: input.languages,
            level: input.level,
            active: input.active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a project from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ProjectId,
        owner_id: UserId,
        name: String,
        description: Option<String>,
        image_url: Option<String>,
        stack: Stack,
        languages: LanguageSet,
        level: Level,
        active: bool,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            name,
            description,
            image_url,
            stack,
            languages,
            level,
            active,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ProjectId {
        &self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn stack(&self) -> Stack {
        self.stack
    }

    pub fn languages(&self) -> &LanguageSet {
        &self.languages
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Authorization
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    /// # Errors
    ///
    /// - `NotOwner` if user is not the owner
    pub fn authorize(&self, user_id: &UserId) -> Result<(), ProjectError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(ProjectError::NotOwner)
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply a partial update on behalf of `requester`.
    ///
    /// Validation runs on the merged result, so a failed update leaves the
    /// project untouched.
    pub fn apply_changes(
        &mut self,
        requester: &UserId,
        changes: ProjectChanges,
    ) -> Result<(), ProjectError> {
        self.authorize(requester)?;

        let mut next = self.clone();
        if let Some(name) = changes.name {
            Self::validate_name(&name)?;
            next.name = name.trim().to_string();
        }
        if let Some(description) = changes.description {
            next.description = description;
        }
        if let Some(image_url) = changes.image_url {
            Self::validate_image_url(image_url.as_deref())?;
            next.image_url = image_url;
        }
        if let Some(stack) = changes.stack {
            next.stack = stack;
        }
        if let Some(languages) = changes.languages {
            Self::validate_languages(&languages)?;
            next.languages = languages;
        }
        if let Some(level) = changes.level {
            next.level = level;
        }
        if let Some(active) = changes.active {
            next.active = active;
        }
        next.updated_at = Timestamp::now();

        *self = next;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn validate_name(name: &str) -> Result<(), ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long(
                "name",
                MAX_NAME_LENGTH,
                trimmed.chars().count(),
            ));
        }
        Ok(())
    }

    fn validate_image_url(image_url: Option<&str>) -> Result<(), ValidationError> {
        match image_url {
            Some(url) if url.chars().count() > MAX_IMAGE_REF_LENGTH => Err(
                ValidationError::too_long("image_url", MAX_IMAGE_REF_LENGTH, url.chars().count()),
            ),
            _ => Ok(()),
        }
    }

    fn validate_languages(languages: &LanguageSet) -> Result<(), ProjectError> {
        if languages.is_empty() {
            return Err(ProjectError::validation(
                "languages",
                "At least one language must be selected.",
            ));
        }
        Ok(())
    }
}
