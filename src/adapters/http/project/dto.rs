//! HTTP DTOs for project endpoints.

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::catalog::Level;
use crate::domain::foundation::LevelId;
use crate::domain::project::Project;

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn default_active() -> bool {
    true
}

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub stack: String,
    #[serde(default)]
    pub languages: Vec<String>,
    pub level_id: LevelId,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Partial update; omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image_url: Option<Option<String>>,
    #[serde(default)]
    pub stack: Option<String>,
    #[serde(default)]
    pub languages: Option<Vec<String>>,
    #[serde(default)]
    pub level_id: Option<LevelId>,
    #[serde(default)]
    pub active: Option<bool>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct LevelResponse {
    pub id: String,
    pub name: String,
}

impl From<&Level> for LevelResponse {
    fn from(level: &Level) -> Self {
        Self {
            id: level.id.to_string(),
            name: level.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub stack: String,
    pub languages: Vec<String>,
    pub level: LevelResponse,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            owner_id: project.owner_id().to_string(),
            name: project.name().to_string(),
            description: project.description().map(str::to_string),
            image_url: project.image_url().map(str::to_string),
            stack: project.stack().to_string(),
            languages: project.languages().names(),
            level: project.level().into(),
            active: project.is_active(),
            created_at: project.created_at().to_rfc3339(),
            updated_at: project.updated_at().to_rfc3339(),
        }
    }
}
