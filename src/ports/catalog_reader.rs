//! Catalog reader port - levels and languages reference data.

use async_trait::async_trait;

use crate::domain::catalog::{LanguageSet, Level, ProgLanguage};
use crate::domain::foundation::{DomainError, ErrorCode, LevelId};

#[async_trait]
pub trait CatalogReader: Send + Sync {
    async fn list_levels(&self) -> Result<Vec<Level>, DomainError>;

    async fn list_languages(&self) -> Result<Vec<ProgLanguage>, DomainError>;

    async fn find_level(&self, id: &LevelId) -> Result<Option<Level>, DomainError>;

    /// Resolve language names (case-insensitive).
    ///
    /// # Errors
    ///
    /// - `LanguageNotFound` listing every unknown name
    async fn find_languages_by_names(&self, names: &[String]) -> Result<LanguageSet, DomainError>;
}

/// Error for unresolved language names; the `names` detail is comma-separated.
pub fn unknown_languages(missing: &[String]) -> DomainError {
    DomainError::new(
        ErrorCode::LanguageNotFound,
        format!("Unknown languages: {}", missing.join(", ")),
    )
    .with_detail("names", missing.join(","))
}
