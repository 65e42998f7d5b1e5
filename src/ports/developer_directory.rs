//! Developer directory port - read access to the user pool.

use async_trait::async_trait;

use crate::domain::catalog::Stack;
use crate::domain::developer::Developer;
use crate::domain::foundation::{DomainError, UserId};

#[async_trait]
pub trait DeveloperDirectory: Send + Sync {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Developer>, DomainError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<Developer>, DomainError>;

    /// Candidate pool for developer suggestions.
    async fn find_by_stack(&self, stack: Stack) -> Result<Vec<Developer>, DomainError>;

    /// Unknown ids are skipped; order follows `ids`.
    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<Developer>, DomainError>;
}
