use async_trait::async_trait;

use crate::domain::catalog::Stack;
use crate::domain::developer::Developer;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::DeveloperDirectory;

use super::InMemoryStore;

#[async_trait]
impl DeveloperDirectory for InMemoryStore {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Developer>, DomainError> {
        let state = self.state.read().await;
        Ok(state.developers.iter().find(|d| &d.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Developer>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .developers
            .iter()
            .find(|d| d.username == username)
            .cloned())
    }

    async fn find_by_stack(&self, stack: Stack) -> Result<Vec<Developer>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .developers
            .iter()
            .filter(|d| d.stack == Some(stack))
            .cloned()
            .collect())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<Developer>, DomainError> {
        let state = self.state.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| state.developers.iter().find(|d| &d.id == id).cloned())
            .collect())
    }
}
