use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SessionId, UserId};
use crate::domain::session::InterestedParticipant;
use crate::ports::{InterestInsert, InterestRepository};

use super::InMemoryStore;

#[async_trait]
impl InterestRepository for InMemoryStore {
    async fn record(&self, interest: &InterestedParticipant) -> Result<InterestInsert, DomainError> {
        let mut state = self.state.write().await;
        if state
            .interests
            .iter()
            .any(|i| i.is_for(&interest.user_id, &interest.session_id))
        {
            return Ok(InterestInsert::Duplicate);
        }
        state.interests.push(interest.clone());
        Ok(InterestInsert::Inserted)
    }

    async fn exists(&self, user_id: &UserId, session_id: &SessionId) -> Result<bool, DomainError> {
        let state = self.state.read().await;
        Ok(state.interests.iter().any(|i| i.is_for(user_id, session_id)))
    }

    async fn list_user_ids(&self, session_id: &SessionId) -> Result<Vec<UserId>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .interests
            .iter()
            .filter(|i| &i.session_id == session_id)
            .map(|i| i.user_id.clone())
            .collect())
    }
}
