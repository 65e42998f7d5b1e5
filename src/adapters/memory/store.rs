//! Shared in-memory state.

use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::catalog::{Level, ProgLanguage};
use crate::domain::developer::Developer;
use crate::domain::foundation::{ProjectId, SessionId};
use crate::domain::project::Project;
use crate::domain::session::{InterestedParticipant, Session};

#[derive(Debug, Default)]
pub(super) struct State {
    pub levels: Vec<Level>,
    pub languages: Vec<ProgLanguage>,
    pub developers: Vec<Developer>,
    pub projects: HashMap<ProjectId, Project>,
    pub sessions: HashMap<SessionId, Session>,
    pub interests: Vec<InterestedParticipant>,
}

/// In-memory store implementing every persistence port.
///
/// All mutations take the single write lock, so a read-check-write inside
/// one method is atomic with respect to every other call.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub(super) state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed catalog reference data.
    pub fn with_catalog(mut self, levels: Vec<Level>, languages: Vec<ProgLanguage>) -> Self {
        let state = self.state.get_mut();
        state.levels = levels;
        state.languages = languages;
        self
    }

    /// Seed the developer pool.
    pub fn with_developers(mut self, developers: Vec<Developer>) -> Self {
        self.state.get_mut().developers = developers;
        self
    }

    /// Register or replace a developer.
    pub async fn upsert_developer(&self, developer: Developer) {
        let mut state = self.state.write().await;
        state.developers.retain(|d| d.id != developer.id);
        state.developers.push(developer);
    }

    pub async fn session_count(&self) -> usize {
        self.state.read().await.sessions.len()
    }

    pub async fn interest_count(&self) -> usize {
        self.state.read().await.interests.len()
    }
}
