use async_trait::async_trait;

use crate::domain::catalog::{LanguageSet, Level, ProgLanguage};
use crate::domain::foundation::{DomainError, LevelId};
use crate::ports::{unknown_languages, CatalogReader};

use super::InMemoryStore;

#[async_trait]
impl CatalogReader for InMemoryStore {
    async fn list_levels(&self) -> Result<Vec<Level>, DomainError> {
        Ok(self.state.read().await.levels.clone())
    }

    async fn list_languages(&self) -> Result<Vec<ProgLanguage>, DomainError> {
        Ok(self.state.read().await.languages.clone())
    }

    async fn find_level(&self, id: &LevelId) -> Result<Option<Level>, DomainError> {
        let state = self.state.read().await;
        Ok(state.levels.iter().find(|l| &l.id == id).cloned())
    }

    async fn find_languages_by_names(&self, names: &[String]) -> Result<LanguageSet, DomainError> {
        let state = self.state.read().await;
        let mut found = LanguageSet::new();
        let mut missing = Vec::new();

        for name in names {
            match state
                .languages
                .iter()
                .find(|l| l.name.eq_ignore_ascii_case(name.trim()))
            {
                Some(language) => found.insert(language.clone()),
                None => missing.push(name.clone()),
            }
        }

        if missing.is_empty() {
            Ok(found)
        } else {
            Err(unknown_languages(&missing))
        }
    }
}
