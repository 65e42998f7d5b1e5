//! Match criteria shared by both suggestion directions.

use crate::domain::catalog::{LanguageSet, Level, Stack};
use crate::domain::developer::Developer;
use crate::domain::foundation::LevelId;
use crate::domain::session::Session;

/// The stack/level/language triple a candidate is compared against.
///
/// - stack must be equal; a missing stack matches nothing
/// - languages must intersect, unless the criteria carry none
/// - level must be identical, unless the criteria carry none
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCriteria {
    pub stack: Option<Stack>,
    pub level: Option<LevelId>,
    pub languages: LanguageSet,
}

impl MatchCriteria {
    pub fn for_session(session: &Session) -> Self {
        Self {
            stack: Some(session.stack()),
            level: session.level().map(|l| l.id),
            languages: session.languages().clone(),
        }
    }

    pub fn for_developer(developer: &Developer) -> Self {
        Self {
            stack: developer.stack,
            level: developer.level.as_ref().map(|l| l.id),
            languages: developer.languages.clone(),
        }
    }

    /// Whether a candidate with the given attributes satisfies every filter.
    pub fn accepts(
        &self,
        stack: Option<Stack>,
        level: Option<&Level>,
        languages: &LanguageSet,
    ) -> bool {
        let stack_ok = matches!((self.stack, stack), (Some(wanted), Some(got)) if wanted == got);
        if !stack_ok {
            return false;
        }
        if !self.languages.is_empty() && !self.languages.intersects(languages) {
            return false;
        }
        match self.level {
            Some(wanted) => level.map(|l| l.id) == Some(wanted),
            None => true,
        }
    }
}
