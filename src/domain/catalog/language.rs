//! Programming language tags and the set type used for matching.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::LanguageId;

/// A programming language tag from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgLanguage {
    pub id: LanguageId,
    pub name: String,
}

impl ProgLanguage {
    pub fn new(id: LanguageId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for ProgLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Set of languages keyed by id.
///
/// Duplicates collapse on insert; iteration order is stable (by id).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ProgLanguage>", into = "Vec<ProgLanguage>")]
pub struct LanguageSet(BTreeMap<LanguageId, ProgLanguage>);

impl LanguageSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, language: ProgLanguage) {
        self.0.insert(language.id, language);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, id: &LanguageId) -> bool {
        self.0.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProgLanguage> {
        self.0.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &LanguageId> {
        self.0.keys()
    }

    pub fn names(&self) -> Vec<String> {
        self.0.values().map(|l| l.name.clone()).collect()
    }

    /// True when at least one language is shared.
    pub fn intersects(&self, other: &LanguageSet) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.ids().any(|id| large.contains(id))
    }

    /// Returns the first language of `self` that `superset` lacks.
    pub fn missing_from(&self, superset: &LanguageSet) -> Option<&ProgLanguage> {
        self.iter().find(|language| !superset.contains(&language.id))
    }
}

impl FromIterator<ProgLanguage> for LanguageSet {
    fn from_iter<I: IntoIterator<Item = ProgLanguage>>(iter: I) -> Self {
        let mut set = LanguageSet::new();
        for language in iter {
            set.insert(language);
        }
        set
    }
}

impl From<Vec<ProgLanguage>> for LanguageSet {
    fn from(languages: Vec<ProgLanguage>) -> Self {
        languages.into_iter().collect()
    }
}

impl From<LanguageSet> for Vec<ProgLanguage> {
    fn from(set: LanguageSet) -> Self {
        set.0.into_values().collect()
    }
}
