//! Developer - the user-directory view consumed by matching and notifications.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{LanguageSet, Level, Stack};
use crate::domain::foundation::UserId;

/// A registered developer as seen by the matching subsystem.
///
/// Stack and level are optional: a freshly registered account may not
/// have filled them in yet, and such a developer never matches on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub email: String,
    pub stack: Option<Stack>,
    pub level: Option<Level>,
    pub languages: LanguageSet,
}

impl Developer {
    /// Name used in messages; falls back to the username.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.username
        } else {
            &self.name
        }
    }
}
