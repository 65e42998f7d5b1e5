//! Experience level catalog entry.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::LevelId;

/// Experience tier (e.g. Junior, Mid, Senior). Matching compares by id only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Level {
    pub id: LevelId,
    pub name: String,
}

impl Level {
    pub fn new(id: LevelId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
