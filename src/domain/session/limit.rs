//! Participant limit value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cap on confirmed participants. Zero means unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantLimit(u32);

impl ParticipantLimit {
    pub const UNLIMITED: ParticipantLimit = ParticipantLimit(0);

    pub fn new(limit: u32) -> Self {
        Self(limit)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_unlimited(&self) -> bool {
        self.0 == 0
    }

    /// True if one more participant fits when `current` are already confirmed.
    pub fn admits(&self, current: usize) -> bool {
        self.is_unlimited() || current < self.0 as usize
    }

    /// True if `count` participants do not exceed the cap.
    pub fn allows_total(&self, count: usize) -> bool {
        self.is_unlimited() || count <= self.0 as usize
    }
}

impl From<u32> for ParticipantLimit {
    fn from(limit: u32) -> Self {
        Self(limit)
    }
}

impl fmt::Display for ParticipantLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unlimited() {
            f.write_str("unlimited")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
