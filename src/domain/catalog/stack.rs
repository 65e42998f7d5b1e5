//! Stack - the architecture track a project or session is scoped to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Architecture track. Closed set; no other values exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stack {
    Fullstack,
    Backend,
    Frontend,
}

/// Raised when a stack name is not one of the known tracks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid stack choice '{0}'. You can only choose Fullstack, Backend, or Frontend.")]
pub struct UnknownStack(pub String);

impl Stack {
    /// All stacks, in display order.
    pub const ALL: [Stack; 3] = [Stack::Fullstack, Stack::Backend, Stack::Frontend];

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stack::Fullstack => "Fullstack",
            Stack::Backend => "Backend",
            Stack::Frontend => "Frontend",
        }
    }

    /// Whether a session on `session_stack` may belong to a project on `self`.
    ///
    /// A Fullstack project accepts sessions on any stack; every other
    /// project only accepts sessions on its own stack.
    pub fn permits(&self, session_stack: Stack) -> bool {
        match self {
            Stack::Fullstack => Stack::ALL.contains(&session_stack),
            other => *other == session_stack,
        }
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stack {
    type Err = UnknownStack;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stack::ALL
            .into_iter()
            .find(|stack| stack.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStack(s.to_string()))
    }
}
