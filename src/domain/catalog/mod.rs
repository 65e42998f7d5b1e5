//! Catalog module - reference data shared by projects, sessions and developers.
//!
//! - `Stack` - closed enum with the project/session compatibility predicate
//! - `Level` - experience tier, compared by id
//! - `ProgLanguage` / `LanguageSet` - language tags and set semantics used by matching

mod language;
mod level;
mod stack;

pub use language::{LanguageSet, ProgLanguage};
pub use level::Level;
pub use stack::{Stack, UnknownStack};
