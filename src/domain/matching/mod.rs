//! Matching module - developer and session suggestions.

mod criteria;
mod engine;

pub use criteria::MatchCriteria;
pub use engine::{suggest_developers_for, suggest_sessions_for};
