//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, events, commands)
//! - `catalog` - Stack, level and language reference data
//! - `developer` - The user pool seen by matching and notifications
//! - `project` - Owned project aggregate
//! - `session` - Session lifecycle, participants and interest records
//! - `matching` - Pure suggestion algorithms
//! - `notification` - Messages composed from lifecycle transitions

pub mod catalog;
pub mod developer;
pub mod foundation;
pub mod matching;
pub mod notification;
pub mod project;
pub mod session;
