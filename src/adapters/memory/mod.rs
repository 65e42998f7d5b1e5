//! In-memory adapters - every persistence port over one shared store.
//!
//! Used by tests and by local development without a database. A single
//! store backs all ports so cross-aggregate projections (participating,
//! interested) see the same state.

mod catalog;
mod directory;
mod interests;
mod projects;
mod sessions;
mod store;

pub use store::InMemoryStore;
