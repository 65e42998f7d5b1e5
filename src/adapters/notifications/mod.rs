//! Notification dispatcher adapters.
//!
//! - `DirectDispatcher` - delivers inside the caller, bounded by a timeout
//! - `QueuedDispatcher` - bounded channel drained by a background worker

mod direct;
mod queued;

pub use direct::DirectDispatcher;
pub use queued::QueuedDispatcher;
