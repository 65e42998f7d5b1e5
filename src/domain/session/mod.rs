//! Session domain module.
//!
//! Scheduled pairing sessions: creation under a project, stack/level/language
//! scoping, participant confirmation and interest records.
//!
//! # Events
//!
//! - `SessionCreated` - Published when a new session is created
//! - `SessionUpdated` - Published when the host edits a session
//! - `ParticipantConfirmed` - Published when a developer is confirmed
//! - `InterestRecorded` - Published when a user expresses interest
//! - `DeveloperInvited` - Published after an invitation is delivered

mod aggregate;
mod errors;
mod events;
mod interest;
mod limit;
pub mod rules;

pub use aggregate::{
    ConfirmOutcome, NewSession, Session, SessionChanges, DEFAULT_DURATION_MINUTES,
    MAX_LINK_LENGTH,
};
pub use errors::{SessionError, ALLOWED_STACKS_REASON, LIMIT_BELOW_CONFIRMED_REASON};
pub use events::{
    DeveloperInvited, InterestRecorded, ParticipantConfirmed, SessionCreated, SessionUpdated,
};
pub use interest::InterestedParticipant;
pub use limit::ParticipantLimit;
