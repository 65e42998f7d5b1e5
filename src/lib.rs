//! Pair Connect - pair-programming and mentorship backend.
//!
//! Developers publish projects, schedule pairing sessions under them,
//! express interest in each other's sessions and get confirmed or invited
//! by the host. Matching suggests developers for a session and sessions for
//! a developer based on stack, level and languages.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
