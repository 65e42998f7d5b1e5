//! Developer module - the user pool that sessions are matched against.

mod profile;

pub use profile::Developer;
