//! Adapters - Implementations of port interfaces.
//!
//! - `auth` - bearer token validation (JWT, mock)
//! - `events` - event publishers (in-memory capture, tracing)
//! - `http` - axum routes, DTOs and error mapping
//! - `mail` - mail transports (log, Resend, in-memory)
//! - `memory` - in-memory persistence for tests and local development
//! - `notifications` - direct and queued notification dispatch
//! - `postgres` - PostgreSQL persistence via sqlx

pub mod auth;
pub mod events;
pub mod http;
pub mod mail;
pub mod memory;
pub mod notifications;
pub mod postgres;
