//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ProjectRepository` - Project aggregate persistence
//! - `SessionRepository` - Session aggregate persistence and atomic participant insert
//! - `SessionReader` - Per-user session projections
//! - `InterestRepository` - Interest records, unique per (user, session)
//! - `DeveloperDirectory` - The user pool
//! - `CatalogReader` - Levels and languages
//!
//! ## Delivery Ports
//!
//! - `MailTransport` - Sends a single message
//! - `NotificationDispatcher` - Inline or queued notification delivery
//! - `EventPublisher` - Domain event publication
//!
//! ## Auth Ports
//!
//! - `TokenValidator` - Bearer token validation

mod catalog_reader;
mod developer_directory;
mod event_publisher;
mod interest_repository;
mod mail_transport;
mod notification_dispatcher;
mod project_repository;
mod session_reader;
mod session_repository;
mod token_validator;

pub use catalog_reader::{unknown_languages, CatalogReader};
pub use developer_directory::DeveloperDirectory;
pub use event_publisher::EventPublisher;
pub use interest_repository::{InterestInsert, InterestRepository};
pub use mail_transport::MailTransport;
pub use notification_dispatcher::NotificationDispatcher;
pub use project_repository::ProjectRepository;
pub use session_reader::{MySessions, SessionReader, SessionView};
pub use session_repository::{ParticipantInsert, SessionRepository};
pub use token_validator::TokenValidator;
