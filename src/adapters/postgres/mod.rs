//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresProjectRepository` - Project aggregates and their languages
//! - `PostgresSessionRepository` - Session aggregates, atomic participant insert
//! - `PostgresSessionReader` - Per-user session projections
//! - `PostgresInterestRepository` - Interest records
//! - `PostgresDeveloperDirectory` - The user pool
//! - `PostgresCatalogReader` - Levels and languages

mod catalog_reader;
mod developer_directory;
mod interest_repository;
mod project_repository;
mod rows;
mod session_reader;
mod session_repository;

pub use catalog_reader::PostgresCatalogReader;
pub use developer_directory::PostgresDeveloperDirectory;
pub use interest_repository::PostgresInterestRepository;
pub use project_repository::PostgresProjectRepository;
pub use session_reader::PostgresSessionReader;
pub use session_repository::PostgresSessionRepository;
