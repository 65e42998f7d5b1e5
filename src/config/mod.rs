//! Typed settings read from the environment.
//!
//! Every key lives under `PAIR_CONNECT__<SECTION>__<KEY>`; a `.env` file in
//! the working directory is read first when present.
//!
//! # Example
//!
//! ```no_run
//! use pair_connect::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod email;
mod error;
mod notifications;
mod server;

pub use auth::{AuthConfig, MIN_JWT_SECRET_BYTES};
pub use database::DatabaseConfig;
pub use email::{EmailConfig, EmailTransport};
pub use error::{ConfigError, ValidationError};
pub use notifications::{NotificationMode, NotificationsConfig};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// All sections together
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    /// No default: a secret is always required
    pub auth: AuthConfig,

    #[serde(default)]
    pub email: EmailConfig,

    #[serde(default)]
    pub notifications: NotificationsConfig,
}

impl AppConfig {
    /// Reads `.env` (if any) and then the process environment.
    ///
    /// `PAIR_CONNECT__SERVER__PORT=3000` sets `server.port`. Fails when
    /// `AUTH__JWT_SECRET` is absent or a value does not parse.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAIR_CONNECT")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// Production additionally requires a database; development may fall
    /// back to the in-memory store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.email.validate()?;
        self.notifications.validate()?;

        if self.is_production() && !self.database.is_configured() {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
