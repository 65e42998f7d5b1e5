//! Configuration errors

use thiserror::Error;

/// Loading failed before any value could be checked.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A loaded value is out of bounds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("'{0}' is not a valid bind address")]
    InvalidBindAddress(String),

    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("request timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("database url must start with postgres:// or postgresql://")]
    InvalidDatabaseUrl,

    #[error("min_connections is larger than max_connections")]
    InvalidPoolSize,

    #[error("max_connections may not exceed 100")]
    PoolSizeTooLarge,

    #[error("jwt secret is shorter than 32 bytes")]
    JwtSecretTooShort,

    #[error("resend api key must start with re_")]
    InvalidResendKey,

    #[error("from_email is not an email address")]
    InvalidFromEmail,

    #[error("notification queue capacity must be between 1 and 100000")]
    InvalidQueueCapacity,

    #[error("notification delivery timeout must be between 1 and 120 seconds")]
    InvalidDeliveryTimeout,
}
