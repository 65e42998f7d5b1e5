//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Minimum HS256 secret length in bytes.
pub const MIN_JWT_SECRET_BYTES: usize = 32;

/// Bearer token configuration (HS256 JWT)
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC secret
    pub jwt_secret: Secret<String>,

    /// Expected `iss` claim
    #[serde(default = "default_issuer")]
    pub issuer: String,

    /// Expected `aud` claim
    #[serde(default = "default_audience")]
    pub audience: String,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort);
        }
        if self.issuer.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__ISSUER"));
        }
        if self.audience.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__AUDIENCE"));
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Secret::new(String::new()),
            issuer: default_issuer(),
            audience: default_audience(),
        }
    }
}

fn default_issuer() -> String {
    "pair-connect".to_string()
}

fn default_audience() -> String {
    "pair-connect-api".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_secret_is_rejected() {
        let config = AuthConfig::default();
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"))
        );
    }

    #[test]
    fn test_short_secret_is_rejected() {
        let config = AuthConfig {
            jwt_secret: Secret::new("short".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::JwtSecretTooShort));
    }

    #[test]
    fn test_valid_config() {
        let config = AuthConfig {
            jwt_secret: Secret::new("x".repeat(MIN_JWT_SECRET_BYTES)),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.issuer, "pair-connect");
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let config = AuthConfig {
            jwt_secret: Secret::new("super-secret-value-that-is-long-enough".to_string()),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("super-secret"));
    }
}
