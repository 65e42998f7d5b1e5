//! Email configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Which mail transport to wire up.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailTransport {
    /// Write messages to the log instead of sending
    #[default]
    Log,
    /// Send through the Resend HTTP API
    Resend,
}

/// Email configuration
#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    #[serde(default)]
    pub transport: EmailTransport,

    /// Resend API key, required when `transport = resend`
    pub resend_api_key: Option<Secret<String>>,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.transport == EmailTransport::Resend {
            let key = self
                .resend_api_key
                .as_ref()
                .map(|k| k.expose_secret().as_str())
                .unwrap_or("");
            if key.is_empty() {
                return Err(ValidationError::MissingRequired("EMAIL__RESEND_API_KEY"));
            }
            if !key.starts_with("re_") {
                return Err(ValidationError::InvalidResendKey);
            }
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            transport: EmailTransport::Log,
            resend_api_key: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
        }
    }
}

fn default_from_email() -> String {
    "noreply@pairconnect.dev".to_string()
}

fn default_from_name() -> String {
    "Pair Connect".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_config_defaults() {
        let config = EmailConfig::default();
        assert_eq!(config.transport, EmailTransport::Log);
        assert_eq!(config.from_header(), "Pair Connect <noreply@pairconnect.dev>");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resend_requires_key() {
        let config = EmailConfig {
            transport: EmailTransport::Resend,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("EMAIL__RESEND_API_KEY"))
        );
    }

    #[test]
    fn test_resend_key_prefix() {
        let config = EmailConfig {
            transport: EmailTransport::Resend,
            resend_api_key: Some(Secret::new("sk_xxx".to_string())),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidResendKey));
    }

    #[test]
    fn test_validation_invalid_from_email() {
        let config = EmailConfig {
            from_email: "invalid-email".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidFromEmail));
    }
}
