//! Resend mail transport.
//!
//! Posts plain-text messages to the Resend HTTP API. Non-2xx responses and
//! network failures both surface as `NotificationFailed`.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::MailTransport;

const DEFAULT_API_BASE_URL: &str = "https://api.resend.com";

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

/// Mail transport backed by Resend.
pub struct ResendMailTransport {
    http_client: Client,
    api_key: Secret<String>,
    from: String,
    api_base_url: String,
}

impl ResendMailTransport {
    /// `from` is a full header value, e.g. `Pair Connect <noreply@pairconnect.dev>`.
    pub fn new(api_key: Secret<String>, from: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key,
            from: from.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.api_base_url.trim_end_matches('/'))
    }
}

fn delivery_failed(message: impl Into<String>) -> DomainError {
    DomainError::new(ErrorCode::NotificationFailed, message)
}

#[async_trait]
impl MailTransport for ResendMailTransport {
    async fn send(&self, subject: &str, body: &str, recipient: &str) -> Result<(), DomainError> {
        let request = SendEmailRequest {
            from: &self.from,
            to: [recipient],
            subject,
            text: body,
        };

        let response = self
            .http_client
            .post(self.emails_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| delivery_failed(format!("Resend request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, error = %error_text, "Resend send failed");
            return Err(delivery_failed(format!("Resend API error ({})", status)));
        }

        tracing::debug!(recipient = %recipient, "Mail sent via Resend");
        Ok(())
    }
}
