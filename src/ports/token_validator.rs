//! Bearer token validation port.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Turns a raw bearer token into the caller's identity.
///
/// Implementations check signature, issuer, audience and expiry, and
/// distinguish an expired token (`TokenExpired`) from any other rejection
/// (`InvalidToken`). `ServiceUnavailable` is reserved for transient
/// failures of the validator itself.
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// `token` is passed without the `Bearer ` prefix.
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
