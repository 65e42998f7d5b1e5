//! Bearer authentication for the `/api` routes.
//!
//! `auth_middleware` resolves the token through the `TokenValidator` port
//! and stores the `AuthenticatedUser` in request extensions; handlers take
//! it back out with the `RequireAuth` extractor. Routes that do not use the
//! extractor (the catalog) stay public.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::TokenValidator;

pub type AuthState = Arc<dyn TokenValidator>;

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn auth_failure(status: StatusCode, code: &str, message: &str) -> Response {
    let body = ErrorResponse {
        code: code.to_string(),
        message: message.to_string(),
        details: None,
    };
    (status, Json(body)).into_response()
}

/// A request without a bearer token passes through; a bad token stops here.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(&request) else {
        return next.run(request).await;
    };

    match validator.validate(token).await {
        Ok(user) => {
            tracing::debug!(user_id = %user.id, "Bearer token accepted");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(AuthError::ServiceUnavailable(cause)) => {
            tracing::error!(error = %cause, "Token validation unavailable");
            auth_failure(
                StatusCode::SERVICE_UNAVAILABLE,
                "AUTH_UNAVAILABLE",
                "Authentication service unavailable",
            )
        }
        Err(e) => auth_failure(StatusCode::UNAUTHORIZED, "AUTH_ERROR", &e.to_string()),
    }
}

/// The authenticated caller; rejects with 401 when the middleware found none.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<AuthenticatedUser>() {
            Some(user) => Ok(RequireAuth(user.clone())),
            None => Err(AuthRejection::Unauthenticated),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AuthRejection {
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => auth_failure(
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "Authentication required",
            ),
        }
    }
}
