//! Authentication middleware for Axum
//!
//! `auth_middleware` rejects requests without a valid bearer token.
//! `optional_auth_middleware` lets anonymous requests through but still
//! rejects a token that is present and invalid. A token is only valid while
//! the user it names exists and is active. Handlers that need a caller take
//! the `AuthenticatedUser` extractor, which answers 401 when absent.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header, request::Parts, HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::errors::ErrorKind;
use tracing::{debug, error};

use crate::domain::{Caller, RepositoryProvider, User};
use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig};
use crate::interfaces::http::common::ApiResponse;

/// Authentication error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    ExpiredToken,
    /// The user lookup itself failed
    Unavailable,
}

/// Authentication state: token settings plus the user store
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
    pub repos: Arc<dyn RepositoryProvider>,
}

/// Caller resolved from a verified token and the current user record
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
}

impl AuthenticatedUser {
    pub fn from_user(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
        }
    }

    pub fn caller(&self) -> Caller {
        Caller::new(&self.user_id, &self.username)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthenticatedUser {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| auth_error_response(AuthError::MissingToken))
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolve the caller from the `Authorization` header.
///
/// `Ok(None)` means no header was sent.
async fn authenticate(
    headers: &HeaderMap,
    auth_state: &AuthState,
) -> Result<Option<AuthenticatedUser>, AuthError> {
    let Some(auth_header) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };
    let token = auth_header
        .to_str()
        .ok()
        .and_then(extract_token)
        .ok_or(AuthError::InvalidToken)?;

    let claims = verify_token(token, &auth_state.jwt_config).map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
        _ => AuthError::InvalidToken,
    })?;
    if claims.is_expired() {
        return Err(AuthError::ExpiredToken);
    }

    let user = auth_state
        .repos
        .users()
        .find_by_id(&claims.sub)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to load token subject");
            AuthError::Unavailable
        })?;
    match user {
        Some(user) if user.is_active => Ok(Some(AuthenticatedUser::from_user(user))),
        _ => {
            debug!(user_id = %claims.sub, "Token names a missing or inactive user");
            Err(AuthError::InvalidToken)
        }
    }
}

/// JWT authentication middleware
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    match authenticate(request.headers(), &auth_state).await {
        Ok(Some(user)) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Ok(None) => auth_error_response(AuthError::MissingToken),
        Err(e) => auth_error_response(e),
    }
}

/// Optional authentication middleware
pub async fn optional_auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    match authenticate(request.headers(), &auth_state).await {
        Ok(Some(user)) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Ok(None) => next.run(request).await,
        Err(e) => auth_error_response(e),
    }
}

fn auth_error_response(error: AuthError) -> Response {
    let (status, message) = match error {
        AuthError::MissingToken => (
            StatusCode::UNAUTHORIZED,
            "Authentication credentials were not provided",
        ),
        AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid authentication token"),
        AuthError::ExpiredToken => (StatusCode::UNAUTHORIZED, "Token has expired"),
        AuthError::Unavailable => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
    };

    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::repos;
    use crate::infrastructure::crypto::jwt::create_token;
    use axum::http::HeaderValue;

    async fn state() -> AuthState {
        AuthState {
            jwt_config: JwtConfig::new("middleware-secret", 1),
            repos: repos().await,
        }
    }

    async fn stored_user(state: &AuthState, username: &str, active: bool) -> User {
        let mut user = User::new(username, format!("{username}@example.com"), "x");
        user.is_active = active;
        state.repos.users().create(user.clone()).await.unwrap();
        user
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn bearer(user_id: &str, username: &str, config: &JwtConfig) -> HeaderMap {
        let token = create_token(user_id, username, config).unwrap();
        headers(&format!("Bearer {token}"))
    }

    #[tokio::test]
    async fn missing_header_is_anonymous() {
        let state = state().await;
        assert!(authenticate(&HeaderMap::new(), &state).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn valid_bearer_token_yields_stored_user() {
        let state = state().await;
        let alice = stored_user(&state, "alice", true).await;

        let user = authenticate(&bearer(&alice.id, "alice", &state.jwt_config), &state)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.user_id, alice.id);
        assert_eq!(user.caller().username, "alice");
    }

    #[tokio::test]
    async fn malformed_or_foreign_tokens_are_rejected() {
        let state = state().await;
        let alice = stored_user(&state, "alice", true).await;

        for value in ["Basic abc", "Bearer ", "Bearer garbage"] {
            assert_eq!(
                authenticate(&headers(value), &state).await.unwrap_err(),
                AuthError::InvalidToken
            );
        }
        let foreign = bearer(&alice.id, "alice", &JwtConfig::new("other", 1));
        assert_eq!(
            authenticate(&foreign, &state).await.unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[tokio::test]
    async fn token_for_unknown_or_inactive_user_is_rejected() {
        let state = state().await;
        let ghost = bearer("ghost-id", "ghost", &state.jwt_config);
        assert_eq!(
            authenticate(&ghost, &state).await.unwrap_err(),
            AuthError::InvalidToken
        );

        let dormant = stored_user(&state, "dormant", false).await;
        let token = bearer(&dormant.id, "dormant", &state.jwt_config);
        assert_eq!(
            authenticate(&token, &state).await.unwrap_err(),
            AuthError::InvalidToken
        );
    }
}
