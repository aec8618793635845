//! Identity service: application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Caller, DomainError, DomainResult, RepositoryProvider, User};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

pub struct IdentityService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
}

impl IdentityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self { repos, jwt_config }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by username or email + password and issue a JWT.
    pub async fn login(&self, username_or_email: &str, password: &str) -> DomainResult<AuthResult> {
        let users = self.repos.users();
        let user = match users.find_by_username(username_or_email).await? {
            Some(user) => Some(user),
            None => users.find_by_email(username_or_email).await?,
        };

        let Some(user) = user else {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        if !user.is_active {
            return Err(DomainError::Unauthorized("Account is disabled".into()));
        }

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        let token = create_token(&user.id, &user.username, &self.jwt_config)
            .map_err(|e| DomainError::Internal(format!("Failed to create token: {}", e)))?;
        users.touch_last_login(&user.id).await?;

        info!(user_id = %user.id, username = %user.username, "User logged in");
        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user,
        })
    }

    // ── Registration ────────────────────────────────────────────

    pub async fn register(&self, username: &str, email: &str, password: &str) -> DomainResult<User> {
        if username.len() < 3 || username.len() > 50 {
            return Err(DomainError::InvalidField {
                field: "username",
                message: "must be 3-50 characters".into(),
            });
        }
        if password.len() < 8 {
            return Err(DomainError::InvalidField {
                field: "password",
                message: "must be at least 8 characters".into(),
            });
        }
        if !email.contains('@') {
            return Err(DomainError::InvalidField {
                field: "email",
                message: "is not a valid email address".into(),
            });
        }

        let users = self.repos.users();
        if users.find_by_username(username).await?.is_some() {
            return Err(DomainError::Conflict("Username already exists".into()));
        }
        if users.find_by_email(email).await?.is_some() {
            return Err(DomainError::Conflict("Email already exists".into()));
        }

        let hash = hash_password(password)
            .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))?;
        let user = User::new(username, email, hash);
        users.create(user.clone()).await?;

        info!(user_id = %user.id, username = %user.username, "New user registered");
        Ok(user)
    }

    // ── Queries ─────────────────────────────────────────────────

    /// The user behind an authenticated caller.
    pub async fn current(&self, caller: &Caller) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(&caller.user_id)
            .await?
            .filter(|user| user.is_active)
            .ok_or_else(|| DomainError::Unauthorized("User no longer exists".into()))
    }
}
