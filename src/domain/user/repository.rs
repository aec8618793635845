//! User repository interface

use async_trait::async_trait;

use super::model::User;
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Duplicate username/email yields `Conflict`.
    async fn create(&self, user: User) -> DomainResult<()>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Stamp `last_login_at` with the current time
    async fn touch_last_login(&self, id: &str) -> DomainResult<()>;
}
