//! Repository traits for the domain layer
//!
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::booking::BookingRepository;
use super::listing::ListingRepository;
use super::review::ReviewRepository;
use super::user::UserRepository;
use crate::support::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let listing = repos.listings().find_by_id("0b6c...").await?;
///     let reviews = repos.reviews().find_all().await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn listings(&self) -> &dyn ListingRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn reviews(&self) -> &dyn ReviewRepository;
}
