//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod booking_repository;
pub mod listing_repository;
pub mod repository_provider;
pub mod review_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::{DbErr, SqlErr};

use crate::domain::DomainError;

/// Map an insert failure, turning unique-constraint violations into `Conflict`.
fn insert_err(e: DbErr, conflict_message: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::Conflict(conflict_message.to_string())
        }
        _ => e.into(),
    }
}

/// Map an update failure, turning "no row matched" into `NotFound`.
fn update_err(e: DbErr, entity: &'static str, id: &str) -> DomainError {
    match e {
        DbErr::RecordNotUpdated => DomainError::not_found(entity, id),
        other => other.into(),
    }
}
