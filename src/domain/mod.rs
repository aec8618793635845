//! Domain layer: entities, ownership rules and repository interfaces.

pub mod booking;
pub mod listing;
pub mod permissions;
pub mod repositories;
pub mod review;
pub mod user;

pub use booking::{Booking, BookingChanges, BookingDraft, BookingStatus, BookingView};
pub use listing::{Listing, ListingChanges, ListingDetail, ListingDraft, ListingRef, ListingView};
pub use permissions::{check_object_permission, is_owner, Action, Caller, Owned};
pub use repositories::{DomainResult, RepositoryProvider};
pub use review::{Review, ReviewChanges, ReviewDraft, ReviewView};
pub use user::{User, UserSummary};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
