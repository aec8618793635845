//! Data Transfer Objects shared across resources
//!
//! Nested summaries embedded in listing, booking and review responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{ListingRef, UserSummary};

/// Public view of a user (host, guest or review author)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserSummaryDto {
    pub id: String,
    pub username: String,
}

impl From<UserSummary> for UserSummaryDto {
    fn from(u: UserSummary) -> Self {
        Self {
            id: u.id,
            username: u.username,
        }
    }
}

/// Compact listing embedded in bookings and reviews
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingSummaryDto {
    pub id: String,
    pub title: String,
    pub host: UserSummaryDto,
}

impl From<ListingRef> for ListingSummaryDto {
    fn from(l: ListingRef) -> Self {
        Self {
            id: l.id,
            title: l.title,
            host: l.host.into(),
        }
    }
}
