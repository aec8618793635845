//! Review DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{ReviewChanges, ReviewDraft, ReviewView};
use crate::interfaces::http::dto::{ListingSummaryDto, UserSummaryDto};

/// New review. Any `user` field is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ReviewRequest {
    /// Listing ID
    #[validate(length(min = 1, message = "is required"))]
    pub listing: String,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: i32,
    #[serde(default)]
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub comment: String,
}

impl From<ReviewRequest> for ReviewDraft {
    fn from(r: ReviewRequest) -> Self {
        Self {
            listing_id: r.listing,
            rating: r.rating,
            comment: r.comment,
        }
    }
}

/// Full review update (PUT). The reviewed listing cannot change.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: i32,
    #[serde(default)]
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub comment: String,
}

impl From<UpdateReviewRequest> for ReviewChanges {
    fn from(r: UpdateReviewRequest) -> Self {
        Self {
            rating: Some(r.rating),
            comment: Some(r.comment),
        }
    }
}

/// Partial review update (PATCH)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PatchReviewRequest {
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: Option<i32>,
    #[validate(length(max = 2000, message = "must be at most 2000 characters"))]
    pub comment: Option<String>,
}

impl From<PatchReviewRequest> for ReviewChanges {
    fn from(r: PatchReviewRequest) -> Self {
        Self {
            rating: r.rating,
            comment: r.comment,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub id: String,
    pub listing: ListingSummaryDto,
    pub user: UserSummaryDto,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReviewView> for ReviewDto {
    fn from(v: ReviewView) -> Self {
        let r = v.review;
        Self {
            id: r.id,
            listing: v.listing.into(),
            user: v.user.into(),
            rating: r.rating,
            comment: r.comment,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
