//! Review domain entity

use chrono::{DateTime, Utc};

use crate::domain::permissions::Owned;
use crate::domain::{DomainError, DomainResult, ListingRef, UserSummary};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// Rejects ratings outside `MIN_RATING..=MAX_RATING`.
pub fn validate_rating(rating: i32) -> DomainResult<()> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(DomainError::InvalidField {
            field: "rating",
            message: format!("must be between {MIN_RATING} and {MAX_RATING}"),
        })
    }
}

/// A user's rating of a listing. One per (listing, user).
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub listing_id: String,
    /// Author. Always the authenticated creator.
    pub user_id: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub listing_id: String,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewChanges {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

impl Review {
    pub fn new(user_id: impl Into<String>, draft: ReviewDraft) -> DomainResult<Self> {
        validate_rating(draft.rating)?;
        let now = Utc::now();
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            listing_id: draft.listing_id,
            user_id: user_id.into(),
            rating: draft.rating,
            comment: draft.comment,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn apply(&mut self, changes: ReviewChanges) -> DomainResult<()> {
        if let Some(rating) = changes.rating {
            validate_rating(rating)?;
            self.rating = rating;
        }
        if let Some(comment) = changes.comment {
            self.comment = comment;
        }
        self.updated_at = Utc::now();
        Ok(())
    }
}

impl Owned for Review {
    const ENTITY: &'static str = "Review";
    const OWNER_ROLE: &'static str = "author";

    fn owner_id(&self) -> &str {
        &self.user_id
    }
}

/// Review joined with its author and listing
#[derive(Debug, Clone)]
pub struct ReviewView {
    pub review: Review,
    pub user: UserSummary,
    pub listing: ListingRef,
}
