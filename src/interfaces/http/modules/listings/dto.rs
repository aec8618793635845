//! Listing DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{BookingView, ListingChanges, ListingDetail, ListingDraft, ReviewView};
use crate::interfaces::http::dto::UserSummaryDto;

/// Full listing payload (create and PUT). Any `host` field is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ListingRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 5000, message = "must be at most 5000 characters"))]
    pub description: String,
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub location: String,
    /// Price in the smallest currency unit
    #[validate(range(min = 0, message = "must not be negative"))]
    pub price_per_night: i32,
}

impl From<ListingRequest> for ListingDraft {
    fn from(r: ListingRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            location: r.location,
            price_per_night: r.price_per_night,
        }
    }
}

/// Partial listing payload (PATCH)
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateListingRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 5000, message = "must be at most 5000 characters"))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 255, message = "must be 1-255 characters"))]
    pub location: Option<String>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub price_per_night: Option<i32>,
}

impl From<UpdateListingRequest> for ListingChanges {
    fn from(r: UpdateListingRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            location: r.location,
            price_per_night: r.price_per_night,
        }
    }
}

/// Booking as nested inside a listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListingBookingDto {
    pub id: String,
    pub guest: UserSummaryDto,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: String,
}

impl From<BookingView> for ListingBookingDto {
    fn from(v: BookingView) -> Self {
        let b = v.booking;
        Self {
            id: b.id,
            guest: v.guest.into(),
            check_in: b.check_in,
            check_out: b.check_out,
            status: b.status.to_string(),
        }
    }
}

/// Review as nested inside a listing
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListingReviewDto {
    pub id: String,
    pub user: UserSummaryDto,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewView> for ListingReviewDto {
    fn from(v: ReviewView) -> Self {
        let r = v.review;
        Self {
            id: r.id,
            user: v.user.into(),
            rating: r.rating,
            comment: r.comment,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListingDto {
    pub id: String,
    pub host: UserSummaryDto,
    pub title: String,
    pub description: String,
    pub location: String,
    pub price_per_night: i32,
    pub bookings: Vec<ListingBookingDto>,
    pub reviews: Vec<ListingReviewDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ListingDetail> for ListingDto {
    fn from(d: ListingDetail) -> Self {
        let l = d.listing;
        Self {
            id: l.id,
            host: d.host.into(),
            title: l.title,
            description: l.description,
            location: l.location,
            price_per_night: l.price_per_night,
            bookings: d.bookings.into_iter().map(Into::into).collect(),
            reviews: d.reviews.into_iter().map(Into::into).collect(),
            created_at: l.created_at,
            updated_at: l.updated_at,
        }
    }
}
