//! Booking DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{BookingChanges, BookingDraft, BookingStatus, BookingView, DomainError};
use crate::interfaces::http::dto::{ListingSummaryDto, UserSummaryDto};

/// New booking. Any `guest` field is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookingRequest {
    /// Listing ID
    #[validate(length(min = 1, message = "is required"))]
    pub listing: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl From<BookingRequest> for BookingDraft {
    fn from(r: BookingRequest) -> Self {
        Self {
            listing_id: r.listing,
            check_in: r.check_in,
            check_out: r.check_out,
        }
    }
}

/// Full booking update (PUT)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBookingRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub listing: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// `pending` or `canceled`. Unchanged when omitted.
    pub status: Option<String>,
}

/// Partial booking update (PATCH)
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct PatchBookingRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub listing: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    /// `pending` or `canceled`
    pub status: Option<String>,
}

fn parse_status(status: Option<String>) -> Result<Option<BookingStatus>, DomainError> {
    status
        .map(|s| {
            BookingStatus::parse(&s).ok_or_else(|| DomainError::InvalidField {
                field: "status",
                message: format!("'{}' is not one of pending, confirmed, canceled", s),
            })
        })
        .transpose()
}

impl TryFrom<UpdateBookingRequest> for BookingChanges {
    type Error = DomainError;

    fn try_from(r: UpdateBookingRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            listing_id: Some(r.listing),
            check_in: Some(r.check_in),
            check_out: Some(r.check_out),
            status: parse_status(r.status)?,
        })
    }
}

impl TryFrom<PatchBookingRequest> for BookingChanges {
    type Error = DomainError;

    fn try_from(r: PatchBookingRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            listing_id: r.listing,
            check_in: r.check_in,
            check_out: r.check_out,
            status: parse_status(r.status)?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: String,
    pub listing: ListingSummaryDto,
    pub guest: UserSummaryDto,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookingView> for BookingDto {
    fn from(v: BookingView) -> Self {
        let b = v.booking;
        Self {
            id: b.id,
            listing: v.listing.into(),
            guest: v.guest.into(),
            check_in: b.check_in,
            check_out: b.check_out,
            status: b.status.to_string(),
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}
