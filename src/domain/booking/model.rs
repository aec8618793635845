//! Booking domain entity

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::permissions::Owned;
use crate::domain::{DomainError, DomainResult, ListingRef, UserSummary};

/// Booking status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Canceled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Canceled => "canceled",
        }
    }

    /// Statuses a guest may put their own booking into
    pub fn guest_settable(self) -> bool {
        matches!(self, Self::Pending | Self::Canceled)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "confirmed" => Some(Self::Confirmed),
            "canceled" | "cancelled" => Some(Self::Canceled),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A guest's stay at a listing
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub listing_id: String,
    /// Owning user. Always the authenticated creator.
    pub guest_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied booking fields
#[derive(Debug, Clone)]
pub struct BookingDraft {
    pub listing_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Partial update of a booking
#[derive(Debug, Clone, Default)]
pub struct BookingChanges {
    pub listing_id: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub status: Option<BookingStatus>,
}

impl From<BookingDraft> for BookingChanges {
    fn from(d: BookingDraft) -> Self {
        Self {
            listing_id: Some(d.listing_id),
            check_in: Some(d.check_in),
            check_out: Some(d.check_out),
            status: None,
        }
    }
}

fn validate_stay(check_in: NaiveDate, check_out: NaiveDate) -> DomainResult<()> {
    if check_out <= check_in {
        return Err(DomainError::InvalidField {
            field: "check_out",
            message: "must be after check_in".to_string(),
        });
    }
    Ok(())
}

impl Booking {
    pub fn new(guest_id: impl Into<String>, draft: BookingDraft) -> DomainResult<Self> {
        validate_stay(draft.check_in, draft.check_out)?;
        let now = Utc::now();
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            listing_id: draft.listing_id,
            guest_id: guest_id.into(),
            check_in: draft.check_in,
            check_out: draft.check_out,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply the guest's changes. The booking is left untouched if the
    /// resulting stay is invalid or the guest tries to confirm it.
    pub fn apply(&mut self, changes: BookingChanges) -> DomainResult<()> {
        let check_in = changes.check_in.unwrap_or(self.check_in);
        let check_out = changes.check_out.unwrap_or(self.check_out);
        validate_stay(check_in, check_out)?;
        if let Some(status) = changes.status {
            if !status.guest_settable() && status != self.status {
                return Err(DomainError::InvalidField {
                    field: "status",
                    message: "guests can only set pending or canceled".to_string(),
                });
            }
        }

        self.check_in = check_in;
        self.check_out = check_out;
        if let Some(listing_id) = changes.listing_id {
            self.listing_id = listing_id;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

impl Owned for Booking {
    const ENTITY: &'static str = "Booking";
    const OWNER_ROLE: &'static str = "guest";

    fn owner_id(&self) -> &str {
        &self.guest_id
    }
}

/// Booking joined with its guest and listing (with the listing's host)
#[derive(Debug, Clone)]
pub struct BookingView {
    pub booking: Booking,
    pub guest: UserSummary,
    pub listing: ListingRef,
}
