//! Listing domain entity

use chrono::{DateTime, Utc};

use crate::domain::permissions::Owned;
use crate::domain::{BookingView, ReviewView, UserSummary};

/// Property offered by a host
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    /// Owning user. Assigned on creation and never changed afterwards.
    pub host_id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Nightly price in the smallest currency unit (e.g. cents)
    pub price_per_night: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied listing fields. Carries no host on purpose.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price_per_night: i32,
}

/// Partial update of a listing
#[derive(Debug, Clone, Default)]
pub struct ListingChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price_per_night: Option<i32>,
}

impl From<ListingDraft> for ListingChanges {
    fn from(d: ListingDraft) -> Self {
        Self {
            title: Some(d.title),
            description: Some(d.description),
            location: Some(d.location),
            price_per_night: Some(d.price_per_night),
        }
    }
}

impl Listing {
    pub fn new(host_id: impl Into<String>, draft: ListingDraft) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            host_id: host_id.into(),
            title: draft.title,
            description: draft.description,
            location: draft.location,
            price_per_night: draft.price_per_night,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, changes: ListingChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(location) = changes.location {
            self.location = location;
        }
        if let Some(price) = changes.price_per_night {
            self.price_per_night = price;
        }
        self.updated_at = Utc::now();
    }
}

impl Owned for Listing {
    const ENTITY: &'static str = "Listing";
    const OWNER_ROLE: &'static str = "host";

    fn owner_id(&self) -> &str {
        &self.host_id
    }
}

/// Listing joined with its host
#[derive(Debug, Clone)]
pub struct ListingView {
    pub listing: Listing,
    pub host: UserSummary,
}

impl ListingView {
    pub fn to_ref(&self) -> ListingRef {
        ListingRef {
            id: self.listing.id.clone(),
            title: self.listing.title.clone(),
            host: self.host.clone(),
        }
    }
}

/// Listing with its host and everything booked and written against it
#[derive(Debug, Clone)]
pub struct ListingDetail {
    pub listing: Listing,
    pub host: UserSummary,
    pub bookings: Vec<BookingView>,
    pub reviews: Vec<ReviewView>,
}

impl ListingDetail {
    pub fn new(view: ListingView, bookings: Vec<BookingView>, reviews: Vec<ReviewView>) -> Self {
        Self {
            listing: view.listing,
            host: view.host,
            bookings,
            reviews,
        }
    }
}

/// Compact listing reference embedded in bookings and reviews
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRef {
    pub id: String,
    pub title: String,
    pub host: UserSummary,
}
