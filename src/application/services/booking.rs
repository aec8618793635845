//! Booking use cases

use std::sync::Arc;

use tracing::info;

use super::referenced_listing;
use crate::domain::{
    check_object_permission, Action, Booking, BookingChanges, BookingDraft, BookingView, Caller,
    DomainError, DomainResult, RepositoryProvider,
};

/// Service for booking operations. Every call has an authenticated caller;
/// mutations are guest-only.
pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self) -> DomainResult<Vec<BookingView>> {
        self.repos.bookings().find_all().await
    }

    pub async fn retrieve(&self, id: &str) -> DomainResult<BookingView> {
        self.repos
            .bookings()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking", id))
    }

    /// Book a listing as `caller`. Any guest named by the client is ignored.
    pub async fn create(&self, caller: &Caller, draft: BookingDraft) -> DomainResult<BookingView> {
        let booking = Booking::new(&caller.user_id, draft)?;
        let listing = referenced_listing(self.repos.as_ref(), &booking.listing_id).await?;
        self.repos.bookings().save(booking.clone()).await?;

        info!(
            booking_id = %booking.id,
            listing_id = %booking.listing_id,
            guest = %caller.username,
            nights = booking.nights(),
            "Booking created"
        );
        Ok(BookingView {
            booking,
            guest: caller.summary(),
            listing,
        })
    }

    pub async fn update(
        &self,
        caller: &Caller,
        id: &str,
        changes: BookingChanges,
        action: Action,
    ) -> DomainResult<BookingView> {
        let mut view = self.retrieve(id).await?;
        check_object_permission(action, &view.booking, Some(caller))?;

        if let Some(listing_id) = &changes.listing_id {
            if *listing_id != view.booking.listing_id {
                view.listing = referenced_listing(self.repos.as_ref(), listing_id).await?;
            }
        }
        view.booking.apply(changes)?;
        self.repos.bookings().update(view.booking.clone()).await?;

        info!(booking_id = %id, status = %view.booking.status, "Booking updated");
        Ok(view)
    }

    pub async fn destroy(&self, caller: &Caller, id: &str) -> DomainResult<()> {
        let view = self.retrieve(id).await?;
        check_object_permission(Action::Destroy, &view.booking, Some(caller))?;

        if !self.repos.bookings().delete(id).await? {
            return Err(DomainError::not_found("Booking", id));
        }
        info!(booking_id = %id, "Booking deleted");
        Ok(())
    }
}
