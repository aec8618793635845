//! Listing use cases

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::domain::{
    check_object_permission, Action, BookingView, Caller, DomainError, DomainResult, Listing,
    ListingChanges, ListingDetail, ListingDraft, ListingView, RepositoryProvider, ReviewView,
};

/// Service for listing operations. Reads are public; writes are host-only.
pub struct ListingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ListingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// All listings, newest first, with their bookings and reviews
    pub async fn list(&self) -> DomainResult<Vec<ListingDetail>> {
        let views = self.repos.listings().find_all().await?;
        self.with_nested(views).await
    }

    pub async fn retrieve(&self, id: &str) -> DomainResult<ListingDetail> {
        let view = self.fetch(id).await?;
        self.detail(view).await
    }

    async fn fetch(&self, id: &str) -> DomainResult<ListingView> {
        self.repos
            .listings()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Listing", id))
    }

    async fn detail(&self, view: ListingView) -> DomainResult<ListingDetail> {
        let mut details = self.with_nested(vec![view]).await?;
        details
            .pop()
            .ok_or_else(|| DomainError::Internal("Listing detail lost while loading".to_string()))
    }

    /// Attach bookings and reviews, loading each kind in a single batch.
    async fn with_nested(&self, views: Vec<ListingView>) -> DomainResult<Vec<ListingDetail>> {
        let ids: Vec<String> = views.iter().map(|v| v.listing.id.clone()).collect();
        let mut bookings: HashMap<String, Vec<BookingView>> = HashMap::new();
        for b in self.repos.bookings().find_by_listings(&ids).await? {
            bookings.entry(b.booking.listing_id.clone()).or_default().push(b);
        }
        let mut reviews: HashMap<String, Vec<ReviewView>> = HashMap::new();
        for r in self.repos.reviews().find_by_listings(&ids).await? {
            reviews.entry(r.review.listing_id.clone()).or_default().push(r);
        }

        Ok(views
            .into_iter()
            .map(|view| {
                let id = &view.listing.id;
                let own_bookings = bookings.remove(id).unwrap_or_default();
                let own_reviews = reviews.remove(id).unwrap_or_default();
                ListingDetail::new(view, own_bookings, own_reviews)
            })
            .collect())
    }

    /// Create a listing hosted by `caller`.
    pub async fn create(&self, caller: &Caller, draft: ListingDraft) -> DomainResult<ListingDetail> {
        let listing = Listing::new(&caller.user_id, draft);
        self.repos.listings().save(listing.clone()).await?;

        info!(listing_id = %listing.id, host = %caller.username, "Listing created");
        let view = ListingView {
            listing,
            host: caller.summary(),
        };
        Ok(ListingDetail::new(view, Vec::new(), Vec::new()))
    }

    /// Full (`Action::Update`) or partial (`Action::PartialUpdate`) update.
    pub async fn update(
        &self,
        caller: &Caller,
        id: &str,
        changes: ListingChanges,
        action: Action,
    ) -> DomainResult<ListingDetail> {
        let mut view = self.fetch(id).await?;
        check_object_permission(action, &view.listing, Some(caller))?;

        view.listing.apply(changes);
        self.repos.listings().update(view.listing.clone()).await?;

        info!(listing_id = %id, "Listing updated");
        self.detail(view).await
    }

    pub async fn destroy(&self, caller: &Caller, id: &str) -> DomainResult<()> {
        let view = self.fetch(id).await?;
        check_object_permission(Action::Destroy, &view.listing, Some(caller))?;

        if !self.repos.listings().delete(id).await? {
            return Err(DomainError::not_found("Listing", id));
        }
        info!(listing_id = %id, "Listing deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{caller, repos};

    fn cabin() -> ListingDraft {
        ListingDraft {
            title: "Cabin".to_string(),
            description: "By the lake".to_string(),
            location: "Tahoe".to_string(),
            price_per_night: 100,
        }
    }

    #[tokio::test]
    async fn create_assigns_caller_as_host() {
        let repos = repos().await;
        let host = caller(&repos, "host").await;
        let service = ListingService::new(repos);

        let created = service.create(&host, cabin()).await.unwrap();
        assert_eq!(created.listing.host_id, host.user_id);
        assert_eq!(created.host.username, "host");

        let fetched = service.retrieve(&created.listing.id).await.unwrap();
        assert_eq!(fetched.listing.id, created.listing.id);
        assert_eq!(fetched.listing.host_id, host.user_id);
        assert_eq!(fetched.listing.price_per_night, 100);
        assert_eq!(fetched.host, host.summary());
    }

    #[tokio::test]
    async fn only_host_may_update_or_destroy() {
        let repos = repos().await;
        let host = caller(&repos, "host").await;
        let stranger = caller(&repos, "stranger").await;
        let service = ListingService::new(repos);
        let id = service.create(&host, cabin()).await.unwrap().listing.id;

        let changes = ListingChanges {
            price_per_night: Some(150),
            ..Default::default()
        };
        let err = service
            .update(&stranger, &id, changes.clone(), Action::PartialUpdate)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
        assert!(matches!(
            service.destroy(&stranger, &id).await.unwrap_err(),
            DomainError::Forbidden(_)
        ));

        let updated = service
            .update(&host, &id, changes, Action::PartialUpdate)
            .await
            .unwrap();
        assert_eq!(updated.listing.price_per_night, 150);
        assert_eq!(updated.listing.title, "Cabin");

        service.destroy(&host, &id).await.unwrap();
        assert!(matches!(
            service.retrieve(&id).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn update_of_missing_listing_is_not_found() {
        let repos = repos().await;
        let host = caller(&repos, "host").await;
        let service = ListingService::new(repos);

        let err = service
            .update(&host, "missing", cabin().into(), Action::Update)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn reads_nest_bookings_and_reviews_of_each_listing() {
        use crate::application::{BookingService, ReviewService};
        use crate::domain::{BookingDraft, ReviewDraft};

        let repos = repos().await;
        let host = caller(&repos, "host").await;
        let guest = caller(&repos, "guest").await;
        let service = ListingService::new(repos.clone());
        let cabin_id = service.create(&host, cabin()).await.unwrap().listing.id;
        let empty_id = service.create(&host, cabin()).await.unwrap().listing.id;

        BookingService::new(repos.clone())
            .create(
                &guest,
                BookingDraft {
                    listing_id: cabin_id.clone(),
                    check_in: chrono::NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                    check_out: chrono::NaiveDate::from_ymd_opt(2025, 9, 3).unwrap(),
                },
            )
            .await
            .unwrap();
        ReviewService::new(repos.clone())
            .create(
                &guest,
                ReviewDraft {
                    listing_id: cabin_id.clone(),
                    rating: 5,
                    comment: "Great".to_string(),
                },
            )
            .await
            .unwrap();

        let detail = service.retrieve(&cabin_id).await.unwrap();
        assert_eq!(detail.bookings.len(), 1);
        assert_eq!(detail.bookings[0].guest.username, "guest");
        assert_eq!(detail.reviews.len(), 1);
        assert_eq!(detail.reviews[0].review.rating, 5);

        let all = service.list().await.unwrap();
        let empty = all.iter().find(|d| d.listing.id == empty_id).unwrap();
        assert!(empty.bookings.is_empty());
        assert!(empty.reviews.is_empty());
        let full = all.iter().find(|d| d.listing.id == cabin_id).unwrap();
        assert_eq!(full.reviews.len(), 1);
    }
}
