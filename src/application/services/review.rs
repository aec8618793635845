//! Review use cases

use std::sync::Arc;

use tracing::info;

use super::referenced_listing;
use crate::domain::{
    check_object_permission, Action, Caller, DomainError, DomainResult, RepositoryProvider, Review,
    ReviewChanges, ReviewDraft, ReviewView,
};

/// Service for review operations. Mutations are author-only.
pub struct ReviewService {
    repos: Arc<dyn RepositoryProvider>,
}

impl ReviewService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list(&self) -> DomainResult<Vec<ReviewView>> {
        self.repos.reviews().find_all().await
    }

    pub async fn retrieve(&self, id: &str) -> DomainResult<ReviewView> {
        self.repos
            .reviews()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Review", id))
    }

    /// Review a listing as `caller`. One review per listing and user.
    pub async fn create(&self, caller: &Caller, draft: ReviewDraft) -> DomainResult<ReviewView> {
        let review = Review::new(&caller.user_id, draft)?;
        let listing = referenced_listing(self.repos.as_ref(), &review.listing_id).await?;

        if self
            .repos
            .reviews()
            .exists_for(&review.listing_id, &caller.user_id)
            .await?
        {
            return Err(DomainError::Conflict(
                "You have already reviewed this listing".into(),
            ));
        }
        self.repos.reviews().save(review.clone()).await?;

        info!(
            review_id = %review.id,
            listing_id = %review.listing_id,
            author = %caller.username,
            rating = review.rating,
            "Review created"
        );
        Ok(ReviewView {
            review,
            user: caller.summary(),
            listing,
        })
    }

    pub async fn update(
        &self,
        caller: &Caller,
        id: &str,
        changes: ReviewChanges,
        action: Action,
    ) -> DomainResult<ReviewView> {
        let mut view = self.retrieve(id).await?;
        check_object_permission(action, &view.review, Some(caller))?;

        view.review.apply(changes)?;
        self.repos.reviews().update(view.review.clone()).await?;

        info!(review_id = %id, rating = view.review.rating, "Review updated");
        Ok(view)
    }

    pub async fn destroy(&self, caller: &Caller, id: &str) -> DomainResult<()> {
        let view = self.retrieve(id).await?;
        check_object_permission(Action::Destroy, &view.review, Some(caller))?;

        if !self.repos.reviews().delete(id).await? {
            return Err(DomainError::not_found("Review", id));
        }
        info!(review_id = %id, "Review deleted");
        Ok(())
    }
}
