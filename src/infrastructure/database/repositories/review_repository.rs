//! SeaORM implementation of ReviewRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::listing_repository::load_listing_refs;
use super::user_repository::model_to_summary;
use super::{insert_err, update_err};
use crate::domain::review::{Review, ReviewRepository, ReviewView};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{review, user};

pub struct SeaOrmReviewRepository {
    db: DatabaseConnection,
}

impl SeaOrmReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn assemble(
        &self,
        rows: Vec<(review::Model, Option<user::Model>)>,
    ) -> DomainResult<Vec<ReviewView>> {
        let refs = load_listing_refs(&self.db, rows.iter().map(|(r, _)| r.listing_id.clone())).await?;

        rows.into_iter()
            .map(|(m, author)| {
                let author = author
                    .ok_or_else(|| DomainError::Database(format!("Review {} has no author", m.id)))?;
                let listing = refs.get(&m.listing_id).cloned().ok_or_else(|| {
                    DomainError::Database(format!("Review {} has no listing", m.id))
                })?;
                Ok(ReviewView {
                    review: model_to_domain(m),
                    user: model_to_summary(author),
                    listing,
                })
            })
            .collect()
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: review::Model) -> Review {
    Review {
        id: m.id,
        listing_id: m.listing_id,
        user_id: m.user_id,
        rating: m.rating,
        comment: m.comment,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

fn domain_to_active(r: Review) -> review::ActiveModel {
    review::ActiveModel {
        id: Set(r.id),
        listing_id: Set(r.listing_id),
        user_id: Set(r.user_id),
        rating: Set(r.rating),
        comment: Set(r.comment),
        created_at: Set(r.created_at),
        updated_at: Set(r.updated_at),
    }
}

// ── ReviewRepository impl ───────────────────────────────────────

#[async_trait]
impl ReviewRepository for SeaOrmReviewRepository {
    async fn save(&self, r: Review) -> DomainResult<()> {
        debug!(
            "Saving review: {} (listing {}, user {}, rating {})",
            r.id, r.listing_id, r.user_id, r.rating
        );
        domain_to_active(r)
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, "You have already reviewed this listing"))?;
        Ok(())
    }

    async fn update(&self, r: Review) -> DomainResult<()> {
        debug!("Updating review: {}", r.id);
        let id = r.id.clone();
        domain_to_active(r)
            .update(&self.db)
            .await
            .map_err(|e| update_err(e, "Review", &id))?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        debug!("Deleting review: {}", id);
        let result = review::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<ReviewView>> {
        let row = review::Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(&self.db)
            .await?;
        match row {
            Some(row) => Ok(self.assemble(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> DomainResult<Vec<ReviewView>> {
        let rows = review::Entity::find()
            .find_also_related(user::Entity)
            .order_by_desc(review::Column::CreatedAt)
            .all(&self.db)
            .await?;
        self.assemble(rows).await
    }

    async fn find_by_listings(&self, listing_ids: &[String]) -> DomainResult<Vec<ReviewView>> {
        if listing_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = review::Entity::find()
            .filter(review::Column::ListingId.is_in(listing_ids.iter().cloned()))
            .find_also_related(user::Entity)
            .order_by_asc(review::Column::CreatedAt)
            .all(&self.db)
            .await?;
        self.assemble(rows).await
    }

    async fn exists_for(&self, listing_id: &str, user_id: &str) -> DomainResult<bool> {
        let count = review::Entity::find()
            .filter(review::Column::ListingId.eq(listing_id))
            .filter(review::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::{Listing, ListingDraft};
    use crate::domain::review::ReviewDraft;
    use crate::domain::user::User;
    use crate::domain::RepositoryProvider;
    use crate::infrastructure::database::test_connection;
    use crate::infrastructure::SeaOrmRepositoryProvider;

    async fn seeded() -> (SeaOrmRepositoryProvider, User, Listing) {
        let repos = SeaOrmRepositoryProvider::new(test_connection().await);
        let host = User::new("host", "host@example.com", "x");
        let listing = Listing::new(
            &host.id,
            ListingDraft {
                title: "Cabin".to_string(),
                description: String::new(),
                location: "Lake".to_string(),
                price_per_night: 120,
            },
        );
        repos.users().create(host.clone()).await.unwrap();
        repos.listings().save(listing.clone()).await.unwrap();
        (repos, host, listing)
    }

    fn review_of(listing: &Listing, user: &User, rating: i32) -> Review {
        Review::new(
            &user.id,
            ReviewDraft {
                listing_id: listing.id.clone(),
                rating,
                comment: "Nice".to_string(),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn second_review_by_same_user_conflicts() {
        let (repos, host, listing) = seeded().await;
        let guest = User::new("guest", "guest@example.com", "x");
        repos.users().create(guest.clone()).await.unwrap();

        repos.reviews().save(review_of(&listing, &guest, 5)).await.unwrap();
        assert!(repos.reviews().exists_for(&listing.id, &guest.id).await.unwrap());
        assert!(!repos.reviews().exists_for(&listing.id, &host.id).await.unwrap());

        let err = repos
            .reviews()
            .save(review_of(&listing, &guest, 3))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn views_carry_author_and_listing_host() {
        let (repos, host, listing) = seeded().await;
        let review = review_of(&listing, &host, 4);
        repos.reviews().save(review.clone()).await.unwrap();

        let view = repos.reviews().find_by_id(&review.id).await.unwrap().unwrap();
        assert_eq!(view.user.username, "host");
        assert_eq!(view.listing.title, "Cabin");
        assert_eq!(view.listing.host.id, host.id);
        assert_eq!(repos.reviews().find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn deleting_listing_cascades_to_reviews() {
        let (repos, host, listing) = seeded().await;
        let review = review_of(&listing, &host, 2);
        repos.reviews().save(review.clone()).await.unwrap();

        assert!(repos.listings().delete(&listing.id).await.unwrap());
        assert!(repos.reviews().find_by_id(&review.id).await.unwrap().is_none());
        assert!(!repos.listings().delete(&listing.id).await.unwrap());
    }
}
