use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;
use validator::Validate;

use super::{Catalog, expect_deleted};
use crate::{
    entities::{movie, review},
    error::{CatalogError, CatalogResult},
    models::NewReview,
};

impl Catalog {
    /// A reply must name an existing parent on the same movie.
    pub async fn create_review(&self, new: NewReview) -> CatalogResult<review::Model> {
        new.validate()?;
        if let Some(parent_id) = new.parent_id {
            self.check_parent(None, parent_id, new.movie_id).await?;
        }

        let model = review::ActiveModel {
            email: Set(new.email),
            name: Set(new.name),
            text: Set(new.text),
            parent_id: Set(new.parent_id),
            movie_id: Set(new.movie_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!(id = model.id, movie_id = model.movie_id, parent_id = ?model.parent_id, "created review");
        Ok(model)
    }

    pub async fn review(&self, id: i32) -> CatalogResult<review::Model> {
        review::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("review", id))
    }

    /// A review with replies stays on its movie.
    pub async fn update_review(&self, id: i32, new: NewReview) -> CatalogResult<review::Model> {
        new.validate()?;
        let current = self.review(id).await?;
        if let Some(parent_id) = new.parent_id {
            self.check_parent(Some(id), parent_id, new.movie_id).await?;
        }
        if new.movie_id != current.movie_id {
            let replies = review::Entity::find()
                .filter(review::Column::ParentId.eq(id))
                .count(&self.db)
                .await?;
            if replies > 0 {
                return Err(CatalogError::constraint(format!(
                    "review {id} has {replies} replies and cannot move to movie {}",
                    new.movie_id
                )));
            }
        }

        let mut active = current.into_active_model();
        active.email = Set(new.email);
        active.name = Set(new.name);
        active.text = Set(new.text);
        active.parent_id = Set(new.parent_id);
        active.movie_id = Set(new.movie_id);
        Ok(active.update(&self.db).await?)
    }

    /// Replies to the deleted review are kept and become top level.
    pub async fn delete_review(&self, id: i32) -> CatalogResult<()> {
        let res = review::Entity::delete_by_id(id).exec(&self.db).await?;
        expect_deleted(res, "review", id)?;
        debug!(id, "deleted review");
        Ok(())
    }

    pub async fn review_parent(&self, id: i32) -> CatalogResult<Option<review::Model>> {
        let Some(parent_id) = self.review(id).await?.parent_id else {
            return Ok(None);
        };
        Ok(review::Entity::find_by_id(parent_id).one(&self.db).await?)
    }

    /// Direct replies, oldest first.
    pub async fn review_children(&self, id: i32) -> CatalogResult<Vec<review::Model>> {
        self.review(id).await?;
        Ok(review::Entity::find()
            .filter(review::Column::ParentId.eq(id))
            .order_by_asc(review::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// `"{name} - {movie title}"`, as shown in admin listings.
    pub async fn review_label(&self, id: i32) -> CatalogResult<String> {
        let review = self.review(id).await?;
        let movie = movie::Entity::find_by_id(review.movie_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("movie", review.movie_id))?;
        Ok(format!("{} - {}", review.name, movie))
    }

    /// Walks up from `parent_id`, rejecting a missing parent, a parent on
    /// another movie, and (for updates) a chain that leads back to `child`.
    async fn check_parent(
        &self,
        child: Option<i32>,
        parent_id: i32,
        movie_id: i32,
    ) -> CatalogResult<()> {
        let parent = review::Entity::find_by_id(parent_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                CatalogError::constraint(format!("parent review {parent_id} does not exist"))
            })?;

        if parent.movie_id != movie_id {
            return Err(CatalogError::constraint(format!(
                "parent review {parent_id} belongs to movie {}, not {movie_id}",
                parent.movie_id
            )));
        }

        let Some(child) = child else {
            return Ok(());
        };
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node.id == child {
                return Err(CatalogError::constraint(format!(
                    "review {child} cannot reply to its own thread"
                )));
            }
            cursor = match node.parent_id {
                Some(up) => review::Entity::find_by_id(up).one(&self.db).await?,
                None => None,
            };
        }
        Ok(())
    }
}
