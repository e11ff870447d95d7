use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;
use validator::Validate;

use super::{Catalog, expect_deleted};
use crate::{
    entities::{movie, rating, rating_star},
    error::{CatalogError, CatalogResult},
    models::{NewRating, RatingWithRelations},
};

impl Catalog {
    pub async fn create_star(&self, value: i16) -> CatalogResult<rating_star::Model> {
        let model = rating_star::ActiveModel { value: Set(value), ..Default::default() }
            .insert(&self.db)
            .await?;
        debug!(id = model.id, value, "created rating star");
        Ok(model)
    }

    pub async fn star(&self, id: i32) -> CatalogResult<rating_star::Model> {
        rating_star::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("rating star", id))
    }

    /// The lookup table, lowest value first.
    pub async fn stars(&self) -> CatalogResult<Vec<rating_star::Model>> {
        Ok(rating_star::Entity::find()
            .order_by_asc(rating_star::Column::Value)
            .order_by_asc(rating_star::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn update_star(&self, id: i32, value: i16) -> CatalogResult<rating_star::Model> {
        let mut active = self.star(id).await?.into_active_model();
        active.value = Set(value);
        let model = active.update(&self.db).await?;
        debug!(id, value, "updated rating star");
        Ok(model)
    }

    /// Inserts whichever of `values` are not in the lookup table yet and
    /// returns the full table.
    pub async fn ensure_stars(&self, values: &[i16]) -> CatalogResult<Vec<rating_star::Model>> {
        let existing = rating_star::Entity::find()
            .filter(rating_star::Column::Value.is_in(values.iter().copied()))
            .all(&self.db)
            .await?;

        let mut seeded = Vec::new();
        for &value in values {
            if seeded.contains(&value) || existing.iter().any(|s| s.value == value) {
                continue;
            }
            self.create_star(value).await?;
            seeded.push(value);
        }

        if !seeded.is_empty() {
            debug!(?seeded, "seeded rating stars");
        }
        self.stars().await
    }

    /// Every rating that used this star is removed with it.
    pub async fn delete_star(&self, id: i32) -> CatalogResult<()> {
        let res = rating_star::Entity::delete_by_id(id).exec(&self.db).await?;
        expect_deleted(res, "rating star", id)?;
        debug!(id, "deleted rating star");
        Ok(())
    }

    pub async fn create_rating(&self, new: NewRating) -> CatalogResult<rating::Model> {
        new.validate()?;
        let model = rating::ActiveModel {
            ip: Set(new.ip),
            star_id: Set(new.star_id),
            movie_id: Set(new.movie_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!(id = model.id, movie_id = model.movie_id, star_id = model.star_id, "created rating");
        Ok(model)
    }

    pub async fn rating(&self, id: i32) -> CatalogResult<rating::Model> {
        rating::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("rating", id))
    }

    /// Repoints a rating; a missing star or movie is a constraint violation.
    pub async fn update_rating(&self, id: i32, new: NewRating) -> CatalogResult<rating::Model> {
        new.validate()?;
        let mut active = self.rating(id).await?.into_active_model();
        active.ip = Set(new.ip);
        active.star_id = Set(new.star_id);
        active.movie_id = Set(new.movie_id);
        let model = active.update(&self.db).await?;
        debug!(id, star_id = model.star_id, movie_id = model.movie_id, "updated rating");
        Ok(model)
    }

    pub async fn rating_with_relations(&self, id: i32) -> CatalogResult<RatingWithRelations> {
        let rating = self.rating(id).await?;
        let star = rating
            .find_related(rating_star::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("rating star", rating.star_id))?;
        let movie = rating
            .find_related(movie::Entity)
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("movie", rating.movie_id))?;

        Ok(RatingWithRelations { id: rating.id, ip: rating.ip, star, movie })
    }

    /// `"{star} - {movie title}"`, as shown in admin listings.
    pub async fn rating_label(&self, id: i32) -> CatalogResult<String> {
        let rating = self.rating_with_relations(id).await?;
        Ok(format!("{} - {}", rating.star, rating.movie))
    }

    pub async fn delete_rating(&self, id: i32) -> CatalogResult<()> {
        let res = rating::Entity::delete_by_id(id).exec(&self.db).await?;
        expect_deleted(res, "rating", id)?;
        debug!(id, "deleted rating");
        Ok(())
    }
}
