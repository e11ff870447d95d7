use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};
use tracing::debug;
use validator::Validate;

use super::{Catalog, expect_deleted};
use crate::{
    entities::movie_shot,
    error::{CatalogError, CatalogResult},
    models::NewMovieShot,
};

impl Catalog {
    pub async fn create_shot(&self, new: NewMovieShot) -> CatalogResult<movie_shot::Model> {
        new.validate()?;
        let model = movie_shot::ActiveModel {
            title: Set(new.title),
            description: Set(new.description),
            image: Set(new.image),
            movie_id: Set(new.movie_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!(id = model.id, movie_id = model.movie_id, "created movie shot");
        Ok(model)
    }

    pub async fn shot(&self, id: i32) -> CatalogResult<movie_shot::Model> {
        movie_shot::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("movie shot", id))
    }

    pub async fn update_shot(&self, id: i32, new: NewMovieShot) -> CatalogResult<movie_shot::Model> {
        new.validate()?;
        let mut active = self.shot(id).await?.into_active_model();
        active.title = Set(new.title);
        active.description = Set(new.description);
        active.image = Set(new.image);
        active.movie_id = Set(new.movie_id);
        Ok(active.update(&self.db).await?)
    }

    pub async fn delete_shot(&self, id: i32) -> CatalogResult<()> {
        let res = movie_shot::Entity::delete_by_id(id).exec(&self.db).await?;
        expect_deleted(res, "movie shot", id)?;
        debug!(id, "deleted movie shot");
        Ok(())
    }
}
