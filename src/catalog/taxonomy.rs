use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};
use tracing::debug;
use validator::Validate;

use super::{Catalog, expect_deleted};
use crate::{
    entities::{category, genre},
    error::{CatalogError, CatalogResult},
    models::{NewCategory, NewGenre},
};

impl Catalog {
    pub async fn create_category(&self, new: NewCategory) -> CatalogResult<category::Model> {
        new.validate()?;
        let model = category::ActiveModel {
            name: Set(new.name),
            description: Set(new.description),
            url: Set(new.url),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!(id = model.id, url = %model.url, "created category");
        Ok(model)
    }

    pub async fn category(&self, id: i32) -> CatalogResult<category::Model> {
        category::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("category", id))
    }

    pub async fn category_by_url(&self, url: &str) -> CatalogResult<category::Model> {
        category::Entity::find()
            .filter(category::Column::Url.eq(url))
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("category", url))
    }

    pub async fn categories(&self) -> CatalogResult<Vec<category::Model>> {
        Ok(category::Entity::find().order_by_asc(category::Column::Id).all(&self.db).await?)
    }

    pub async fn update_category(
        &self,
        id: i32,
        new: NewCategory,
    ) -> CatalogResult<category::Model> {
        new.validate()?;
        let mut active = self.category(id).await?.into_active_model();
        active.name = Set(new.name);
        active.description = Set(new.description);
        active.url = Set(new.url);
        Ok(active.update(&self.db).await?)
    }

    /// Removes the category and, through the foreign key, every movie filed
    /// under it.
    pub async fn delete_category(&self, id: i32) -> CatalogResult<()> {
        let res = category::Entity::delete_by_id(id).exec(&self.db).await?;
        expect_deleted(res, "category", id)?;
        debug!(id, "deleted category");
        Ok(())
    }

    pub async fn create_genre(&self, new: NewGenre) -> CatalogResult<genre::Model> {
        new.validate()?;
        let model = genre::ActiveModel {
            name: Set(new.name),
            description: Set(new.description),
            url: Set(new.url),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!(id = model.id, url = %model.url, "created genre");
        Ok(model)
    }

    pub async fn genre(&self, id: i32) -> CatalogResult<genre::Model> {
        genre::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("genre", id))
    }

    pub async fn genre_by_url(&self, url: &str) -> CatalogResult<genre::Model> {
        genre::Entity::find()
            .filter(genre::Column::Url.eq(url))
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("genre", url))
    }

    pub async fn genres(&self) -> CatalogResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().order_by_asc(genre::Column::Id).all(&self.db).await?)
    }

    pub async fn update_genre(&self, id: i32, new: NewGenre) -> CatalogResult<genre::Model> {
        new.validate()?;
        let mut active = self.genre(id).await?.into_active_model();
        active.name = Set(new.name);
        active.description = Set(new.description);
        active.url = Set(new.url);
        Ok(active.update(&self.db).await?)
    }

    pub async fn delete_genre(&self, id: i32) -> CatalogResult<()> {
        let res = genre::Entity::delete_by_id(id).exec(&self.db).await?;
        expect_deleted(res, "genre", id)?;
        debug!(id, "deleted genre");
        Ok(())
    }
}
