use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;
use validator::Validate;

use super::{Catalog, expect_deleted};
use crate::{
    entities::{actor, movie},
    error::{CatalogError, CatalogResult},
    models::NewActor,
};

impl Catalog {
    pub async fn create_actor(&self, new: NewActor) -> CatalogResult<actor::Model> {
        new.validate()?;
        let model = actor::ActiveModel {
            name: Set(new.name),
            age: Set(new.age),
            description: Set(new.description),
            image: Set(new.image),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!(id = model.id, name = %model.name, "created actor");
        Ok(model)
    }

    pub async fn actor(&self, id: i32) -> CatalogResult<actor::Model> {
        actor::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("actor", id))
    }

    pub async fn actors(&self) -> CatalogResult<Vec<actor::Model>> {
        Ok(actor::Entity::find().order_by_asc(actor::Column::Id).all(&self.db).await?)
    }

    pub async fn update_actor(&self, id: i32, new: NewActor) -> CatalogResult<actor::Model> {
        new.validate()?;
        let mut active = self.actor(id).await?.into_active_model();
        active.name = Set(new.name);
        active.age = Set(new.age);
        active.description = Set(new.description);
        active.image = Set(new.image);
        Ok(active.update(&self.db).await?)
    }

    /// Removing a person drops their director and cast credits; the movies
    /// themselves stay.
    pub async fn delete_actor(&self, id: i32) -> CatalogResult<()> {
        let res = actor::Entity::delete_by_id(id).exec(&self.db).await?;
        expect_deleted(res, "actor", id)?;
        debug!(id, "deleted actor");
        Ok(())
    }

    pub async fn films_directed(&self, actor_id: i32) -> CatalogResult<Vec<movie::Model>> {
        let person = self.actor(actor_id).await?;
        Ok(person
            .find_linked(actor::FilmDirector)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn films_acted(&self, actor_id: i32) -> CatalogResult<Vec<movie::Model>> {
        let person = self.actor(actor_id).await?;
        Ok(person
            .find_linked(actor::FilmActors)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Published movies this person directed or appears in.
    pub async fn published_filmography(&self, actor_id: i32) -> CatalogResult<Vec<movie::Model>> {
        let person = self.actor(actor_id).await?;
        let mut films = person
            .find_linked(actor::FilmDirector)
            .filter(movie::Column::Draft.eq(false))
            .all(&self.db)
            .await?;
        let acted = person
            .find_linked(actor::FilmActors)
            .filter(movie::Column::Draft.eq(false))
            .all(&self.db)
            .await?;

        for film in acted {
            if !films.iter().any(|f| f.id == film.id) {
                films.push(film);
            }
        }
        films.sort_by_key(|f| f.id);
        Ok(films)
    }
}
