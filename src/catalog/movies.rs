use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;
use validator::Validate;

use super::{Catalog, dedup_ids, expect_deleted};
use crate::{
    entities::{
        actor, category, genre, movie, movie_actor, movie_director, movie_genre, movie_shot,
        rating, review,
    },
    error::{CatalogError, CatalogResult},
    models::{MovieDetail, NewMovie},
};

impl Catalog {
    /// Inserts the movie and its director, cast and genre links in one
    /// transaction.
    pub async fn create_movie(&self, new: NewMovie) -> CatalogResult<movie::Model> {
        new.validate()?;
        let premiere = new.world_premiere.unwrap_or_else(today);

        let txn = self.db.begin().await?;
        let model = movie::ActiveModel {
            title: Set(new.title.clone()),
            tagline: Set(new.tagline.clone()),
            description: Set(new.description.clone()),
            poster: Set(new.poster.clone()),
            year: Set(new.year),
            country: Set(new.country.clone()),
            world_premiere: Set(premiere.to_string()),
            budget: Set(new.budget),
            feels_in_usa: Set(new.feels_in_usa),
            fees_in_the_world: Set(new.fees_in_the_world),
            category_id: Set(new.category_id),
            url: Set(new.url.clone()),
            draft: Set(new.draft),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        replace_links(&txn, model.id, &new).await?;
        txn.commit().await?;

        debug!(id = model.id, url = %model.url, draft = model.draft, "created movie");
        Ok(model)
    }

    pub async fn movie(&self, id: i32) -> CatalogResult<movie::Model> {
        movie::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("movie", id))
    }

    /// Looks a movie up by slug regardless of its draft flag.
    pub async fn movie_by_url(&self, url: &str) -> CatalogResult<movie::Model> {
        movie::Entity::find()
            .filter(movie::Column::Url.eq(url))
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("movie", url))
    }

    pub async fn movies(&self) -> CatalogResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().order_by_asc(movie::Column::Id).all(&self.db).await?)
    }

    /// Replaces every field and all three relation sets. A missing
    /// `world_premiere` keeps the stored date.
    pub async fn update_movie(&self, id: i32, new: NewMovie) -> CatalogResult<movie::Model> {
        new.validate()?;
        let current = self.movie(id).await?;
        let premiere = new
            .world_premiere
            .map(|d| d.to_string())
            .unwrap_or_else(|| current.world_premiere.clone());

        let txn = self.db.begin().await?;
        let mut active = current.into_active_model();
        active.title = Set(new.title.clone());
        active.tagline = Set(new.tagline.clone());
        active.description = Set(new.description.clone());
        active.poster = Set(new.poster.clone());
        active.year = Set(new.year);
        active.country = Set(new.country.clone());
        active.world_premiere = Set(premiere);
        active.budget = Set(new.budget);
        active.feels_in_usa = Set(new.feels_in_usa);
        active.fees_in_the_world = Set(new.fees_in_the_world);
        active.category_id = Set(new.category_id);
        active.url = Set(new.url.clone());
        active.draft = Set(new.draft);
        let model = active.update(&txn).await?;
        replace_links(&txn, id, &new).await?;
        txn.commit().await?;

        debug!(id, url = %model.url, "updated movie");
        Ok(model)
    }

    pub async fn set_draft(&self, id: i32, draft: bool) -> CatalogResult<movie::Model> {
        let mut active = self.movie(id).await?.into_active_model();
        active.draft = Set(draft);
        let model = active.update(&self.db).await?;
        debug!(id, draft, "changed movie visibility");
        Ok(model)
    }

    /// Shots, ratings, reviews and credit links go with the movie.
    pub async fn delete_movie(&self, id: i32) -> CatalogResult<()> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        expect_deleted(res, "movie", id)?;
        debug!(id, "deleted movie");
        Ok(())
    }

    pub async fn published_movies(&self) -> CatalogResult<Vec<movie::Model>> {
        Ok(movie::Entity::find()
            .filter(movie::Column::Draft.eq(false))
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Drafts are reported as missing.
    pub async fn published_movie_by_url(&self, url: &str) -> CatalogResult<movie::Model> {
        movie::Entity::find()
            .filter(movie::Column::Url.eq(url))
            .filter(movie::Column::Draft.eq(false))
            .one(&self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found("movie", url))
    }

    pub async fn published_movies_in_category(
        &self,
        category_url: &str,
    ) -> CatalogResult<Vec<movie::Model>> {
        let category = self.category_by_url(category_url).await?;
        Ok(category
            .find_related(movie::Entity)
            .filter(movie::Column::Draft.eq(false))
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn published_movies_in_genre(
        &self,
        genre_url: &str,
    ) -> CatalogResult<Vec<movie::Model>> {
        let genre = self.genre_by_url(genre_url).await?;
        Ok(genre
            .find_related(movie::Entity)
            .filter(movie::Column::Draft.eq(false))
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn directors(&self, movie_id: i32) -> CatalogResult<Vec<actor::Model>> {
        let movie = self.movie(movie_id).await?;
        Ok(movie
            .find_linked(movie::Directors)
            .order_by_asc(actor::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn cast(&self, movie_id: i32) -> CatalogResult<Vec<actor::Model>> {
        let movie = self.movie(movie_id).await?;
        Ok(movie.find_linked(movie::Cast).order_by_asc(actor::Column::Id).all(&self.db).await?)
    }

    pub async fn movie_genres(&self, movie_id: i32) -> CatalogResult<Vec<genre::Model>> {
        let movie = self.movie(movie_id).await?;
        Ok(movie.find_related(genre::Entity).order_by_asc(genre::Column::Id).all(&self.db).await?)
    }

    pub async fn movie_category(&self, movie_id: i32) -> CatalogResult<Option<category::Model>> {
        let movie = self.movie(movie_id).await?;
        Ok(movie.find_related(category::Entity).one(&self.db).await?)
    }

    pub async fn shots(&self, movie_id: i32) -> CatalogResult<Vec<movie_shot::Model>> {
        let movie = self.movie(movie_id).await?;
        Ok(movie
            .find_related(movie_shot::Entity)
            .order_by_asc(movie_shot::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn ratings(&self, movie_id: i32) -> CatalogResult<Vec<rating::Model>> {
        let movie = self.movie(movie_id).await?;
        Ok(movie
            .find_related(rating::Entity)
            .order_by_asc(rating::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Every review of the movie, replies included, oldest first.
    pub async fn reviews(&self, movie_id: i32) -> CatalogResult<Vec<review::Model>> {
        let movie = self.movie(movie_id).await?;
        Ok(movie
            .find_related(review::Entity)
            .order_by_asc(review::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn movie_detail(&self, movie_id: i32) -> CatalogResult<MovieDetail> {
        let movie = self.movie(movie_id).await?;
        let directors = movie
            .find_linked(movie::Directors)
            .order_by_asc(actor::Column::Id)
            .all(&self.db)
            .await?;
        let actors =
            movie.find_linked(movie::Cast).order_by_asc(actor::Column::Id).all(&self.db).await?;
        let genres =
            movie.find_related(genre::Entity).order_by_asc(genre::Column::Id).all(&self.db).await?;

        Ok(MovieDetail { movie, directors, actors, genres })
    }
}

async fn replace_links<C: ConnectionTrait>(
    conn: &C,
    movie_id: i32,
    new: &NewMovie,
) -> CatalogResult<()> {
    movie_director::Entity::delete_many()
        .filter(movie_director::Column::MovieId.eq(movie_id))
        .exec(conn)
        .await?;
    movie_actor::Entity::delete_many()
        .filter(movie_actor::Column::MovieId.eq(movie_id))
        .exec(conn)
        .await?;
    movie_genre::Entity::delete_many()
        .filter(movie_genre::Column::MovieId.eq(movie_id))
        .exec(conn)
        .await?;

    let directors = dedup_ids(&new.director_ids)
        .into_iter()
        .map(|actor_id| movie_director::ActiveModel {
            movie_id: Set(movie_id),
            actor_id: Set(actor_id),
        })
        .collect::<Vec<_>>();
    if !directors.is_empty() {
        movie_director::Entity::insert_many(directors).exec_without_returning(conn).await?;
    }

    let cast = dedup_ids(&new.actor_ids)
        .into_iter()
        .map(|actor_id| movie_actor::ActiveModel { movie_id: Set(movie_id), actor_id: Set(actor_id) })
        .collect::<Vec<_>>();
    if !cast.is_empty() {
        movie_actor::Entity::insert_many(cast).exec_without_returning(conn).await?;
    }

    let genres = dedup_ids(&new.genre_ids)
        .into_iter()
        .map(|genre_id| movie_genre::ActiveModel { movie_id: Set(movie_id), genre_id: Set(genre_id) })
        .collect::<Vec<_>>();
    if !genres.is_empty() {
        movie_genre::Entity::insert_many(genres).exec_without_returning(conn).await?;
    }

    Ok(())
}

fn today() -> jiff::civil::Date {
    jiff::Zoned::now().into()
}
