use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{actor, genre, movie, rating_star};

pub const DEFAULT_MOVIE_YEAR: i32 = 2021;

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewCategory {
    #[validate(custom(function = "crate::validate::not_blank"), length(max = 150))]
    pub name: String,
    pub description: String,
    #[validate(custom(function = "crate::validate::slug"), length(max = 150))]
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewGenre {
    #[validate(custom(function = "crate::validate::not_blank"), length(max = 100))]
    pub name: String,
    pub description: String,
    #[validate(custom(function = "crate::validate::slug"), length(max = 100))]
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewActor {
    #[validate(custom(function = "crate::validate::not_blank"), length(max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub age: i32,
    pub description: String,
    #[validate(length(max = 100))]
    pub image: String,
}

/// Fields and relation sets of a movie. Used for both create and full update.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewMovie {
    #[validate(custom(function = "crate::validate::not_blank"), length(max = 100))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub tagline: String,
    pub description: String,
    #[validate(length(max = 100))]
    pub poster: String,
    #[serde(default = "default_year")]
    #[validate(range(min = 0))]
    pub year: i32,
    #[validate(length(max = 100))]
    pub country: String,
    /// Defaults to today when absent.
    #[serde(default)]
    pub world_premiere: Option<Date>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub budget: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub feels_in_usa: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub fees_in_the_world: i64,
    #[serde(default)]
    pub category_id: Option<i32>,
    #[validate(custom(function = "crate::validate::slug"), length(max = 150))]
    pub url: String,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub director_ids: Vec<i32>,
    #[serde(default)]
    pub actor_ids: Vec<i32>,
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}

impl NewMovie {
    /// A movie with every defaulted field at its default.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tagline: String::new(),
            description: String::new(),
            poster: String::new(),
            year: DEFAULT_MOVIE_YEAR,
            country: String::new(),
            world_premiere: None,
            budget: 0,
            feels_in_usa: 0,
            fees_in_the_world: 0,
            category_id: None,
            url: url.into(),
            draft: false,
            director_ids: Vec::new(),
            actor_ids: Vec::new(),
            genre_ids: Vec::new(),
        }
    }
}

fn default_year() -> i32 {
    DEFAULT_MOVIE_YEAR
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewMovieShot {
    #[validate(custom(function = "crate::validate::not_blank"), length(max = 100))]
    pub title: String,
    pub description: String,
    #[validate(custom(function = "crate::validate::not_blank"), length(max = 100))]
    pub image: String,
    pub movie_id: i32,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewRating {
    #[validate(custom(function = "crate::validate::not_blank"), length(max = 10))]
    pub ip: String,
    pub star_id: i32,
    pub movie_id: i32,
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewReview {
    #[validate(email, length(max = 254))]
    pub email: String,
    #[validate(custom(function = "crate::validate::not_blank"), length(max = 100))]
    pub name: String,
    #[validate(custom(function = "crate::validate::not_blank"), length(max = 2000))]
    pub text: String,
    #[serde(default)]
    pub parent_id: Option<i32>,
    pub movie_id: i32,
}

/// A movie together with its ordered credit and genre collections.
#[derive(Clone, Debug, Serialize)]
pub struct MovieDetail {
    pub movie: movie::Model,
    pub directors: Vec<actor::Model>,
    pub actors: Vec<actor::Model>,
    pub genres: Vec<genre::Model>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RatingWithRelations {
    pub id: i32,
    pub ip: String,
    pub star: rating_star::Model,
    pub movie: movie::Model,
}
