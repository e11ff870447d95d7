pub mod actor;
pub mod category;
pub mod genre;
pub mod movie;
pub mod movie_actor;
pub mod movie_director;
pub mod movie_genre;
pub mod movie_shot;
pub mod rating;
pub mod rating_star;
pub mod review;

/// Admin-facing names for an entity.
pub trait Labelled {
    const LABEL: &'static str;
    const LABEL_PLURAL: &'static str;
}

macro_rules! labelled {
    ($($entity:path => $one:literal, $many:literal;)*) => {
        $(
            impl Labelled for $entity {
                const LABEL: &'static str = $one;
                const LABEL_PLURAL: &'static str = $many;
            }
        )*
    };
}

labelled! {
    category::Entity => "Category", "Categories";
    genre::Entity => "Genre", "Genres";
    actor::Entity => "Actor and Director", "Actors and Directors";
    movie::Entity => "Movie", "Movies";
    movie_shot::Entity => "Movie shot", "Movie shots";
    rating_star::Entity => "Rating Star", "Rating Stars";
    rating::Entity => "Rating", "Ratings";
    review::Entity => "Review", "Reviews";
}
