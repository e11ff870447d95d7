use sea_orm::EntityTrait;
use screenz::{
    Catalog, CatalogError,
    entities::{Labelled, actor, movie, rating, review},
    models::{NewActor, NewCategory, NewGenre, NewMovie, NewMovieShot, NewRating, NewReview},
};

async fn catalog() -> Catalog {
    Catalog::connect("sqlite::memory:").await.expect("in-memory catalogue")
}

fn category(url: &str) -> NewCategory {
    NewCategory { name: format!("Category {url}"), description: String::new(), url: url.into() }
}

fn genre(url: &str) -> NewGenre {
    NewGenre { name: format!("Genre {url}"), description: String::new(), url: url.into() }
}

fn person(name: &str) -> NewActor {
    NewActor {
        name: name.into(),
        age: 40,
        description: String::new(),
        image: format!("{}{name}.jpg", actor::UPLOAD_TO),
    }
}

fn review_of(movie_id: i32, name: &str, parent_id: Option<i32>) -> NewReview {
    NewReview {
        email: format!("{}@example.com", name.to_lowercase()),
        name: name.into(),
        text: "Worth the ticket.".into(),
        parent_id,
        movie_id,
    }
}

fn ids<T, F: Fn(&T) -> i32>(items: &[T], id: F) -> Vec<i32> {
    items.iter().map(id).collect()
}

#[tokio::test]
async fn drafts_are_hidden_from_published_listing() {
    let catalog = catalog().await;
    let shown = catalog.create_movie(NewMovie::new("Shown", "shown")).await.unwrap();
    let mut hidden = NewMovie::new("Hidden", "hidden");
    hidden.draft = true;
    let hidden = catalog.create_movie(hidden).await.unwrap();

    let published = catalog.published_movies().await.unwrap();
    assert_eq!(ids(&published, |m| m.id), vec![shown.id]);
    assert!(catalog.published_movie_by_url("hidden").await.unwrap_err().is_not_found());
    assert_eq!(catalog.movie_by_url("hidden").await.unwrap().id, hidden.id);

    catalog.set_draft(hidden.id, false).await.unwrap();
    let published = catalog.published_movies().await.unwrap();
    assert_eq!(ids(&published, |m| m.id), vec![shown.id, hidden.id]);

    catalog.set_draft(shown.id, true).await.unwrap();
    let published = catalog.published_movies().await.unwrap();
    assert_eq!(ids(&published, |m| m.id), vec![hidden.id]);
}

#[tokio::test]
async fn duplicate_slugs_are_rejected() {
    let catalog = catalog().await;

    catalog.create_category(category("drama")).await.unwrap();
    let err = catalog.create_category(category("drama")).await.unwrap_err();
    assert!(err.is_constraint_violation(), "{err}");

    catalog.create_genre(genre("noir")).await.unwrap();
    let err = catalog.create_genre(genre("noir")).await.unwrap_err();
    assert!(err.is_constraint_violation(), "{err}");

    catalog.create_movie(NewMovie::new("Heat", "heat")).await.unwrap();
    let err = catalog.create_movie(NewMovie::new("Heat again", "heat")).await.unwrap_err();
    assert!(err.is_constraint_violation(), "{err}");
    assert_eq!(catalog.movies().await.unwrap().len(), 1);
}

#[tokio::test]
async fn renaming_onto_a_taken_slug_is_rejected() {
    let catalog = catalog().await;
    catalog.create_genre(genre("western")).await.unwrap();
    let other = catalog.create_genre(genre("horror")).await.unwrap();

    let err = catalog.update_genre(other.id, genre("western")).await.unwrap_err();
    assert!(err.is_constraint_violation());
    assert_eq!(catalog.genre(other.id).await.unwrap().url, "horror");
}

#[tokio::test]
async fn deleting_a_category_cascades_through_movies() {
    let catalog = catalog().await;
    let cat = catalog.create_category(category("sci-fi")).await.unwrap();
    let star = catalog.create_star(4).await.unwrap();

    let mut new = NewMovie::new("Alien", "alien");
    new.category_id = Some(cat.id);
    let film = catalog.create_movie(new).await.unwrap();
    let untouched = catalog.create_movie(NewMovie::new("Heat", "heat")).await.unwrap();

    let shot = catalog
        .create_shot(NewMovieShot {
            title: "Nostromo".into(),
            description: String::new(),
            image: "movie_shots/nostromo.jpg".into(),
            movie_id: film.id,
        })
        .await
        .unwrap();
    let rated = catalog
        .create_rating(NewRating { ip: "10.0.0.1".into(), star_id: star.id, movie_id: film.id })
        .await
        .unwrap();
    let reviewed = catalog.create_review(review_of(film.id, "Ripley", None)).await.unwrap();

    catalog.delete_category(cat.id).await.unwrap();

    assert!(catalog.movie(film.id).await.unwrap_err().is_not_found());
    assert!(catalog.shot(shot.id).await.unwrap_err().is_not_found());
    assert!(catalog.rating(rated.id).await.unwrap_err().is_not_found());
    assert!(catalog.review(reviewed.id).await.unwrap_err().is_not_found());
    assert!(catalog.movie(untouched.id).await.is_ok());
    assert!(catalog.star(star.id).await.is_ok());
}

#[tokio::test]
async fn deleting_a_movie_removes_its_dependents_and_links() {
    let catalog = catalog().await;
    let star = catalog.create_star(3).await.unwrap();
    let lead = catalog.create_actor(person("Lead")).await.unwrap();
    let noir = catalog.create_genre(genre("noir")).await.unwrap();

    let mut new = NewMovie::new("Chinatown", "chinatown");
    new.actor_ids = vec![lead.id];
    new.genre_ids = vec![noir.id];
    let film = catalog.create_movie(new).await.unwrap();
    catalog
        .create_rating(NewRating { ip: "1.1.1.1".into(), star_id: star.id, movie_id: film.id })
        .await
        .unwrap();
    catalog.create_review(review_of(film.id, "Jake", None)).await.unwrap();
    let shot = catalog
        .create_shot(NewMovieShot {
            title: "Reservoir".into(),
            description: String::new(),
            image: "movie_shots/reservoir.jpg".into(),
            movie_id: film.id,
        })
        .await
        .unwrap();
    assert_eq!(ids(&catalog.shots(film.id).await.unwrap(), |s| s.id), vec![shot.id]);

    catalog.delete_movie(film.id).await.unwrap();

    assert!(catalog.shot(shot.id).await.unwrap_err().is_not_found());

    assert!(rating::Entity::find().all(catalog.db()).await.unwrap().is_empty());
    assert!(review::Entity::find().all(catalog.db()).await.unwrap().is_empty());
    assert!(catalog.films_acted(lead.id).await.unwrap().is_empty());
    assert!(catalog.published_movies_in_genre("noir").await.unwrap().is_empty());
    assert!(catalog.actor(lead.id).await.is_ok());
}

#[tokio::test]
async fn deleting_a_star_deletes_its_ratings() {
    let catalog = catalog().await;
    let one = catalog.create_star(1).await.unwrap();
    let five = catalog.create_star(5).await.unwrap();
    let film = catalog.create_movie(NewMovie::new("Cats", "cats")).await.unwrap();

    let low = catalog
        .create_rating(NewRating { ip: "2.2.2.2".into(), star_id: one.id, movie_id: film.id })
        .await
        .unwrap();
    let high = catalog
        .create_rating(NewRating { ip: "3.3.3.3".into(), star_id: five.id, movie_id: film.id })
        .await
        .unwrap();

    catalog.delete_star(one.id).await.unwrap();

    assert!(catalog.rating(low.id).await.unwrap_err().is_not_found());
    assert_eq!(catalog.rating(high.id).await.unwrap().star_id, five.id);
    assert_eq!(ids(&catalog.ratings(film.id).await.unwrap(), |r| r.id), vec![high.id]);
}

#[tokio::test]
async fn deleting_a_parent_review_detaches_replies() {
    let catalog = catalog().await;
    let film = catalog.create_movie(NewMovie::new("Vertigo", "vertigo")).await.unwrap();
    let parent = catalog.create_review(review_of(film.id, "Scottie", None)).await.unwrap();
    let first = catalog.create_review(review_of(film.id, "Judy", Some(parent.id))).await.unwrap();
    let second = catalog.create_review(review_of(film.id, "Midge", Some(parent.id))).await.unwrap();

    let children = catalog.review_children(parent.id).await.unwrap();
    assert_eq!(ids(&children, |r| r.id), vec![first.id, second.id]);
    assert_eq!(catalog.review_parent(first.id).await.unwrap().map(|r| r.id), Some(parent.id));

    catalog.delete_review(parent.id).await.unwrap();

    let first = catalog.review(first.id).await.unwrap();
    let second = catalog.review(second.id).await.unwrap();
    assert_eq!(first.parent_id, None);
    assert_eq!(second.parent_id, None);
    assert_eq!(catalog.review_parent(first.id).await.unwrap(), None);
    assert_eq!(catalog.reviews(film.id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn replies_must_stay_on_the_parent_movie() {
    let catalog = catalog().await;
    let a = catalog.create_movie(NewMovie::new("A", "a")).await.unwrap();
    let b = catalog.create_movie(NewMovie::new("B", "b")).await.unwrap();
    let parent = catalog.create_review(review_of(a.id, "First", None)).await.unwrap();

    let err = catalog.create_review(review_of(b.id, "Stray", Some(parent.id))).await.unwrap_err();
    assert!(err.is_constraint_violation(), "{err}");

    let err = catalog.create_review(review_of(a.id, "Orphan", Some(9_999))).await.unwrap_err();
    assert!(err.is_constraint_violation(), "{err}");

    let reply = catalog.create_review(review_of(a.id, "Reply", Some(parent.id))).await.unwrap();
    let err = catalog
        .update_review(parent.id, review_of(a.id, "First", Some(reply.id)))
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation(), "{err}");
    let err = catalog
        .update_review(parent.id, review_of(a.id, "First", Some(parent.id)))
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation(), "{err}");

    let err = catalog.update_review(parent.id, review_of(b.id, "First", None)).await.unwrap_err();
    assert!(err.is_constraint_violation(), "{err}");
    assert_eq!(catalog.review(parent.id).await.unwrap().movie_id, a.id);
    let reply = catalog.review(reply.id).await.unwrap();
    assert_eq!((reply.movie_id, reply.parent_id), (a.id, Some(parent.id)));

    let lone = catalog.create_review(review_of(a.id, "Lone", None)).await.unwrap();
    let moved = catalog.update_review(lone.id, review_of(b.id, "Lone", None)).await.unwrap();
    assert_eq!(moved.movie_id, b.id);
    assert_eq!(catalog.review_label(reply.id).await.unwrap(), "Reply - A");
}

#[tokio::test]
async fn director_and_cast_relations_are_independent() {
    let catalog = catalog().await;
    let a = catalog.create_actor(person("A")).await.unwrap();
    let b = catalog.create_actor(person("B")).await.unwrap();
    let c = catalog.create_actor(person("C")).await.unwrap();

    let mut new = NewMovie::new("Both Sides", "both-sides");
    new.director_ids = vec![a.id, b.id];
    new.actor_ids = vec![a.id, c.id, a.id];
    let film = catalog.create_movie(new).await.unwrap();

    let directors = catalog.directors(film.id).await.unwrap();
    let cast = catalog.cast(film.id).await.unwrap();
    assert_eq!(ids(&directors, |p| p.id), vec![a.id, b.id]);
    assert_eq!(ids(&cast, |p| p.id), vec![a.id, c.id]);

    assert_eq!(ids(&catalog.films_directed(a.id).await.unwrap(), |m| m.id), vec![film.id]);
    assert_eq!(ids(&catalog.films_acted(a.id).await.unwrap(), |m| m.id), vec![film.id]);
    assert!(catalog.films_directed(c.id).await.unwrap().is_empty());
    assert!(catalog.films_acted(b.id).await.unwrap().is_empty());

    catalog.delete_actor(a.id).await.unwrap();
    assert_eq!(ids(&catalog.directors(film.id).await.unwrap(), |p| p.id), vec![b.id]);
    assert_eq!(ids(&catalog.cast(film.id).await.unwrap(), |p| p.id), vec![c.id]);
}

#[tokio::test]
async fn rating_reads_back_star_and_movie() {
    let catalog = catalog().await;
    let star = catalog.create_star(5).await.unwrap();
    let film = catalog.create_movie(NewMovie::new("Test Film", "test-film")).await.unwrap();

    let created = catalog
        .create_rating(NewRating { ip: "1.2.3.4".into(), star_id: star.id, movie_id: film.id })
        .await
        .unwrap();

    let full = catalog.rating_with_relations(created.id).await.unwrap();
    assert_eq!(full.ip, "1.2.3.4");
    assert_eq!(full.star.value, 5);
    assert_eq!(full.movie.url, "test-film");
    assert_eq!(catalog.rating_label(created.id).await.unwrap(), "5 - Test Film");
}

#[tokio::test]
async fn missing_references_are_constraint_violations() {
    let catalog = catalog().await;
    let star = catalog.create_star(2).await.unwrap();

    let err = catalog
        .create_rating(NewRating { ip: "1.2.3.4".into(), star_id: star.id, movie_id: 42 })
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation(), "{err}");

    let mut new = NewMovie::new("Lost", "lost");
    new.category_id = Some(7);
    assert!(catalog.create_movie(new).await.unwrap_err().is_constraint_violation());

    let mut new = NewMovie::new("Ghost cast", "ghost-cast");
    new.actor_ids = vec![99];
    assert!(catalog.create_movie(new).await.unwrap_err().is_constraint_violation());
    assert!(catalog.movie_by_url("ghost-cast").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn field_bounds_are_enforced() {
    let catalog = catalog().await;
    let star = catalog.create_star(1).await.unwrap();
    let film = catalog.create_movie(NewMovie::new("Bounds", "bounds")).await.unwrap();

    let err = catalog
        .create_rating(NewRating {
            ip: "192.168.100.200".into(),
            star_id: star.id,
            movie_id: film.id,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::ConstraintViolation(_)));

    let mut long = review_of(film.id, "Verbose", None);
    long.text = "x".repeat(2001);
    assert!(catalog.create_review(long).await.unwrap_err().is_constraint_violation());

    let mut bad_email = review_of(film.id, "Anon", None);
    bad_email.email = "not-an-email".into();
    assert!(catalog.create_review(bad_email).await.unwrap_err().is_constraint_violation());

    let mut broke = NewMovie::new("Broke", "broke");
    broke.budget = -1;
    assert!(catalog.create_movie(broke).await.unwrap_err().is_constraint_violation());

    let mut young = person("Kid");
    young.age = -3;
    assert!(catalog.create_actor(young).await.unwrap_err().is_constraint_violation());

    assert!(catalog.create_genre(genre("not a slug")).await.unwrap_err().is_constraint_violation());
}

#[tokio::test]
async fn unknown_keys_are_not_found() {
    let catalog = catalog().await;

    assert!(catalog.category(1).await.unwrap_err().is_not_found());
    assert!(catalog.category_by_url("nope").await.unwrap_err().is_not_found());
    assert!(catalog.genre_by_url("nope").await.unwrap_err().is_not_found());
    assert!(catalog.delete_movie(1).await.unwrap_err().is_not_found());
    assert!(catalog.delete_review(1).await.unwrap_err().is_not_found());
    assert!(catalog.update_actor(1, person("Nobody")).await.unwrap_err().is_not_found());
    assert!(catalog.update_movie(1, NewMovie::new("X", "x")).await.unwrap_err().is_not_found());
    assert!(catalog.set_draft(1, true).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn movie_defaults_and_full_update() {
    let catalog = catalog().await;
    let action = catalog.create_genre(genre("action")).await.unwrap();
    let crime = catalog.create_genre(genre("crime")).await.unwrap();
    let lead = catalog.create_actor(person("Lead")).await.unwrap();
    let boss = catalog.create_actor(person("Boss")).await.unwrap();

    let mut new = NewMovie::new("Ronin", "ronin");
    new.genre_ids = vec![action.id];
    new.actor_ids = vec![lead.id];
    let before: jiff::civil::Date = jiff::Zoned::now().into();
    let film = catalog.create_movie(new).await.unwrap();
    let after: jiff::civil::Date = jiff::Zoned::now().into();

    assert_eq!(film.year, 2021);
    assert_eq!(film.tagline, "");
    assert_eq!(film.budget, 0);
    assert!(!film.draft);
    let premiered = film.world_premiere_date().unwrap();
    assert!(premiered == before || premiered == after, "{premiered}");

    let premiere = jiff::civil::date(1998, 9, 25);
    let mut edit = NewMovie::new("Ronin", "ronin-1998");
    edit.year = 1998;
    edit.world_premiere = Some(premiere);
    edit.genre_ids = vec![action.id, crime.id];
    edit.director_ids = vec![boss.id];
    let film = catalog.update_movie(film.id, edit).await.unwrap();

    assert_eq!(film.url, "ronin-1998");
    assert_eq!(film.world_premiere, "1998-09-25");

    let detail = catalog.movie_detail(film.id).await.unwrap();
    assert_eq!(ids(&detail.genres, |g| g.id), vec![action.id, crime.id]);
    assert_eq!(ids(&detail.directors, |p| p.id), vec![boss.id]);
    assert!(detail.actors.is_empty());

    let kept = catalog.update_movie(film.id, NewMovie::new("Ronin", "ronin-1998")).await.unwrap();
    assert_eq!(kept.world_premiere_date(), Some(premiere));
    assert!(catalog.movie_genres(film.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn published_listings_by_category_and_genre() {
    let catalog = catalog().await;
    let cat = catalog.create_category(category("features")).await.unwrap();
    let war = catalog.create_genre(genre("war")).await.unwrap();

    let mut open = NewMovie::new("Dunkirk", "dunkirk");
    open.category_id = Some(cat.id);
    open.genre_ids = vec![war.id];
    let open = catalog.create_movie(open).await.unwrap();

    let mut draft = NewMovie::new("Unfinished", "unfinished");
    draft.category_id = Some(cat.id);
    draft.genre_ids = vec![war.id];
    draft.draft = true;
    catalog.create_movie(draft).await.unwrap();

    let in_category = catalog.published_movies_in_category("features").await.unwrap();
    assert_eq!(ids(&in_category, |m| m.id), vec![open.id]);
    let in_genre = catalog.published_movies_in_genre("war").await.unwrap();
    assert_eq!(ids(&in_genre, |m| m.id), vec![open.id]);
    assert_eq!(catalog.movie_category(open.id).await.unwrap().map(|c| c.id), Some(cat.id));
}

#[tokio::test]
async fn published_filmography_merges_both_roles() {
    let catalog = catalog().await;
    let auteur = catalog.create_actor(person("Auteur")).await.unwrap();

    let mut directed = NewMovie::new("Directed", "directed");
    directed.director_ids = vec![auteur.id];
    let directed = catalog.create_movie(directed).await.unwrap();

    let mut both = NewMovie::new("Both", "both");
    both.director_ids = vec![auteur.id];
    both.actor_ids = vec![auteur.id];
    let both = catalog.create_movie(both).await.unwrap();

    let mut hidden = NewMovie::new("Hidden", "hidden");
    hidden.actor_ids = vec![auteur.id];
    hidden.draft = true;
    catalog.create_movie(hidden).await.unwrap();

    let films = catalog.published_filmography(auteur.id).await.unwrap();
    assert_eq!(ids(&films, |m| m.id), vec![directed.id, both.id]);
}

#[tokio::test]
async fn star_seeding_is_idempotent() {
    let catalog = catalog().await;
    let first = catalog.ensure_stars(&[3, 1, 2, 3]).await.unwrap();
    assert_eq!(first.iter().map(|s| s.value).collect::<Vec<_>>(), vec![1, 2, 3]);

    let second = catalog.ensure_stars(&[1, 2, 3, 4, 5]).await.unwrap();
    assert_eq!(second.iter().map(|s| s.value).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(second[0].id, first[0].id);
}

#[tokio::test]
async fn labels_follow_the_admin_names() {
    let catalog = catalog().await;
    let film = catalog.create_movie(NewMovie::new("Psycho", "psycho")).await.unwrap();
    let marion = catalog.create_review(review_of(film.id, "Marion", None)).await.unwrap();

    assert_eq!(catalog.review_label(marion.id).await.unwrap(), "Marion - Psycho");
    assert_eq!(film.to_string(), "Psycho");
    assert_eq!(actor::Entity::LABEL_PLURAL, "Actors and Directors");
    assert_eq!(movie::Entity::LABEL, "Movie");
    assert_eq!(review::Entity::LABEL_PLURAL, "Reviews");
}

fn still(movie_id: i32, title: &str) -> NewMovieShot {
    NewMovieShot {
        title: title.into(),
        description: String::new(),
        image: format!("movie_shots/{title}.jpg"),
        movie_id,
    }
}

#[tokio::test]
async fn shots_can_be_edited_moved_and_removed() {
    let catalog = catalog().await;
    let first = catalog.create_movie(NewMovie::new("First", "first")).await.unwrap();
    let second = catalog.create_movie(NewMovie::new("Second", "second")).await.unwrap();
    let shot = catalog.create_shot(still(first.id, "opening")).await.unwrap();

    let edited = catalog.update_shot(shot.id, still(second.id, "finale")).await.unwrap();
    assert_eq!(edited.title, "finale");
    assert_eq!(edited.movie_id, second.id);
    assert!(catalog.shots(first.id).await.unwrap().is_empty());
    assert_eq!(ids(&catalog.shots(second.id).await.unwrap(), |s| s.id), vec![shot.id]);

    let err = catalog.update_shot(shot.id, still(404, "lost")).await.unwrap_err();
    assert!(err.is_constraint_violation(), "{err}");
    assert_eq!(catalog.shot(shot.id).await.unwrap().movie_id, second.id);

    let mut blank = still(second.id, "blank");
    blank.image = " ".into();
    assert!(catalog.update_shot(shot.id, blank).await.unwrap_err().is_constraint_violation());

    catalog.delete_shot(shot.id).await.unwrap();
    assert!(catalog.shot(shot.id).await.unwrap_err().is_not_found());
    assert!(catalog.delete_shot(shot.id).await.unwrap_err().is_not_found());
    let err = catalog.update_shot(shot.id, still(second.id, "x")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn categories_can_be_renamed_and_listed() {
    let catalog = catalog().await;
    let drama = catalog.create_category(category("drama")).await.unwrap();
    let comedy = catalog.create_category(category("comedy")).await.unwrap();

    let renamed = catalog
        .update_category(
            drama.id,
            NewCategory {
                name: "Serious films".into(),
                description: "Tears guaranteed".into(),
                url: "serious".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Serious films");
    assert_eq!(catalog.category_by_url("serious").await.unwrap().id, drama.id);
    assert!(catalog.category_by_url("drama").await.unwrap_err().is_not_found());

    let err = catalog.update_category(comedy.id, category("serious")).await.unwrap_err();
    assert!(err.is_constraint_violation(), "{err}");

    let listed = catalog.categories().await.unwrap();
    assert_eq!(ids(&listed, |c| c.id), vec![drama.id, comedy.id]);

    catalog.delete_category(comedy.id).await.unwrap();
    assert_eq!(ids(&catalog.categories().await.unwrap(), |c| c.id), vec![drama.id]);
    assert!(catalog.delete_category(comedy.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn genre_and_actor_listings() {
    let catalog = catalog().await;
    let noir = catalog.create_genre(genre("noir")).await.unwrap();
    let musical = catalog.create_genre(genre("musical")).await.unwrap();
    let a = catalog.create_actor(person("A")).await.unwrap();
    let b = catalog.create_actor(person("B")).await.unwrap();

    assert_eq!(ids(&catalog.genres().await.unwrap(), |g| g.id), vec![noir.id, musical.id]);
    assert_eq!(ids(&catalog.actors().await.unwrap(), |p| p.id), vec![a.id, b.id]);

    let mut older = person("A");
    older.age = 41;
    assert_eq!(catalog.update_actor(a.id, older).await.unwrap().age, 41);
}

#[tokio::test]
async fn stars_and_ratings_can_be_updated() {
    let catalog = catalog().await;
    let low = catalog.create_star(1).await.unwrap();
    let high = catalog.create_star(4).await.unwrap();
    let film = catalog.create_movie(NewMovie::new("Jaws", "jaws")).await.unwrap();
    let other = catalog.create_movie(NewMovie::new("Orca", "orca")).await.unwrap();
    let rated = catalog
        .create_rating(NewRating { ip: "4.4.4.4".into(), star_id: low.id, movie_id: film.id })
        .await
        .unwrap();

    let bumped = catalog.update_star(high.id, 5).await.unwrap();
    assert_eq!(bumped.value, 5);
    let values = catalog.stars().await.unwrap().iter().map(|s| s.value).collect::<Vec<_>>();
    assert_eq!(values, vec![1, 5]);
    assert!(catalog.update_star(999, 3).await.unwrap_err().is_not_found());

    let changed = catalog
        .update_rating(
            rated.id,
            NewRating { ip: "4.4.4.4".into(), star_id: high.id, movie_id: other.id },
        )
        .await
        .unwrap();
    assert_eq!((changed.star_id, changed.movie_id), (high.id, other.id));
    assert_eq!(catalog.rating_label(rated.id).await.unwrap(), "5 - Orca");

    let err = catalog
        .update_rating(
            rated.id,
            NewRating { ip: "4.4.4.4".into(), star_id: 999, movie_id: other.id },
        )
        .await
        .unwrap_err();
    assert!(err.is_constraint_violation(), "{err}");
    assert_eq!(catalog.rating(rated.id).await.unwrap().star_id, high.id);

    catalog.delete_rating(rated.id).await.unwrap();
    assert!(catalog.rating(rated.id).await.unwrap_err().is_not_found());
    assert!(catalog.delete_rating(rated.id).await.unwrap_err().is_not_found());
}
