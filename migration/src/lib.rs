pub use sea_orm_migration::prelude::*;

mod m20210101_000001_create_taxonomy_and_people;
mod m20210101_000002_create_movie;
mod m20210101_000003_create_shots_ratings_reviews;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20210101_000001_create_taxonomy_and_people::Migration),
            Box::new(m20210101_000002_create_movie::Migration),
            Box::new(m20210101_000003_create_shots_ratings_reviews::Migration),
        ]
    }
}
