//! CRUD, slug lookups and relationship traversal over the catalogue tables.
//!
//! Every write validates its fields first; uniqueness and reference checks
//! are left to the database and surface as
//! [`CatalogError::ConstraintViolation`].

mod movies;
mod people;
mod ratings;
mod reviews;
mod shots;
mod taxonomy;

use sea_orm::{DatabaseConnection, DeleteResult};

use crate::error::{CatalogError, CatalogResult};

#[derive(Clone)]
pub struct Catalog {
    db: DatabaseConnection,
}

impl Catalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connects to `database_url` and brings the schema up to date.
    pub async fn connect(database_url: &str) -> CatalogResult<Self> {
        let db = crate::db::connect_and_migrate(database_url).await?;
        Ok(Self::new(db))
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

fn expect_deleted(res: DeleteResult, entity: &'static str, id: i32) -> CatalogResult<()> {
    if res.rows_affected == 0 {
        return Err(CatalogError::not_found(entity, id));
    }
    Ok(())
}

/// Drops repeated ids, keeping first-seen order.
fn dedup_ids(ids: &[i32]) -> Vec<i32> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(*id);
        }
    }
    out
}
