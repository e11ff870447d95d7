pub mod catalog;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod validate;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
