use sea_orm::{DbErr, SqlErr};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A unique slug collided, a required reference is missing, or a field
    /// is outside its declared bounds.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("database error: {0}")]
    Database(DbErr),
}

impl CatalogError {
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::ConstraintViolation(msg.into())
    }

    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound { entity, key: key.to_string() }
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::ConstraintViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::ConstraintViolation(msg),
            _ => Self::Database(err),
        }
    }
}

impl From<validator::ValidationErrors> for CatalogError {
    fn from(errs: validator::ValidationErrors) -> Self {
        Self::ConstraintViolation(errs.to_string())
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;
