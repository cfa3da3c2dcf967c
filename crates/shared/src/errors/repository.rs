use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    #[error("Database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("Custom error: {0}")]
    Custom(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::Database(ref db_err) => {
                if db_err.is_foreign_key_violation() {
                    RepositoryError::ForeignKey(db_err.message().to_string())
                } else if db_err.is_unique_violation() {
                    RepositoryError::Conflict(db_err.message().to_string())
                } else {
                    RepositoryError::Sqlx(err)
                }
            }
            _ => RepositoryError::Sqlx(err),
        }
    }
}
