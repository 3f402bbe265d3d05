use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0} with the same slug or email already exists")]
    Conflict(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ResourceError {
    /// Maps a unique-constraint violation to `Conflict`, anything else to `Database`.
    pub fn from_write(label: &'static str, err: sqlx::Error) -> Self {
        if is_unique_violation(&err) {
            Self::Conflict(label)
        } else {
            Self::Database(err)
        }
    }
}

pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}
