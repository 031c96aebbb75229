use error_stack::Report;
use thiserror::Error;

/// Database related errors
#[derive(Debug, Error)]
pub enum Error {
    /// An error caused by an [`sqlx`] error.
    #[error("received a pool error: {0}")]
    Internal(sqlx::Error),
    /// The statement tripped over a unique constraint, for this
    /// service that means the `usuarios.email` column.
    #[error("unique constraint violation")]
    UniqueViolation,
    /// The database pool does not have a reliable connection
    /// to transact to the database.
    #[error("unhealthy database pool")]
    UnhealthyPool,
}

/// Postgres SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Converts from a generic [sqlx] result into a [database compatible error](Error).
pub trait ErrorExt<T> {
    fn into_db_error(self) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn into_db_error(self) -> Result<T> {
        self.map_err(|e| match &e {
            sqlx::Error::Database(err) if err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                Report::new(e).change_context(Error::UniqueViolation)
            }
            _ => Report::new(Error::Internal(e)),
        })
    }
}

/// Lazily typed [`std::result::Result`] but the error generic
/// is filled up with [a database error](Error).
pub type Result<T> = error_stack::Result<T, Error>;

/// This trait deals with `error_stack::Report<Error>` because it is
/// annoying to write call sites that only need to know which class
/// of failure they got back.
pub trait ErrorExt2 {
    fn is_unhealthy(&self) -> bool;
    fn is_unique_violation(&self) -> bool;
}

impl ErrorExt2 for Report<Error> {
    fn is_unhealthy(&self) -> bool {
        self.downcast_ref::<Error>()
            .map(|v| matches!(v, Error::UnhealthyPool))
            .unwrap_or_default()
    }

    fn is_unique_violation(&self) -> bool {
        self.downcast_ref::<Error>()
            .map(|v| matches!(v, Error::UniqueViolation))
            .unwrap_or_default()
    }
}
