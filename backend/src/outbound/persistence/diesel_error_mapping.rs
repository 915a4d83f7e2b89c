//! Mapping from pool and Diesel failures to `PersonPersistenceError`.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::PersonPersistenceError;

use super::pool::PoolError;

/// Pool failures always mean the database could not be reached.
pub(super) fn map_pool_error(error: PoolError) -> PersonPersistenceError {
    PersonPersistenceError::connection(error.into_message())
}

/// Classify a Diesel failure, logging the raw cause at debug level.
///
/// Raw database messages are kept out of the returned error.
pub(super) fn map_diesel_error(error: DieselError) -> PersonPersistenceError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => PersonPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => PersonPersistenceError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            PersonPersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            PersonPersistenceError::query("person violates a table constraint")
        }
        _ => PersonPersistenceError::query("database error"),
    }
}
