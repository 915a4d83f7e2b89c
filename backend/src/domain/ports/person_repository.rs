//! Driven port for person persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Person, PersonId, UnsavedPerson};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by person repository adapters.
    pub enum PersonPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "person repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "person repository query failed: {message}",
    }
}

/// Key-indexed person store.
///
/// Adapters must give `save` upsert semantics: when `person.id` names an
/// existing row that row is overwritten, otherwise a new row is inserted under
/// a freshly generated identifier.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Every stored person in ascending identifier order.
    async fn find_all(&self) -> Result<Vec<Person>, PersonPersistenceError>;

    /// Fetch a person by identifier.
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonPersistenceError>;

    /// Insert or update a person, returning the stored record.
    async fn save(&self, person: UnsavedPerson) -> Result<Person, PersonPersistenceError>;

    /// Remove a person. Absent identifiers are a silent no-op.
    async fn delete_by_id(&self, id: PersonId) -> Result<(), PersonPersistenceError>;
}
