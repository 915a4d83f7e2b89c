//! Driving port for people mutations.

use async_trait::async_trait;

use crate::domain::{DomainError, Person, PersonDraft, PersonId};

/// Write side of the people use-cases consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeopleCommand: Send + Sync {
    /// Enrich and upsert a person.
    async fn save(&self, draft: PersonDraft) -> Result<Person, DomainError>;

    /// Enrich and upsert a person under `id`, ignoring any identifier on the
    /// draft.
    async fn update(&self, id: PersonId, draft: PersonDraft) -> Result<Person, DomainError>;

    /// Delete a person. Deleting an unknown identifier succeeds.
    async fn delete(&self, id: PersonId) -> Result<(), DomainError>;
}
