//! People business layer: lookups, audit enrichment, and persistence.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    PeopleCommand, PeopleQuery, PersonPersistenceError, PersonRepository,
};
use crate::domain::{DomainError, Person, PersonDraft, PersonId};

/// Service implementing the people driving ports over a [`PersonRepository`].
///
/// Every save stamps `created_at`, `updated_at`, and `created_who` from the
/// injected clock before the record reaches the repository.
///
/// # Examples
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use people_service::domain::ports::{PeopleQuery, PersonRepository};
/// use people_service::domain::PeopleService;
/// use people_service::outbound::memory::InMemoryPersonRepository;
///
/// # async fn example() -> Result<(), people_service::domain::DomainError> {
/// let repository: Arc<dyn PersonRepository> = Arc::new(InMemoryPersonRepository::new());
/// let service = PeopleService::new(repository, Arc::new(DefaultClock));
/// let people = service.find_all().await?;
/// assert!(people.is_empty());
/// # Ok(())
/// # }
/// ```
pub struct PeopleService<R: ?Sized> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: ?Sized> Clone for PeopleService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R: ?Sized> PeopleService<R> {
    /// Create a service over a repository and a clock.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

impl<R> PeopleService<R>
where
    R: PersonRepository + ?Sized,
{
    async fn enrich_and_store(&self, draft: PersonDraft) -> Result<Person, DomainError> {
        let unsaved = draft.enrich(self.clock.utc());
        let person = self
            .repository
            .save(unsaved)
            .await
            .map_err(map_persistence_error)?;
        info!(person_id = %person.id, "person saved");
        Ok(person)
    }
}

/// Translate repository failures into domain errors.
fn map_persistence_error(error: PersonPersistenceError) -> DomainError {
    match error {
        PersonPersistenceError::Connection { message } => DomainError::service_unavailable(message),
        PersonPersistenceError::Query { message } => DomainError::internal(message),
    }
}

#[async_trait]
impl<R> PeopleQuery for PeopleService<R>
where
    R: PersonRepository + ?Sized,
{
    async fn find_all(&self) -> Result<Vec<Person>, DomainError> {
        self.repository
            .find_all()
            .await
            .map_err(map_persistence_error)
    }

    async fn find_one(&self, id: PersonId) -> Result<Person, DomainError> {
        let found = self
            .repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?;
        found.ok_or_else(|| {
            debug!(person_id = %id, "person lookup missed");
            DomainError::NotFound
        })
    }
}

#[async_trait]
impl<R> PeopleCommand for PeopleService<R>
where
    R: PersonRepository + ?Sized,
{
    async fn save(&self, draft: PersonDraft) -> Result<Person, DomainError> {
        self.enrich_and_store(draft).await
    }

    async fn update(&self, id: PersonId, draft: PersonDraft) -> Result<Person, DomainError> {
        self.enrich_and_store(draft.with_id(id)).await
    }

    async fn delete(&self, id: PersonId) -> Result<(), DomainError> {
        self.repository
            .delete_by_id(id)
            .await
            .map_err(map_persistence_error)?;
        info!(person_id = %id, "person deleted");
        Ok(())
    }
}
