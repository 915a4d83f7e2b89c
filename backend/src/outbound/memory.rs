//! In-memory `PersonRepository` adapter.
//!
//! Backs the service when no `database_url` is configured and drives the HTTP
//! tests. Rows live in a `BTreeMap` so `find_all` yields ascending ids, which
//! matches the ordering of the PostgreSQL adapter.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{PersonPersistenceError, PersonRepository};
use crate::domain::{Person, PersonId, UnsavedPerson};

#[derive(Debug, Default)]
struct MemoryState {
    rows: BTreeMap<PersonId, Person>,
    last_id: i32,
}

impl MemoryState {
    fn next_id(&mut self) -> Result<PersonId, PersonPersistenceError> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| PersonPersistenceError::query("person id sequence exhausted"))?;
        self.last_id = next;
        Ok(PersonId::new(next))
    }
}

/// Mutex-guarded person store with a serial id sequence.
///
/// # Examples
/// ```
/// use people_service::outbound::memory::InMemoryPersonRepository;
///
/// let repository = InMemoryPersonRepository::new();
/// # let _ = repository;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    state: Mutex<MemoryState>,
}

impl InMemoryPersonRepository {
    /// Create an empty store whose first generated id is `1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, PersonPersistenceError> {
        self.state
            .lock()
            .map_err(|_| PersonPersistenceError::query("in-memory person store poisoned"))
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, PersonPersistenceError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonPersistenceError> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    async fn save(&self, person: UnsavedPerson) -> Result<Person, PersonPersistenceError> {
        let mut state = self.lock()?;
        let id = match person.id {
            Some(id) if state.rows.contains_key(&id) => id,
            requested => {
                let id = state.next_id()?;
                if let Some(requested) = requested {
                    debug!(%requested, assigned = %id, "upsert target missing; inserting");
                }
                id
            }
        };
        let stored = person.into_person(id);
        state.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete_by_id(&self, id: PersonId) -> Result<(), PersonPersistenceError> {
        self.lock()?.rows.remove(&id);
        Ok(())
    }
}
