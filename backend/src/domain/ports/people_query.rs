//! Driving port for read-only people use-cases.

use async_trait::async_trait;

use crate::domain::{DomainError, Person, PersonId};

/// Read side of the people use-cases consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PeopleQuery: Send + Sync {
    /// List every person in store order.
    async fn find_all(&self) -> Result<Vec<Person>, DomainError>;

    /// Fetch one person, failing with [`DomainError::NotFound`] when absent.
    async fn find_one(&self, id: PersonId) -> Result<Person, DomainError>;
}
