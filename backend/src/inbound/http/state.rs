//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`, so they depend only on
//! the driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{PeopleCommand, PeopleQuery};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use people_service::domain::PeopleService;
/// use people_service::domain::ports::PersonRepository;
/// use people_service::inbound::http::state::HttpState;
/// use people_service::outbound::memory::InMemoryPersonRepository;
///
/// let repository: Arc<dyn PersonRepository> = Arc::new(InMemoryPersonRepository::new());
/// let service = Arc::new(PeopleService::new(repository, Arc::new(DefaultClock)));
/// let state = HttpState::new(service.clone(), service);
/// let _people = state.people.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Mutating people use-cases.
    pub people: Arc<dyn PeopleCommand>,
    /// Read-only people use-cases.
    pub people_query: Arc<dyn PeopleQuery>,
}

impl HttpState {
    /// Bundle the command and query ports.
    pub fn new(people: Arc<dyn PeopleCommand>, people_query: Arc<dyn PeopleQuery>) -> Self {
        Self {
            people,
            people_query,
        }
    }
}
