//! Builders for the HTTP state and the people service behind it.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use people_service::domain::PeopleService;
use people_service::domain::ports::{PeopleCommand, PeopleQuery, PersonRepository};
use people_service::inbound::http::state::HttpState;
use people_service::outbound::memory::InMemoryPersonRepository;
use people_service::outbound::persistence::{DbPool, DieselPersonRepository};

use super::ServerConfig;

/// Pick the repository adapter: PostgreSQL when a pool is configured,
/// otherwise the process-local store.
fn build_person_repository(pool: Option<&DbPool>) -> Arc<dyn PersonRepository> {
    match pool {
        Some(pool) => Arc::new(DieselPersonRepository::new(pool.clone())),
        None => {
            info!("no database configured; people are kept in memory");
            Arc::new(InMemoryPersonRepository::new())
        }
    }
}

/// Wire repository, clock and service into the state handlers consume.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = build_person_repository(config.db_pool.as_ref());
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let service = Arc::new(PeopleService::new(repository, clock));
    web::Data::new(HttpState::new(
        service.clone() as Arc<dyn PeopleCommand>,
        service as Arc<dyn PeopleQuery>,
    ))
}
