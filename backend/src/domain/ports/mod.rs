//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`PeopleQuery`, `PeopleCommand`) are what inbound adapters
//! call. The driven port (`PersonRepository`) is what persistence adapters
//! implement.

mod macros;
pub(crate) use macros::define_port_error;

mod people_command;
mod people_query;
mod person_repository;

#[cfg(test)]
pub use people_command::MockPeopleCommand;
pub use people_command::PeopleCommand;
#[cfg(test)]
pub use people_query::MockPeopleQuery;
pub use people_query::PeopleQuery;
#[cfg(test)]
pub use person_repository::MockPersonRepository;
pub use person_repository::{PersonPersistenceError, PersonRepository};
