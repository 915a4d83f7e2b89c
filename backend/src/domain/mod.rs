//! Domain primitives, services, and ports.
//!
//! Purpose: define the person aggregate, the audit enrichment policy, and the
//! driving/driven ports that keep HTTP and persistence concerns out of the
//! business layer.
//!
//! Public surface:
//! - `DomainError`: transport-agnostic failure returned by services.
//! - `Person`, `PersonDraft`, `UnsavedPerson`: the aggregate at each stage of
//!   its save lifecycle.
//! - `PeopleService`: business layer implementing `PeopleQuery` and
//!   `PeopleCommand`.

pub mod error;
pub mod people_service;
pub mod person;
pub mod ports;

pub use self::error::{DomainError, ErrorCode};
pub use self::people_service::PeopleService;
pub use self::person::{
    AuditStamp, CREATED_WHO, Person, PersonDetails, PersonDraft, PersonId, UnsavedPerson,
};
