//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations translate between Diesel row structs and domain
//! types; no business logic lives here. Row structs (`models.rs`) and the
//! table definition (`schema.rs`) stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use people_service::outbound::persistence::{DbPool, DieselPersonRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/people")).await?;
//! let repository = DieselPersonRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_person_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_person_repository::DieselPersonRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
