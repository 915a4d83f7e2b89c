//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `migrations/` exactly; regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// People managed by the CRUD API.
    people (id) {
        /// Primary key generated by the `SERIAL` sequence.
        id -> Int4,
        name -> Varchar,
        age -> Int4,
        email -> Varchar,
        /// Stamped by the service on every save.
        created_at -> Timestamptz,
        /// Stamped by the service on every save.
        updated_at -> Timestamptz,
        /// Actor tag stamped by the service on every save.
        created_who -> Varchar,
    }
}
