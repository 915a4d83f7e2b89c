//! Internal Diesel row structs for the `people` table.
//!
//! These types never leave the persistence module; conversions to and from
//! domain types live here so the repository only wires queries.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{AuditStamp, Person, PersonDetails, PersonId, UnsavedPerson};

use super::schema::people;

/// Row struct for reading from the people table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = people)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PersonRow {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_who: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: PersonId::new(row.id),
            details: PersonDetails {
                name: row.name,
                age: row.age,
                email: row.email,
            },
            audit: AuditStamp {
                created_at: row.created_at,
                updated_at: row.updated_at,
                created_who: row.created_who,
            },
        }
    }
}

/// Insertable struct for new rows; the id comes from the sequence.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = people)]
pub(crate) struct NewPersonRow<'a> {
    pub name: &'a str,
    pub age: i32,
    pub email: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_who: &'a str,
}

impl<'a> From<&'a UnsavedPerson> for NewPersonRow<'a> {
    fn from(person: &'a UnsavedPerson) -> Self {
        Self {
            name: &person.details.name,
            age: person.details.age,
            email: &person.details.email,
            created_at: person.audit.created_at,
            updated_at: person.audit.updated_at,
            created_who: &person.audit.created_who,
        }
    }
}

/// Changeset overwriting every mutable column of an existing row.
#[derive(Debug, Clone, Copy, AsChangeset)]
#[diesel(table_name = people)]
pub(crate) struct PersonChangeset<'a> {
    pub name: &'a str,
    pub age: i32,
    pub email: &'a str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_who: &'a str,
}

impl<'a> From<NewPersonRow<'a>> for PersonChangeset<'a> {
    fn from(row: NewPersonRow<'a>) -> Self {
        Self {
            name: row.name,
            age: row.age,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
            created_who: row.created_who,
        }
    }
}
