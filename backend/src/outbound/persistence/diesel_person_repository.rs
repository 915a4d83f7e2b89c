//! PostgreSQL-backed `PersonRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{PersonPersistenceError, PersonRepository};
use crate::domain::{Person, PersonId, UnsavedPerson};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPersonRow, PersonChangeset, PersonRow};
use super::pool::DbPool;
use super::schema::people;

/// Diesel-backed implementation of the `PersonRepository` port.
///
/// `save` runs as a single transaction: it first tries to overwrite the row
/// named by `person.id` and falls back to inserting a new row under a
/// sequence-generated id when no such row exists.
#[derive(Clone)]
pub struct DieselPersonRepository {
    pool: DbPool,
}

impl DieselPersonRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for DieselPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, PersonPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<PersonRow> = people::table
            .order(people::id.asc())
            .select(PersonRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, PersonPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<PersonRow> = people::table
            .find(id.get())
            .select(PersonRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Person::from))
    }

    async fn save(&self, person: UnsavedPerson) -> Result<Person, PersonPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let target = person.id;
        let new_row = NewPersonRow::from(&person);
        let changes = PersonChangeset::from(new_row);

        let row = conn
            .transaction::<PersonRow, diesel::result::Error, _>(|conn| {
                async move {
                    if let Some(id) = target {
                        let updated = diesel::update(people::table.find(id.get()))
                            .set(changes)
                            .returning(PersonRow::as_returning())
                            .get_result(conn)
                            .await
                            .optional()?;
                        if let Some(row) = updated {
                            return Ok(row);
                        }
                        debug!(requested = %id, "upsert target missing; inserting");
                    }

                    diesel::insert_into(people::table)
                        .values(new_row)
                        .returning(PersonRow::as_returning())
                        .get_result(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(Person::from(row))
    }

    async fn delete_by_id(&self, id: PersonId) -> Result<(), PersonPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(people::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        debug!(person_id = %id, removed, "delete by id executed");
        Ok(())
    }
}
