//! Person aggregate.
//!
//! A person moves through three shapes on its way into storage:
//!
//! ```text
//! PersonDraft --enrich(now)--> UnsavedPerson --repository.save--> Person
//! ```
//!
//! Only [`PersonDraft`] is built from caller input. Audit fields are attached
//! by [`PersonDraft::enrich`] so a stored [`Person`] always carries a complete
//! [`AuditStamp`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Actor recorded on every save until an authentication system exists.
pub const CREATED_WHO: &str = "ADMIN";

/// Store-assigned integer identifier for a person.
///
/// # Examples
/// ```
/// use people_service::domain::PersonId;
///
/// let id = PersonId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(i32);

impl PersonId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value as stored in the `people.id` column.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for PersonId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller-supplied person fields.
///
/// Constraint checks happen at the inbound boundary before a draft is built;
/// this type carries the values as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDetails {
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Contact email address.
    pub email: String,
}

/// Server-stamped audit fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    /// When the record was (last) stamped as created.
    pub created_at: DateTime<Utc>,
    /// When the record was last saved.
    pub updated_at: DateTime<Utc>,
    /// Actor responsible for the save.
    pub created_who: String,
}

impl AuditStamp {
    /// Stamp every audit field from a single instant.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use people_service::domain::{AuditStamp, CREATED_WHO};
    ///
    /// let now = Utc::now();
    /// let stamp = AuditStamp::stamped_at(now);
    /// assert_eq!(stamp.created_at, now);
    /// assert_eq!(stamp.updated_at, now);
    /// assert_eq!(stamp.created_who, CREATED_WHO);
    /// ```
    #[must_use]
    pub fn stamped_at(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            created_who: CREATED_WHO.to_owned(),
        }
    }
}

/// Person as submitted for saving, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDraft {
    /// Identifier to upsert against; `None` asks the store to assign one.
    pub id: Option<PersonId>,
    /// Caller-supplied fields.
    pub details: PersonDetails,
}

impl PersonDraft {
    /// Build a draft without an identifier.
    #[must_use]
    pub fn new(details: PersonDetails) -> Self {
        Self { id: None, details }
    }

    /// Force the identifier the store should upsert against.
    #[must_use]
    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = Some(id);
        self
    }

    /// Attach audit fields, producing a value ready for storage.
    ///
    /// The stamp is applied unconditionally, including for drafts that target
    /// an existing row.
    #[must_use]
    pub fn enrich(self, now: DateTime<Utc>) -> UnsavedPerson {
        UnsavedPerson {
            id: self.id,
            details: self.details,
            audit: AuditStamp::stamped_at(now),
        }
    }
}

/// Enriched person handed to a repository for upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsavedPerson {
    /// Target identifier, if any.
    pub id: Option<PersonId>,
    /// Caller-supplied fields.
    pub details: PersonDetails,
    /// Audit fields stamped by the service.
    pub audit: AuditStamp,
}

impl UnsavedPerson {
    /// Attach the identifier chosen by the store.
    #[must_use]
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            details: self.details,
            audit: self.audit,
        }
    }
}

/// Persisted person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Store-assigned identifier.
    pub id: PersonId,
    /// Caller-supplied fields.
    pub details: PersonDetails,
    /// Audit fields stamped on the last save.
    pub audit: AuditStamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn details() -> PersonDetails {
        PersonDetails {
            name: "Anna".to_owned(),
            age: 30,
            email: "a@b.com".to_owned(),
        }
    }

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    #[rstest]
    fn enrich_stamps_every_audit_field(details: PersonDetails, now: DateTime<Utc>) {
        let unsaved = PersonDraft::new(details.clone()).enrich(now);

        assert_eq!(unsaved.id, None);
        assert_eq!(unsaved.details, details);
        assert_eq!(unsaved.audit.created_at, now);
        assert_eq!(unsaved.audit.updated_at, now);
        assert_eq!(unsaved.audit.created_who, "ADMIN");
    }

    #[rstest]
    fn with_id_overrides_existing_identifier(details: PersonDetails, now: DateTime<Utc>) {
        let draft = PersonDraft {
            id: Some(PersonId::new(1)),
            details,
        }
        .with_id(PersonId::new(9));

        assert_eq!(draft.enrich(now).id, Some(PersonId::new(9)));
    }

    #[rstest]
    fn into_person_keeps_details_and_audit(details: PersonDetails, now: DateTime<Utc>) {
        let person = PersonDraft::new(details.clone())
            .enrich(now)
            .into_person(PersonId::new(3));

        assert_eq!(person.id, PersonId::new(3));
        assert_eq!(person.details, details);
        assert!(person.audit.updated_at >= person.audit.created_at);
    }

    #[test]
    fn person_id_serialises_as_bare_integer() {
        let json = serde_json::to_string(&PersonId::new(42)).expect("serialise id");
        assert_eq!(json, "42");
    }
}
