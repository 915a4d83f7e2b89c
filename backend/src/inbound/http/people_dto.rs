//! Transfer object for people crossing the HTTP boundary.
//!
//! The DTO never carries audit fields; they are stamped server-side and
//! dropped when converting a stored [`Person`] back out.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::{Person, PersonDetails, PersonDraft, PersonId};

/// Wire shape of a person.
///
/// Missing or `null` fields deserialise to their empty defaults so the
/// validator can report them alongside other violations.
///
/// Example JSON:
/// `{"id":1,"name":"Anna","age":30,"email":"a@b.com"}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct PersonDto {
    /// Store-assigned identifier; optional on create.
    #[schema(example = 1)]
    pub id: Option<i32>,
    /// Full name; must not be blank.
    #[schema(example = "Anna")]
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Age in years; must be greater than zero.
    #[schema(example = 30)]
    #[serde(deserialize_with = "null_as_default")]
    pub age: i32,
    /// Contact email; must be well-formed.
    #[schema(example = "a@b.com")]
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<Person> for PersonDto {
    fn from(person: Person) -> Self {
        let Person { id, details, .. } = person;
        Self {
            id: Some(id.get()),
            name: details.name,
            age: details.age,
            email: details.email,
        }
    }
}

impl From<PersonDto> for PersonDraft {
    fn from(dto: PersonDto) -> Self {
        Self {
            id: dto.id.map(PersonId::new),
            details: PersonDetails {
                name: dto.name,
                age: dto.age,
                email: dto.email,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(None)]
    #[case(Some(12))]
    fn round_trip_preserves_user_fields(#[case] id: Option<i32>) {
        let dto = PersonDto {
            id,
            name: "Anna".to_owned(),
            age: 30,
            email: "a@b.com".to_owned(),
        };

        let person = PersonDraft::from(dto.clone())
            .enrich(Utc::now())
            .into_person(PersonId::new(5));
        let back = PersonDto::from(person);

        assert_eq!(back.id, Some(5));
        assert_eq!(back.name, dto.name);
        assert_eq!(back.age, dto.age);
        assert_eq!(back.email, dto.email);
    }

    #[test]
    fn serialises_without_audit_fields() {
        let person = PersonDraft::new(PersonDetails {
            name: "Anna".to_owned(),
            age: 30,
            email: "a@b.com".to_owned(),
        })
        .enrich(Utc::now())
        .into_person(PersonId::new(1));

        let value = serde_json::to_value(PersonDto::from(person)).expect("serialise dto");

        assert_eq!(
            value,
            json!({ "id": 1, "name": "Anna", "age": 30, "email": "a@b.com" })
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let dto: PersonDto = serde_json::from_value(json!({ "name": "Anna" })).expect("parse");

        assert_eq!(dto.id, None);
        assert_eq!(dto.age, 0);
        assert!(dto.email.is_empty());
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let dto: PersonDto = serde_json::from_value(
            json!({ "id": null, "name": null, "age": null, "email": null }),
        )
        .expect("parse");

        assert_eq!(dto, PersonDto::default());
    }
}
