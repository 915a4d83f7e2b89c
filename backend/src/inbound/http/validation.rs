//! Field validation for inbound people payloads.
//!
//! Every rule is checked and every violation kept, so a single `400` response
//! reports all problems with the submitted person. Fields are checked in
//! declaration order (`name`, `age`, `email`); within a field only the first
//! failing rule is reported.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::DomainError;
use crate::inbound::http::people_dto::PersonDto;

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName(&'static str);

impl FieldName {
    /// Wrap a static field name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The field name as it appears in JSON.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

const NAME: FieldName = FieldName::new("name");
const AGE: FieldName = FieldName::new("age");
const EMAIL: FieldName = FieldName::new("email");

/// A single failed constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    field: FieldName,
    message: &'static str,
}

impl FieldViolation {
    const fn new(field: FieldName, message: &'static str) -> Self {
        Self { field, message }
    }

    /// Field that failed validation.
    #[must_use]
    pub const fn field(&self) -> FieldName {
        self.field
    }

    /// Human-readable reason.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

/// Renders as `field - message;`.
impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {};", self.field, self.message)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // Local part is dot-separated RFC 5322 atext; domain labels may omit a TLD.
        let pattern = concat!(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
            r"@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
            r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
        );
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

fn check_name(name: &str) -> Option<FieldViolation> {
    name.trim()
        .is_empty()
        .then(|| FieldViolation::new(NAME, "Name should not be empty"))
}

fn check_age(age: i32) -> Option<FieldViolation> {
    (age <= 0).then(|| FieldViolation::new(AGE, "Age should be greater than 0"))
}

fn check_email(email: &str) -> Option<FieldViolation> {
    if email.is_empty() {
        return Some(FieldViolation::new(EMAIL, "Email should not be empty"));
    }
    (!email_regex().is_match(email)).then(|| FieldViolation::new(EMAIL, "Email should be valid"))
}

/// Check a person payload, returning every violation found.
///
/// # Examples
/// ```
/// use people_service::inbound::http::people_dto::PersonDto;
/// use people_service::inbound::http::validation::validate_person;
///
/// let dto = PersonDto {
///     id: None,
///     name: "Anna".into(),
///     age: 30,
///     email: "a@b.com".into(),
/// };
/// assert!(validate_person(&dto).is_empty());
/// ```
#[must_use]
pub fn validate_person(dto: &PersonDto) -> Vec<FieldViolation> {
    [
        check_name(&dto.name),
        check_age(dto.age),
        check_email(&dto.email),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Concatenate violations into the `field - message;` wire format.
#[must_use]
pub fn render_violations(violations: &[FieldViolation]) -> String {
    violations.iter().map(ToString::to_string).collect()
}

/// Validate a payload, failing with [`DomainError::NotCreated`] when any rule
/// is broken.
///
/// # Errors
///
/// Returns `NotCreated` carrying every rendered violation.
pub fn ensure_valid_person(dto: &PersonDto) -> Result<(), DomainError> {
    let violations = validate_person(dto);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::not_created(render_violations(&violations)))
    }
}
