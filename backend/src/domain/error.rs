//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter decides the status
//! code and body for each variant; `NotFound` deliberately carries no message
//! so the user-facing wording stays at the boundary.

/// Stable machine-readable category for a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A lookup by identifier found nothing.
    NotFound,
    /// A person could not be created because the input failed validation.
    NotCreated,
    /// The backing store could not be reached.
    ServiceUnavailable,
    /// An unexpected failure inside the service or its adapters.
    InternalError,
}

/// Failures returned by the business layer.
///
/// # Examples
/// ```
/// use people_service::domain::{DomainError, ErrorCode};
///
/// let err = DomainError::not_created("name - Name should not be empty;");
/// assert_eq!(err.code(), ErrorCode::NotCreated);
/// assert_eq!(err.to_string(), "name - Name should not be empty;");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// No person exists with the requested identifier.
    #[error("person not found")]
    NotFound,
    /// Validation failed; `message` aggregates every violation.
    #[error("{message}")]
    NotCreated {
        /// Concatenated `field - message;` entries.
        message: String,
    },
    /// The store rejected or dropped the connection.
    #[error("service unavailable: {message}")]
    ServiceUnavailable {
        /// Adapter-supplied cause, never shown to clients.
        message: String,
    },
    /// Any other failure.
    #[error("internal error: {message}")]
    Internal {
        /// Adapter-supplied cause, never shown to clients.
        message: String,
    },
}

impl DomainError {
    /// Convenience constructor for [`DomainError::NotCreated`].
    pub fn not_created(message: impl Into<String>) -> Self {
        Self::NotCreated {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`DomainError::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Convenience constructor for [`DomainError::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Category of this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound => ErrorCode::NotFound,
            Self::NotCreated { .. } => ErrorCode::NotCreated,
            Self::ServiceUnavailable { .. } => ErrorCode::ServiceUnavailable,
            Self::Internal { .. } => ErrorCode::InternalError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DomainError::NotFound, ErrorCode::NotFound)]
    #[case(DomainError::not_created("age - Age should be greater than 0;"), ErrorCode::NotCreated)]
    #[case(DomainError::service_unavailable("pool timed out"), ErrorCode::ServiceUnavailable)]
    #[case(DomainError::internal("boom"), ErrorCode::InternalError)]
    fn code_matches_variant(#[case] error: DomainError, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }

    #[test]
    fn not_created_displays_raw_message() {
        let err = DomainError::not_created("email - Email should be valid;");
        assert_eq!(err.to_string(), "email - Email should be valid;");
    }
}
