//! Roster error types with HTTP status code mapping.
//!
//! [`RosterError`] is the central error type for roster operations. Each
//! variant maps to a specific HTTP status code and structured JSON error
//! response. [`SeedError`] covers failures while building the catalog at
//! startup and never reaches a client.

use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape. `detail` repeats the message
/// at the top level for the browser client:
/// ```json
/// {
///   "detail": "tester@example.com is already signed up for Chess Club",
///   "error": {
///     "code": 1002,
///     "message": "tester@example.com is already signed up for Chess Club"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub detail: String,
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`RosterError`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Rejection of a roster request.
///
/// None of these are transient; retrying the same request yields the same
/// error until the roster changes.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status               |
/// |-----------|-----------------|---------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request           |
/// | 2000–2999 | Not Found       | 404 Not Found             |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// Participant identifier is empty, absent, or malformed.
    #[error("invalid participant: {0}")]
    InvalidParticipant(String),

    /// Participant is already on the activity's roster.
    #[error("{participant} is already signed up for {activity}")]
    DuplicateSignup {
        /// Activity name.
        activity: String,
        /// Participant identifier.
        participant: String,
    },

    /// No activity with the given name exists.
    #[error("activity not found: {0}")]
    ActivityNotFound(String),

    /// Participant is not on the activity's roster.
    #[error("{participant} is not signed up for {activity}")]
    ParticipantNotRegistered {
        /// Activity name.
        activity: String,
        /// Participant identifier.
        participant: String,
    },
}

impl RosterError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidParticipant(_) => 1001,
            Self::DuplicateSignup { .. } => 1002,
            Self::ActivityNotFound(_) => 2001,
            Self::ParticipantNotRegistered { .. } => 2002,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidParticipant(_) | Self::DuplicateSignup { .. } => StatusCode::BAD_REQUEST,
            Self::ActivityNotFound(_) | Self::ParticipantNotRegistered { .. } => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        let body = ErrorResponse {
            detail: message.clone(),
            error: ErrorBody {
                code: self.error_code(),
                message,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

/// Failure while building the activity catalog from seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Seed file could not be read.
    #[error("cannot read seed file {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Seed data is not valid JSON of the expected shape.
    #[error("malformed seed data: {0}")]
    Json(#[from] serde_json::Error),

    /// Two seeds share the same activity name.
    #[error("duplicate activity in seed: {0}")]
    DuplicateActivity(String),

    /// A seeded participant identifier is not a plausible email.
    #[error("invalid participant {participant:?} seeded for {activity}")]
    InvalidParticipant {
        /// Activity name.
        activity: String,
        /// Offending identifier.
        participant: String,
    },

    /// A seeded roster lists the same participant twice.
    #[error("participant {participant} seeded twice for {activity}")]
    DuplicateParticipant {
        /// Activity name.
        activity: String,
        /// Repeated identifier.
        participant: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let dup = RosterError::DuplicateSignup {
            activity: "Chess Club".to_string(),
            participant: "a@example.com".to_string(),
        };
        assert_eq!(dup.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RosterError::InvalidParticipant(String::new()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn lookup_errors_map_to_not_found() {
        let missing = RosterError::ParticipantNotRegistered {
            activity: "Chess Club".to_string(),
            participant: "a@example.com".to_string(),
        };
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RosterError::ActivityNotFound("Nope".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn error_codes_are_distinct() {
        let codes = [
            RosterError::InvalidParticipant(String::new()).error_code(),
            RosterError::DuplicateSignup {
                activity: String::new(),
                participant: String::new(),
            }
            .error_code(),
            RosterError::ActivityNotFound(String::new()).error_code(),
            RosterError::ParticipantNotRegistered {
                activity: String::new(),
                participant: String::new(),
            }
            .error_code(),
        ];
        let mut sorted = codes.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len());
    }

    #[test]
    fn into_response_sets_status() {
        let response = RosterError::ActivityNotFound("Nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[allow(clippy::panic)]
    async fn into_response_body_carries_detail_and_code() {
        let response = RosterError::ParticipantNotRegistered {
            activity: "Chess Club".to_string(),
            participant: "ghost@example.com".to_string(),
        }
        .into_response();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(body) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body is not JSON");
        };
        assert_eq!(
            body.get("detail").and_then(|d| d.as_str()),
            Some("ghost@example.com is not signed up for Chess Club")
        );
        let code = body
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|c| c.as_u64());
        assert_eq!(code, Some(2002));
    }

    #[test]
    fn duplicate_message_names_both_sides() {
        let err = RosterError::DuplicateSignup {
            activity: "Chess Club".to_string(),
            participant: "tester@example.com".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "tester@example.com is already signed up for Chess Club"
        );
    }
}
