//! Activity handlers: list, get, signup, unregister.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use crate::api::dto::{ActivityDto, ActivityListResponse, MessageResponse, ParticipantParams};
use crate::app_state::AppState;
use crate::domain::ParticipantId;
use crate::error::{ErrorResponse, RosterError};

/// `GET /activities`: List every activity with its roster.
#[utoipa::path(
    get,
    path = "/activities",
    tag = "Activities",
    summary = "List activities",
    description = "Returns a JSON object keyed by activity name, in catalog order. Each value holds the description, schedule, capacity and current participants.",
    responses(
        (status = 200, description = "Activity map", body = serde_json::Value),
    )
)]
pub async fn list_activities(State(state): State<AppState>) -> impl IntoResponse {
    Json(ActivityListResponse::from(state.roster_service.list()))
}

/// `GET /activities/{activity_name}`: Get a single activity.
///
/// # Errors
///
/// Returns [`RosterError::ActivityNotFound`] if the activity does not exist.
#[utoipa::path(
    get,
    path = "/activities/{activity_name}",
    tag = "Activities",
    summary = "Get activity",
    description = "Returns one activity with its current roster.",
    params(
        ("activity_name" = String, Path, description = "Exact, case-sensitive activity name"),
    ),
    responses(
        (status = 200, description = "Activity details", body = ActivityDto),
        (status = 404, description = "Activity not found", body = ErrorResponse),
    )
)]
pub async fn get_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
) -> Result<impl IntoResponse, RosterError> {
    let snapshot = state.roster_service.get_activity(&activity_name)?;
    Ok(Json(ActivityDto::from(snapshot)))
}

/// `POST /activities/{activity_name}/signup?email=`: Sign a participant up.
///
/// # Errors
///
/// Returns [`RosterError::InvalidParticipant`] on a missing or malformed
/// email, [`RosterError::ActivityNotFound`] for an unknown activity, and
/// [`RosterError::DuplicateSignup`] if the participant is already
/// registered.
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    tag = "Activities",
    summary = "Sign up for an activity",
    description = "Adds the email to the activity's roster. Signing up twice is an error.",
    params(
        ("activity_name" = String, Path, description = "Exact, case-sensitive activity name"),
        ParticipantParams,
    ),
    responses(
        (status = 200, description = "Participant signed up", body = MessageResponse),
        (status = 400, description = "Invalid email or already signed up", body = ErrorResponse),
        (status = 404, description = "Activity not found", body = ErrorResponse),
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<ParticipantParams>,
) -> Result<impl IntoResponse, RosterError> {
    let email = require_email(params)?;
    let confirmation = state.roster_service.signup(&activity_name, &email)?;
    Ok(Json(MessageResponse::from(confirmation)))
}

/// `DELETE /activities/{activity_name}/participants?email=`: Remove a
/// participant.
///
/// # Errors
///
/// Returns [`RosterError::InvalidParticipant`] on a missing or malformed
/// email, [`RosterError::ActivityNotFound`] for an unknown activity, and
/// [`RosterError::ParticipantNotRegistered`] if the participant is not on
/// the roster.
#[utoipa::path(
    delete,
    path = "/activities/{activity_name}/participants",
    tag = "Activities",
    summary = "Unregister from an activity",
    description = "Removes the email from the activity's roster.",
    params(
        ("activity_name" = String, Path, description = "Exact, case-sensitive activity name"),
        ParticipantParams,
    ),
    responses(
        (status = 200, description = "Participant unregistered", body = MessageResponse),
        (status = 400, description = "Invalid email", body = ErrorResponse),
        (status = 404, description = "Activity not found or participant not signed up", body = ErrorResponse),
    )
)]
pub async fn unregister(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<ParticipantParams>,
) -> Result<impl IntoResponse, RosterError> {
    let email = require_email(params)?;
    let confirmation = state.roster_service.unregister(&activity_name, &email)?;
    Ok(Json(MessageResponse::from(confirmation)))
}

/// Activity routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}", get(get_activity))
        .route("/activities/{activity_name}/signup", post(signup))
        .route("/activities/{activity_name}/participants", delete(unregister))
}

// ── Request Validation Helpers ──────────────────────────────────────────

/// Extracts the email query parameter and applies the basic format check.
fn require_email(params: ParticipantParams) -> Result<String, RosterError> {
    let email = params
        .email
        .ok_or_else(|| RosterError::InvalidParticipant("missing email".to_string()))?;
    Ok(ParticipantId::parse_email(email)?.into_inner())
}
