//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use super::dto::{ActivityDetailsDto, ActivityDto, MessageResponse};
use super::handlers::{activities, system};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "activity-roster",
        description = "Sign-up rosters for a fixed catalog of activities."
    ),
    paths(
        activities::list_activities,
        activities::get_activity,
        activities::signup,
        activities::unregister,
        system::health_handler,
    ),
    components(schemas(
        ActivityDetailsDto,
        ActivityDto,
        MessageResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Activities", description = "Activity listing and roster changes"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_all_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/activities",
            "/activities/{activity_name}",
            "/activities/{activity_name}/signup",
            "/activities/{activity_name}/participants",
            "/health",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
