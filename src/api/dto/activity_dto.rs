//! Activity DTOs for listing, lookup, signup and unregister.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{ActivitySnapshot, ParticipantId};
use crate::service::{SignupConfirmation, UnregisterConfirmation};

/// Query parameters for signup and unregister.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParticipantParams {
    /// Participant email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// Per-activity body inside the `GET /activities` map.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivityDetailsDto {
    /// Description.
    pub description: String,
    /// Schedule.
    pub schedule: String,
    /// Advertised capacity (display only).
    pub max_participants: u32,
    /// Registered participant emails in signup order.
    pub participants: Vec<String>,
}

impl From<ActivitySnapshot> for ActivityDetailsDto {
    fn from(snapshot: ActivitySnapshot) -> Self {
        Self {
            description: snapshot.description,
            schedule: snapshot.schedule,
            max_participants: snapshot.max_participants,
            participants: snapshot
                .participants
                .into_iter()
                .map(ParticipantId::into_inner)
                .collect(),
        }
    }
}

/// Single activity for `GET /activities/{activity_name}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivityDto {
    /// Activity name.
    pub name: String,
    /// Description, schedule, capacity and roster.
    #[serde(flatten)]
    pub details: ActivityDetailsDto,
}

impl From<ActivitySnapshot> for ActivityDto {
    fn from(snapshot: ActivitySnapshot) -> Self {
        Self {
            name: snapshot.name.clone(),
            details: ActivityDetailsDto::from(snapshot),
        }
    }
}

/// Response body for `GET /activities`.
///
/// Serialized as a JSON object keyed by activity name, with keys emitted
/// in catalog order.
#[derive(Debug, Clone, Default)]
pub struct ActivityListResponse(pub Vec<(String, ActivityDetailsDto)>);

impl From<Vec<ActivitySnapshot>> for ActivityListResponse {
    fn from(snapshots: Vec<ActivitySnapshot>) -> Self {
        Self(
            snapshots
                .into_iter()
                .map(|s| (s.name.clone(), ActivityDetailsDto::from(s)))
                .collect(),
        )
    }
}

impl Serialize for ActivityListResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, details) in &self.0 {
            map.serialize_entry(name, details)?;
        }
        map.end()
    }
}

/// Confirmation body for signup and unregister.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: String,
}

impl From<SignupConfirmation> for MessageResponse {
    fn from(confirmation: SignupConfirmation) -> Self {
        Self {
            message: format!(
                "Signed up {} for {}",
                confirmation.participant, confirmation.activity
            ),
        }
    }
}

impl From<UnregisterConfirmation> for MessageResponse {
    fn from(confirmation: UnregisterConfirmation) -> Self {
        Self {
            message: format!(
                "Unregistered {} from {}",
                confirmation.participant, confirmation.activity
            ),
        }
    }
}
