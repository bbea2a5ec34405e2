//! Roster service: the only place signups and removals happen.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{ActivityCatalog, ActivitySnapshot, ParticipantId};
use crate::error::RosterError;

/// Structured result of a successful signup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupConfirmation {
    /// Activity the participant joined.
    pub activity: String,
    /// Participant that was added.
    pub participant: ParticipantId,
    /// When the roster was updated.
    pub signed_up_at: DateTime<Utc>,
}

/// Structured result of a successful removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterConfirmation {
    /// Activity the participant left.
    pub activity: String,
    /// Participant that was removed.
    pub participant: ParticipantId,
    /// When the roster was updated.
    pub unregistered_at: DateTime<Utc>,
}

/// Orchestration layer for all roster operations.
///
/// Owns a shared handle to the [`ActivityCatalog`]. Every mutation follows
/// the pattern: resolve activity → validate participant → acquire the
/// activity's write lock → check membership → mutate → release. The
/// membership check and the mutation happen under the same guard, so two
/// concurrent signups of one participant cannot both succeed.
#[derive(Debug, Clone)]
pub struct RosterService {
    catalog: Arc<ActivityCatalog>,
}

impl RosterService {
    /// Creates a new `RosterService`.
    #[must_use]
    pub fn new(catalog: Arc<ActivityCatalog>) -> Self {
        Self { catalog }
    }

    /// Returns a reference to the inner [`ActivityCatalog`].
    #[must_use]
    pub fn catalog(&self) -> &Arc<ActivityCatalog> {
        &self.catalog
    }

    /// Returns a snapshot of every activity in catalog order.
    ///
    /// Each activity is copied under its own read lock; there is no
    /// isolation across activities.
    #[must_use]
    pub fn list(&self) -> Vec<ActivitySnapshot> {
        self.catalog
            .list()
            .map(|(_, activity)| ActivitySnapshot::from(&*activity.read()))
            .collect()
    }

    /// Returns a snapshot of one activity.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ActivityNotFound`] if the activity does not
    /// exist.
    pub fn get_activity(&self, activity_name: &str) -> Result<ActivitySnapshot, RosterError> {
        let activity = self.catalog.get(activity_name)?;
        let snapshot = ActivitySnapshot::from(&*activity.read());
        Ok(snapshot)
    }

    /// Adds a participant to an activity's roster.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ActivityNotFound`] if the activity does not
    /// exist, [`RosterError::InvalidParticipant`] if the identifier is
    /// empty, or [`RosterError::DuplicateSignup`] if the participant is
    /// already registered. The roster is untouched on every error.
    pub fn signup(
        &self,
        activity_name: &str,
        participant: &str,
    ) -> Result<SignupConfirmation, RosterError> {
        let activity_lock = self.catalog.get(activity_name)?;
        let participant = ParticipantId::parse(participant)?;

        let mut activity = activity_lock.write();
        if activity.is_registered(&participant) {
            tracing::debug!(
                activity = activity_name,
                participant = %participant,
                "duplicate signup rejected"
            );
            return Err(RosterError::DuplicateSignup {
                activity: activity_name.to_string(),
                participant: participant.into_inner(),
            });
        }
        activity.push_participant(participant.clone());
        drop(activity);

        tracing::info!(activity = activity_name, participant = %participant, "participant signed up");
        Ok(SignupConfirmation {
            activity: activity_name.to_string(),
            participant,
            signed_up_at: Utc::now(),
        })
    }

    /// Removes a participant from an activity's roster.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ActivityNotFound`] if the activity does not
    /// exist, [`RosterError::InvalidParticipant`] if the identifier is
    /// empty, or [`RosterError::ParticipantNotRegistered`] if the
    /// participant is not on the roster. The roster is untouched on every
    /// error.
    pub fn unregister(
        &self,
        activity_name: &str,
        participant: &str,
    ) -> Result<UnregisterConfirmation, RosterError> {
        let activity_lock = self.catalog.get(activity_name)?;
        let participant = ParticipantId::parse(participant)?;

        let removed = activity_lock.write().remove_participant(&participant);
        if !removed {
            tracing::debug!(
                activity = activity_name,
                participant = %participant,
                "unregister of absent participant rejected"
            );
            return Err(RosterError::ParticipantNotRegistered {
                activity: activity_name.to_string(),
                participant: participant.into_inner(),
            });
        }

        tracing::info!(activity = activity_name, participant = %participant, "participant unregistered");
        Ok(UnregisterConfirmation {
            activity: activity_name.to_string(),
            participant,
            unregistered_at: Utc::now(),
        })
    }
}
