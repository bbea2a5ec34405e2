//! Activity aggregate: display metadata plus the participant roster.

use super::ParticipantId;

/// A named activity and its current roster.
///
/// Each activity in the catalog is stored as an `Activity` behind its own
/// lock. The display fields are immutable after seeding; only the roster
/// changes, and only through [`crate::service::RosterService`].
#[derive(Debug)]
pub struct Activity {
    /// Unique, case-sensitive activity name (immutable after seeding).
    pub name: String,

    /// Free-form description shown to clients.
    pub description: String,

    /// Free-form schedule shown to clients.
    pub schedule: String,

    /// Advertised capacity. Display metadata only; never enforced.
    pub max_participants: u32,

    /// Registered participants in signup order, without duplicates.
    participants: Vec<ParticipantId>,
}

impl Activity {
    /// Creates an activity with an empty roster.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Returns the roster in signup order.
    #[must_use]
    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    /// Returns `true` if `participant` is on the roster.
    #[must_use]
    pub fn is_registered(&self, participant: &ParticipantId) -> bool {
        self.participants.contains(participant)
    }

    /// Appends a participant. Caller must have checked membership.
    pub(crate) fn push_participant(&mut self, participant: ParticipantId) {
        debug_assert!(!self.is_registered(&participant));
        self.participants.push(participant);
    }

    /// Removes a participant, returning `true` if it was present.
    pub(crate) fn remove_participant(&mut self, participant: &ParticipantId) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != participant);
        self.participants.len() != before
    }
}

/// Point-in-time copy of an activity, safe to hold without any lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySnapshot {
    /// Activity name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Schedule.
    pub schedule: String,
    /// Advertised capacity.
    pub max_participants: u32,
    /// Roster at the time the snapshot was taken.
    pub participants: Vec<ParticipantId>,
}

impl From<&Activity> for ActivitySnapshot {
    fn from(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn pid(raw: &str) -> ParticipantId {
        let Ok(id) = ParticipantId::parse(raw) else {
            panic!("valid identifier rejected");
        };
        id
    }

    #[test]
    fn new_activity_has_empty_roster() {
        let activity = Activity::new("Chess Club", "Chess", "Fridays", 12);
        assert!(activity.participants().is_empty());
    }

    #[test]
    fn push_preserves_signup_order() {
        let mut activity = Activity::new("Chess Club", "Chess", "Fridays", 12);
        activity.push_participant(pid("b@example.com"));
        activity.push_participant(pid("a@example.com"));

        let names: Vec<&str> = activity.participants().iter().map(ParticipantId::as_str).collect();
        assert_eq!(names, ["b@example.com", "a@example.com"]);
    }

    #[test]
    fn remove_reports_presence() {
        let mut activity = Activity::new("Chess Club", "Chess", "Fridays", 12);
        activity.push_participant(pid("a@example.com"));

        assert!(activity.remove_participant(&pid("a@example.com")));
        assert!(!activity.remove_participant(&pid("a@example.com")));
        assert!(!activity.is_registered(&pid("a@example.com")));
    }

    #[test]
    fn snapshot_copies_all_fields() {
        let mut activity = Activity::new("Art Club", "Paint", "Thursdays", 15);
        activity.push_participant(pid("amelia@mergington.edu"));

        let snapshot = ActivitySnapshot::from(&activity);
        assert_eq!(snapshot.name, "Art Club");
        assert_eq!(snapshot.max_participants, 15);
        assert_eq!(snapshot.participants, vec![pid("amelia@mergington.edu")]);
    }
}
