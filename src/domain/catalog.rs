//! Fixed activity catalog with per-activity fine-grained locking.
//!
//! [`ActivityCatalog`] is built once from seed data and never gains or
//! loses activities afterwards, so the name index itself needs no lock.
//! Each activity is individually protected by a [`parking_lot::RwLock`],
//! which allows concurrent reads of the same activity and concurrent
//! writes to different activities.

use std::collections::HashMap;

use parking_lot::RwLock;

use super::seed::ActivitySeed;
use super::{Activity, ParticipantId};
use crate::error::{RosterError, SeedError};

/// Central store for all activities.
///
/// # Concurrency
///
/// - Multiple threads may read the same activity concurrently.
/// - Writes to different activities are concurrent.
/// - Writes to the same activity are serialized.
#[derive(Debug)]
pub struct ActivityCatalog {
    entries: Vec<(String, RwLock<Activity>)>,
    index: HashMap<String, usize>,
}

impl ActivityCatalog {
    /// Builds a catalog from seed data, keeping the seed order.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DuplicateActivity`] if two seeds share a name,
    /// [`SeedError::InvalidParticipant`] if a seeded identifier is not a
    /// plausible email, or [`SeedError::DuplicateParticipant`] if a seeded
    /// roster repeats an identifier.
    pub fn from_seed(seeds: impl IntoIterator<Item = ActivitySeed>) -> Result<Self, SeedError> {
        let mut entries = Vec::new();
        let mut index = HashMap::new();

        for seed in seeds {
            if index.contains_key(&seed.name) {
                return Err(SeedError::DuplicateActivity(seed.name));
            }

            let mut activity = Activity::new(
                seed.name.clone(),
                seed.description,
                seed.schedule,
                seed.max_participants,
            );
            for raw in seed.participants {
                let Ok(participant) = ParticipantId::parse_email(raw.clone()) else {
                    return Err(SeedError::InvalidParticipant {
                        activity: seed.name,
                        participant: raw,
                    });
                };
                if activity.is_registered(&participant) {
                    return Err(SeedError::DuplicateParticipant {
                        activity: seed.name,
                        participant: raw,
                    });
                }
                activity.push_participant(participant);
            }

            index.insert(seed.name.clone(), entries.len());
            entries.push((seed.name, RwLock::new(activity)));
        }

        Ok(Self { entries, index })
    }

    /// Looks up an activity by exact name.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::ActivityNotFound`] if no activity has this
    /// name. Matching is case-sensitive with no normalization.
    pub fn get(&self, name: &str) -> Result<&RwLock<Activity>, RosterError> {
        self.index
            .get(name)
            .and_then(|&i| self.entries.get(i))
            .map(|(_, activity)| activity)
            .ok_or_else(|| RosterError::ActivityNotFound(name.to_string()))
    }

    /// Iterates over all activities in seed order.
    ///
    /// Every call starts a fresh traversal.
    pub fn list(&self) -> impl Iterator<Item = (&str, &RwLock<Activity>)> {
        self.entries
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }

    /// Returns the number of activities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog holds no activities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn seed(name: &str, participants: &[&str]) -> ActivitySeed {
        ActivitySeed {
            name: name.to_string(),
            description: format!("{name} description"),
            schedule: "Fridays".to_string(),
            max_participants: 10,
            participants: participants.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    fn make_catalog() -> ActivityCatalog {
        let Ok(catalog) = ActivityCatalog::from_seed([
            seed("Chess Club", &["michael@mergington.edu"]),
            seed("Art Club", &[]),
            seed("Gym Class", &["john@mergington.edu", "olivia@mergington.edu"]),
        ]) else {
            panic!("valid seed rejected");
        };
        catalog
    }

    #[test]
    fn get_finds_seeded_activity() {
        let catalog = make_catalog();
        let Ok(activity) = catalog.get("Gym Class") else {
            panic!("activity not found");
        };
        assert_eq!(activity.read().participants().len(), 2);
    }

    #[test]
    fn get_is_case_sensitive() {
        let catalog = make_catalog();
        let result = catalog.get("chess club");
        assert!(matches!(result, Err(RosterError::ActivityNotFound(name)) if name == "chess club"));
    }

    #[test]
    fn list_keeps_seed_order_and_restarts() {
        let catalog = make_catalog();
        let first: Vec<&str> = catalog.list().map(|(name, _)| name).collect();
        let second: Vec<&str> = catalog.list().map(|(name, _)| name).collect();
        assert_eq!(first, ["Chess Club", "Art Club", "Gym Class"]);
        assert_eq!(first, second);
    }

    #[test]
    fn len_and_is_empty() {
        let catalog = make_catalog();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());

        let Ok(empty) = ActivityCatalog::from_seed(Vec::new()) else {
            panic!("empty seed rejected");
        };
        assert!(empty.is_empty());
    }

    #[test]
    fn from_seed_rejects_duplicate_activity() {
        let result = ActivityCatalog::from_seed([seed("Chess Club", &[]), seed("Chess Club", &[])]);
        assert!(matches!(result, Err(SeedError::DuplicateActivity(name)) if name == "Chess Club"));
    }

    #[test]
    fn from_seed_rejects_duplicate_participant() {
        let result =
            ActivityCatalog::from_seed([seed("Chess Club", &["a@example.com", "a@example.com"])]);
        assert!(matches!(result, Err(SeedError::DuplicateParticipant { .. })));
    }

    #[test]
    fn from_seed_rejects_empty_participant() {
        let result = ActivityCatalog::from_seed([seed("Chess Club", &[""])]);
        assert!(matches!(result, Err(SeedError::InvalidParticipant { .. })));
    }

    #[test]
    fn from_seed_rejects_identifiers_requests_could_not_remove() {
        for bad in ["alice", "a b@x.y", "a@b@c"] {
            let result = ActivityCatalog::from_seed([seed("Chess Club", &[bad])]);
            assert!(
                matches!(&result, Err(SeedError::InvalidParticipant { participant, .. }) if participant == bad),
                "{bad} accepted"
            );
        }
    }
}
