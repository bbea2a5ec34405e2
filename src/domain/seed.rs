//! Catalog seed data: the built-in activity list and JSON seed files.
//!
//! A seed file is a JSON array whose order becomes the catalog order:
//!
//! ```json
//! [
//!   {
//!     "name": "Chess Club",
//!     "description": "Learn strategies and compete in chess tournaments",
//!     "schedule": "Fridays, 3:30 PM - 5:00 PM",
//!     "max_participants": 12,
//!     "participants": ["michael@mergington.edu"]
//!   }
//! ]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::SeedError;

/// One activity as described by seed data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActivitySeed {
    /// Activity name (catalog key).
    pub name: String,
    /// Description.
    pub description: String,
    /// Schedule.
    pub schedule: String,
    /// Advertised capacity.
    pub max_participants: u32,
    /// Initial roster.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivitySeed {
    fn new(
        name: &str,
        description: &str,
        schedule: &str,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: participants.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}

/// Returns the built-in school activity catalog.
#[must_use]
pub fn default_seed() -> Vec<ActivitySeed> {
    vec![
        ActivitySeed::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        ActivitySeed::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            &["liam@mergington.edu"],
        ),
        ActivitySeed::new(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            &["ava@mergington.edu"],
        ),
        ActivitySeed::new(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            &["amelia@mergington.edu"],
        ),
        ActivitySeed::new(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            &["ella@mergington.edu"],
        ),
        ActivitySeed::new(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
            &["james@mergington.edu", "benjamin@mergington.edu"],
        ),
        ActivitySeed::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            &["charlotte@mergington.edu", "henry@mergington.edu"],
        ),
    ]
}

/// Parses seed data from a JSON string.
///
/// # Errors
///
/// Returns [`SeedError::Json`] if the input is not a JSON array of
/// activity seeds.
pub fn parse_seed(json: &str) -> Result<Vec<ActivitySeed>, SeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a JSON seed file.
///
/// # Errors
///
/// Returns [`SeedError::Io`] if the file cannot be read, or
/// [`SeedError::Json`] if its contents are malformed.
pub fn load_seed_file(path: &Path) -> Result<Vec<ActivitySeed>, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&contents)
}
