//! Domain layer: activities, participant identity, and the catalog.
//!
//! This module contains the roster domain model: the validated
//! participant identifier, the activity aggregate with its roster, the
//! fixed activity catalog with per-activity locking, and the seed data
//! the catalog is built from.

pub mod activity;
pub mod catalog;
pub mod participant_id;
pub mod seed;

pub use activity::{Activity, ActivitySnapshot};
pub use catalog::ActivityCatalog;
pub use participant_id::ParticipantId;
pub use seed::ActivitySeed;
