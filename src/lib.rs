//! # activity-roster
//!
//! REST service managing sign-up rosters for a fixed catalog of named
//! activities: list activities, sign a participant up by email, and
//! remove a participant.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── RosterService (service/)
//!     │
//!     └── ActivityCatalog (domain/)
//!           └── per-activity RwLock<Activity>
//! ```
//!
//! The catalog is seeded once at startup and lives for the process
//! lifetime. Nothing is persisted.

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
