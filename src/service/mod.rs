//! Service layer: roster business logic.
//!
//! [`RosterService`] enforces the roster invariants on top of the
//! [`super::domain::ActivityCatalog`].

pub mod roster_service;

pub use roster_service::{RosterService, SignupConfirmation, UnregisterConfirmation};
