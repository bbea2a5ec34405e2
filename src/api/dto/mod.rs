//! Data Transfer Objects for REST request/response serialization.

pub mod activity_dto;

pub use activity_dto::*;
