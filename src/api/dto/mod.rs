//! Data Transfer Objects for REST request serialization.
//!
//! Responses reuse the domain [`crate::domain::Notification`] directly since
//! the stored and wire shapes are identical.

pub mod notification_dto;

pub use notification_dto::*;
