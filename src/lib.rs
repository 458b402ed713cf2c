//! # notification-service
//!
//! REST service for price notification records persisted as a single JSON
//! file.
//!
//! Every request reads the whole collection, applies one in-memory change
//! and writes the whole collection back. The "send" operation only flips a
//! status flag; no notification transport exists.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── NotificationService (service/)
//!     │
//!     └── NotificationStore (persistence/)
//!             ├── JsonFileStore
//!             └── InMemoryStore
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
