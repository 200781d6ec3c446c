//! CareLink REST client.
//!
//! Async client for the CareLink backend: a shared [`ApiClient`] bound to
//! an explicit [`Session`], with per-entity facades whose derived queries
//! (upcoming, past, conflict check, search, recent) delegate the pure
//! computation to `carelink-core`.
//!
//! Fetch failures are always surfaced: a 404 is [`ApiError::NotFound`], not
//! an empty list, and a failed conflict check is an error, not "no
//! conflict".

pub mod client;
pub mod error;
pub mod services;
pub mod session;

pub use client::ApiClient;
pub use error::{not_found_as_empty, ApiError, ApiResult};
pub use services::{AppointmentsApi, ChatApi, LogsApi, NotificationsApi};
pub use session::Session;
