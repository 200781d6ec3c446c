//! CareLink Core Library
//!
//! Pure, synchronous computations the CareLink patient client performs over
//! collections already fetched from the backend.
//!
//! # Architecture
//!
//! ```text
//! REST backend ──fetch──▶ Vec<Appointment> / Vec<ChatMessage>
//!                         Vec<Notification> / Vec<LogEvent>
//!                                   │
//!                  ┌────────────────┼────────────────┐
//!                  │                │                │
//!                  ▼                ▼                ▼
//!          Filter/Sort       Time-Window        Conflict
//!            Pipeline         Classifier        Detector
//!          (pipeline)      (schedule::window) (schedule::conflict)
//! ```
//!
//! # Core Principle
//!
//! **One bad record never aborts a computation.** Timestamps travel as
//! RFC 3339 strings and are parsed lazily; a record with a malformed
//! timestamp is skipped by temporal logic instead of failing the whole
//! collection.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Appointment, ChatMessage, Notification, LogEvent)
//! - [`pipeline`]: Generic filter/sort pipeline shared by all four entities
//! - [`schedule`]: Time-window classification and conflict detection

pub mod models;
pub mod pipeline;
pub mod schedule;

// Re-export commonly used types
pub use models::{
    Appointment, AppointmentStatus, Attachment, ChatMessage, LogEvent, LogLevel, MessageType,
    Notification, NotificationType, Priority, ValidationError, DEFAULT_DURATION_MINUTES,
};
pub use pipeline::{Flagged, Pipeline, Prioritized, Searchable, Timestamped};
pub use schedule::{
    has_conflict, in_window, is_past, is_upcoming, next_appointment, partition, upcoming_count,
    window_bounds, SchedulePartition, TimeWindow,
};
