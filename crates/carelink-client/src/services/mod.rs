//! Per-entity service facades over the shared [`crate::ApiClient`].

mod appointments;
mod chat;
mod logs;
mod notifications;

pub use appointments::*;
pub use chat::*;
pub use logs::*;
pub use notifications::*;
