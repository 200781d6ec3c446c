//! Scheduling-state computations over appointment collections.
//!
//! Pipeline: fetch (client crate) → window/partition → conflict check.
//! Everything here is pure and synchronous; calendar days are computed in
//! the offset of the supplied reference instant, never a rolling 24 hours.

mod conflict;
mod window;

pub use conflict::*;
pub use window::*;
