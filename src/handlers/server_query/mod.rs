//! Server query handlers.
//!
//! Handles TIME and INFO. Neither requires registration.

mod info;
mod time;

pub use info::InfoHandler;
pub use time::TimeHandler;
