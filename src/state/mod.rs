//! State management module.
//!
//! Contains the Matrix (shared server state) and related entities.

mod channel;
mod dashmap_ext;
pub mod managers;
mod matrix;
mod session;
mod uid;

pub use channel::{Channel, JoinOutcome};
pub use matrix::{Matrix, ServerInfo};
pub use session::{Delivery, RegistrationState, Session};
pub use uid::{Uid, UidGenerator};

#[cfg(test)]
pub(crate) use session::test_support;
