//! Channel command handlers.
//!
//! Handles JOIN, PART, NAMES, LIST commands.

mod join;
mod list;
mod names;
mod part;

pub use join::JoinHandler;
pub use list::ListHandler;
pub use names::NamesHandler;
pub use part::PartHandler;
