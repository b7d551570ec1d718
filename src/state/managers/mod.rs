//! Registries owned by the [`Matrix`](crate::state::Matrix).

pub mod channel;
pub mod client;

pub use channel::ChannelManager;
pub use client::ClientManager;
