//! Channel registry.
//!
//! Channels are created on first JOIN and retained for the server's lifetime,
//! including after their last member leaves.

use crate::state::Channel;
use crate::state::dashmap_ext::DashMapExt;
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Manages all channel state.
#[derive(Default)]
pub struct ChannelManager {
    channels: DashMap<String, Arc<Channel>>,
    next_seq: AtomicU64,
}

impl ChannelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch `name`, creating it if needed.
    ///
    /// Creation and publication happen under the map's shard lock, so two
    /// concurrent callers always end up with the same `Channel`.
    pub fn get_or_create(&self, name: &str) -> Arc<Channel> {
        if let Some(channel) = self.channels.get_cloned(name) {
            return channel;
        }

        self.channels
            .entry(name.to_string())
            .or_insert_with(|| {
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                info!(channel = %name, "Channel created");
                crate::metrics::channel_created();
                Arc::new(Channel::new(name, seq))
            })
            .clone()
    }

    pub fn get(&self, name: &str) -> Option<Arc<Channel>> {
        self.channels.get_cloned(name)
    }

    #[cfg(test)]
    pub fn exists(&self, name: &str) -> bool {
        self.channels.contains_key(name)
    }

    /// Snapshot of every channel, oldest first.
    pub fn all(&self) -> Vec<Arc<Channel>> {
        let mut channels = self.channels.values_cloned();
        channels.sort_by_key(|c| c.created());
        channels
    }

    /// Channel names, oldest first.
    pub fn names(&self) -> Vec<String> {
        self.all().iter().map(|c| c.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
