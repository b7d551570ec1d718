//! Per-connection session state.
//!
//! A [`Session`] is shared (`Arc`) between its connection task, the client
//! registry and the member lists of the channels it joined. Only the owning
//! connection task mutates identity and membership; everyone else reads.

use super::uid::Uid;
use minirc_proto::{Message, NO_NICK};
use parking_lot::{Mutex, RwLock};
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Notify, mpsc};
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, info, warn};

/// Registration progress of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationState {
    /// Neither nickname nor username set.
    Unregistered,
    /// Nickname claimed, USER not yet accepted.
    NickSet,
    /// NICK and USER both done.
    Registered,
    /// Terminal. Set once by QUIT or transport failure.
    Closed,
}

#[derive(Debug)]
struct Identity {
    nick: Option<String>,
    username: Option<String>,
    realname: Option<String>,
    state: RegistrationState,
}

/// Outcome of queueing one line for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Queued,
    /// SendQ full; the line was dropped and the session asked to close.
    Dropped,
    /// The session already released its outbound queue.
    Closed,
}

/// Server-side state for one client connection.
#[derive(Debug)]
pub struct Session {
    pub uid: Uid,
    pub addr: SocketAddr,
    identity: RwLock<Identity>,
    /// Joined channel names, in join order.
    channels: Mutex<Vec<String>>,
    /// Delivery endpoint; `None` once the session closed.
    outbound: Mutex<Option<mpsc::Sender<Arc<str>>>>,
    /// Set when the session must be torn down by its connection task.
    close_requested: AtomicBool,
    close_signal: Notify,
}

impl Session {
    pub fn new(uid: Uid, addr: SocketAddr, outbound: mpsc::Sender<Arc<str>>) -> Self {
        Self {
            uid,
            addr,
            identity: RwLock::new(Identity {
                nick: None,
                username: None,
                realname: None,
                state: RegistrationState::Unregistered,
            }),
            channels: Mutex::new(Vec::new()),
            outbound: Mutex::new(Some(outbound)),
            close_requested: AtomicBool::new(false),
            close_signal: Notify::new(),
        }
    }

    pub fn nick(&self) -> Option<String> {
        self.identity.read().nick.clone()
    }

    /// Nickname for numeric replies, `*` until one is set.
    pub fn nick_or_star(&self) -> String {
        self.nick().unwrap_or_else(|| NO_NICK.to_string())
    }

    pub fn username(&self) -> Option<String> {
        self.identity.read().username.clone()
    }

    pub fn realname(&self) -> Option<String> {
        self.identity.read().realname.clone()
    }

    pub fn state(&self) -> RegistrationState {
        self.identity.read().state
    }

    pub fn is_registered(&self) -> bool {
        self.state() == RegistrationState::Registered
    }

    pub fn is_closed(&self) -> bool {
        self.state() == RegistrationState::Closed
    }

    /// Record a new nickname, returning the previous one.
    ///
    /// Moves `Unregistered` to `NickSet`; later states are kept.
    pub fn set_nick(&self, nick: &str) -> Option<String> {
        let mut identity = self.identity.write();
        if identity.state == RegistrationState::Unregistered {
            identity.state = RegistrationState::NickSet;
        }
        identity.nick.replace(nick.to_string())
    }

    /// Complete registration. Caller has checked the preconditions.
    pub fn set_user(&self, username: &str, realname: &str) {
        let mut identity = self.identity.write();
        identity.username = Some(username.to_string());
        identity.realname = Some(realname.to_string());
        identity.state = RegistrationState::Registered;
    }

    /// Enter `Closed`, returning the state it left.
    ///
    /// Returns `None` when the session was already closed, so cleanup runs
    /// only once. The outbound queue stays open until [`Self::release_outbound`].
    pub fn begin_close(&self) -> Option<RegistrationState> {
        let mut identity = self.identity.write();
        if identity.state == RegistrationState::Closed {
            return None;
        }
        Some(std::mem::replace(
            &mut identity.state,
            RegistrationState::Closed,
        ))
    }

    /// Ask the owning connection task to tear this session down.
    ///
    /// Other sessions' commands cannot run teardown themselves; they flag it
    /// and the connection loop picks it up.
    pub fn request_close(&self, reason: &'static str) {
        if !self.close_requested.swap(true, Ordering::AcqRel) {
            info!(uid = %self.uid, reason, "Disconnect requested");
            self.close_signal.notify_one();
        }
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested.load(Ordering::Acquire)
    }

    /// Resolves once [`Self::request_close`] has been called.
    pub async fn closing(&self) {
        if self.close_requested() {
            return;
        }
        self.close_signal.notified().await;
    }

    /// Drop the delivery endpoint. The writer drains what is queued, then stops.
    pub fn release_outbound(&self) {
        self.outbound.lock().take();
    }

    /// Queue a message for this session.
    pub fn send(&self, msg: Message) -> Delivery {
        self.send_line(Arc::from(msg.to_string()))
    }

    /// Queue an already rendered line. Never blocks.
    pub fn send_line(&self, line: Arc<str>) -> Delivery {
        let outbound = self.outbound.lock();
        let Some(tx) = outbound.as_ref() else {
            return Delivery::Closed;
        };

        match tx.try_send(line) {
            Ok(()) => Delivery::Queued,
            Err(TrySendError::Full(_)) => {
                warn!(uid = %self.uid, "SendQ exceeded, dropping line");
                crate::metrics::record_dropped_line();
                self.request_close("SendQ exceeded");
                Delivery::Dropped
            }
            Err(TrySendError::Closed(_)) => {
                debug!(uid = %self.uid, "Writer gone, dropping line");
                Delivery::Closed
            }
        }
    }

    /// Record membership of `channel`. Returns false if already a member.
    pub fn add_channel(&self, channel: &str) -> bool {
        let mut channels = self.channels.lock();
        if channels.iter().any(|c| c == channel) {
            return false;
        }
        channels.push(channel.to_string());
        true
    }

    pub fn remove_channel(&self, channel: &str) -> bool {
        let mut channels = self.channels.lock();
        let before = channels.len();
        channels.retain(|c| c != channel);
        channels.len() != before
    }

    #[cfg(test)]
    pub fn in_channel(&self, channel: &str) -> bool {
        self.channels.lock().iter().any(|c| c == channel)
    }

    /// Snapshot of joined channel names.
    pub fn channels(&self) -> Vec<String> {
        self.channels.lock().clone()
    }
}
