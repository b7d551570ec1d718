//! Client registry: every connected session and the nickname index.

use crate::error::HandlerError;
use crate::state::dashmap_ext::DashMapExt;
use crate::state::{Session, Uid};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use tracing::debug;

/// Manages connected sessions and nickname claims.
///
/// Invariant: a nickname maps to at most one live session. Entries pointing
/// at a session that already left the registry count as free.
#[derive(Default)]
pub struct ClientManager {
    sessions: DashMap<Uid, Arc<Session>>,
    nicks: DashMap<String, Uid>,
}

impl ClientManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a freshly accepted session.
    pub fn insert(&self, session: Arc<Session>) {
        self.sessions.insert(session.uid.clone(), session);
    }

    /// Remove a session and release its nickname.
    pub fn remove(&self, session: &Session) {
        self.sessions.remove(&session.uid);
        if let Some(nick) = session.nick() {
            self.nicks.remove_if(&nick, |_, uid| *uid == session.uid);
        }
    }

    /// Claim `nick` for `session`, releasing its previous nickname.
    ///
    /// Re-claiming the session's own nickname is a no-op success.
    pub fn claim_nick(&self, session: &Session, nick: &str) -> Result<(), HandlerError> {
        match self.nicks.entry(nick.to_string()) {
            Entry::Occupied(mut entry) => {
                if *entry.get() != session.uid {
                    if self.sessions.contains_key(entry.get()) {
                        return Err(HandlerError::NicknameInUse(nick.to_string()));
                    }
                    debug!(nick, stale = %entry.get(), "Reclaiming stale nickname");
                    entry.insert(session.uid.clone());
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(session.uid.clone());
            }
        }

        if let Some(old) = session.set_nick(nick)
            && old != nick
        {
            self.nicks.remove_if(&old, |_, uid| *uid == session.uid);
        }
        Ok(())
    }

    /// Resolve a nickname to its live session.
    pub fn lookup(&self, nick: &str) -> Option<Arc<Session>> {
        let uid = self.nicks.get_cloned(nick)?;
        self.sessions.get_cloned(&uid)
    }

    #[cfg(test)]
    pub fn get(&self, uid: &str) -> Option<Arc<Session>> {
        self.sessions.get_cloned(uid)
    }

    /// Snapshot of every connected session, registered or not.
    pub fn all(&self) -> Vec<Arc<Session>> {
        self.sessions.values_cloned()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
