//! Channel entity: a named broadcast group.
//!
//! All membership changes and broadcasts for one channel take the same lock,
//! so every member observes that channel's events in one order.

use super::session::{Delivery, Session};
use super::uid::Uid;
use minirc_proto::Message;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tracing::debug;

#[derive(Debug)]
struct Member {
    uid: Uid,
    session: Weak<Session>,
}

/// A channel and its members (in join order).
#[derive(Debug)]
pub struct Channel {
    name: String,
    /// Creation sequence number, used to order LIST output.
    created: u64,
    members: Mutex<Vec<Member>>,
}

/// Result of a JOIN on one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOutcome {
    /// False when the session was already a member.
    pub added: bool,
    /// Members the JOIN notice was queued for.
    pub recipients: usize,
}

impl Channel {
    pub fn new(name: impl Into<String>, created: u64) -> Self {
        Self {
            name: name.into(),
            created,
            members: Mutex::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created(&self) -> u64 {
        self.created
    }

    /// Add `session` (if absent) and announce the JOIN to every member,
    /// the joiner included.
    pub fn join(&self, session: &Arc<Session>, nick: &str) -> JoinOutcome {
        let mut members = self.members.lock();
        let added = !members.iter().any(|m| m.uid == session.uid);
        if added {
            members.push(Member {
                uid: session.uid.clone(),
                session: Arc::downgrade(session),
            });
        }
        let recipients = fan_out(&mut members, Message::join(nick, &self.name));
        JoinOutcome { added, recipients }
    }

    /// Announce the PART to every member, then remove `session`.
    ///
    /// Returns `None` (and sends nothing) if it was not a member.
    pub fn part(&self, session: &Session, nick: &str) -> Option<usize> {
        let mut members = self.members.lock();
        if !members.iter().any(|m| m.uid == session.uid) {
            return None;
        }
        let recipients = fan_out(&mut members, Message::part(nick, &self.name));
        members.retain(|m| m.uid != session.uid);
        Some(recipients)
    }

    /// Drop a member without any notice.
    pub fn remove(&self, uid: &str) -> bool {
        let mut members = self.members.lock();
        let before = members.len();
        members.retain(|m| m.uid != uid);
        members.len() != before
    }

    /// Queue `msg` for every current member. Returns the recipient count.
    pub fn broadcast(&self, msg: Message) -> usize {
        let mut members = self.members.lock();
        fan_out(&mut members, msg)
    }

    #[cfg(test)]
    pub fn is_member(&self, uid: &str) -> bool {
        self.members.lock().iter().any(|m| m.uid == uid)
    }

    /// Snapshot of live members in join order.
    pub fn members(&self) -> Vec<Arc<Session>> {
        self.members
            .lock()
            .iter()
            .filter_map(|m| m.session.upgrade())
            .collect()
    }

    /// Current nicknames of the members, in join order.
    pub fn member_nicks(&self) -> Vec<String> {
        self.members().iter().filter_map(|s| s.nick()).collect()
    }

    #[cfg(test)]
    pub fn member_count(&self) -> usize {
        self.members.lock().len()
    }
}

/// Render once, queue for each live member, prune entries whose session is gone.
///
/// A member whose SendQ overflows is dropped from the channel here; the
/// session itself has been flagged and its connection task finishes teardown.
fn fan_out(members: &mut Vec<Member>, msg: Message) -> usize {
    let line: Arc<str> = Arc::from(msg.to_string());
    let mut recipients = 0;
    members.retain(|m| match m.session.upgrade() {
        Some(session) => match session.send_line(Arc::clone(&line)) {
            Delivery::Queued => {
                recipients += 1;
                true
            }
            Delivery::Dropped => {
                debug!(uid = %m.uid, "Removing member after SendQ overflow");
                false
            }
            Delivery::Closed => true,
        },
        None => false,
    });
    crate::metrics::record_fanout(recipients);
    recipients
}
