//! The Matrix: shared server state.
//!
//! Holds both registries plus server identity, and implements the operations
//! that must keep them consistent with each other (session teardown).

use super::managers::{ChannelManager, ClientManager};
use super::session::{RegistrationState, Session};
use super::uid::UidGenerator;
use crate::config::Config;
use minirc_proto::Message;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Server identity used in replies.
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    /// INFO text.
    pub info: String,
}

/// Shared state for every connection.
pub struct Matrix {
    pub server_info: ServerInfo,
    pub clients: ClientManager,
    pub channels: ChannelManager,
    pub uid_gen: UidGenerator,
}

impl Matrix {
    pub fn new(config: &Config) -> Self {
        Self {
            server_info: ServerInfo {
                name: config.server.name.clone(),
                info: config.server.info.clone(),
            },
            clients: ClientManager::new(),
            channels: ChannelManager::new(),
            uid_gen: UidGenerator::new(),
        }
    }

    /// Create and register a session for a new connection.
    pub fn connect(&self, addr: SocketAddr, outbound: mpsc::Sender<Arc<str>>) -> Arc<Session> {
        let session = Arc::new(Session::new(self.uid_gen.next(), addr, outbound));
        self.clients.insert(Arc::clone(&session));
        crate::metrics::user_connected();
        debug!(uid = %session.uid, %addr, "Session registered");
        session
    }

    /// Tear a session down: QUIT notice, channel and registry removal,
    /// delivery endpoint released.
    ///
    /// Runs at most once per session; later calls return false.
    pub fn disconnect(&self, session: &Session) -> bool {
        let Some(previous) = session.begin_close() else {
            return false;
        };

        if previous == RegistrationState::Registered
            && let Some(nick) = session.nick()
        {
            let line: Arc<str> = Arc::from(Message::quit(&nick).to_string());
            for client in self.clients.all() {
                client.send_line(Arc::clone(&line));
            }
        }

        for name in session.channels() {
            if let Some(channel) = self.channels.get(&name) {
                channel.remove(&session.uid);
            }
            session.remove_channel(&name);
        }

        self.clients.remove(session);
        session.release_outbound();
        crate::metrics::user_disconnected();

        info!(
            uid = %session.uid,
            nick = ?session.nick(),
            registered = previous == RegistrationState::Registered,
            "Session closed"
        );
        true
    }
}
