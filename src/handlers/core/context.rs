//! Command handler context and core types.

use crate::error::{HandlerError, HandlerResult};
use crate::state::{Matrix, Session};
use async_trait::async_trait;
use minirc_proto::{Message, MessageRef};
use std::sync::Arc;

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// Shared server state.
    pub matrix: &'a Arc<Matrix>,
    /// The session that sent the line.
    pub session: &'a Arc<Session>,
}

impl<'a> Context<'a> {
    pub fn new(matrix: &'a Arc<Matrix>, session: &'a Arc<Session>) -> Self {
        Self { matrix, session }
    }

    #[inline]
    pub fn server_name(&self) -> &str {
        &self.matrix.server_info.name
    }

    /// Nickname for numeric replies (`*` before NICK).
    pub fn nick_or_star(&self) -> String {
        self.session.nick_or_star()
    }

    /// Queue a reply for the issuing session.
    pub fn reply(&self, msg: Message) {
        self.session.send(msg);
    }

    /// The session's nickname, provided registration is complete.
    pub fn require_registered(&self) -> Result<String, HandlerError> {
        match self.session.nick() {
            Some(nick) if self.session.is_registered() => Ok(nick),
            _ => Err(HandlerError::NotRegistered),
        }
    }

    /// Send the 400 reply for a failed command.
    pub fn reply_error(&self, err: &HandlerError) {
        let reply = err.to_reply(self.server_name(), &self.nick_or_star());
        self.reply(reply);
    }
}

/// A command handler.
///
/// Handlers validate everything before mutating state, so a returned error
/// means nothing changed.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult;
}
