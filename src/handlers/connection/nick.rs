//! NICK command handler.
//!
//! `NICK <nickname>`
//!
//! Valid in any state. Claims the nickname in the client registry and
//! releases the previous one. Silent on success.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};
use async_trait::async_trait;
use minirc_proto::{MessageRef, NickExt};
use tracing::debug;

/// Handler for NICK command.
pub struct NickHandler;

#[async_trait]
impl Handler for NickHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        // The whole blob is the nickname; trailing spaces make it invalid.
        let nick = msg.args;

        if !nick.is_valid_nick() {
            return Err(HandlerError::InvalidNickname(nick.to_string()));
        }

        let old = ctx.session.nick();
        ctx.matrix.clients.claim_nick(ctx.session, nick)?;

        debug!(uid = %ctx.session.uid, old = ?old, new = %nick, "Nick set");
        Ok(())
    }
}
