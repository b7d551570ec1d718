//! JOIN command handler.
//!
//! `JOIN <#channel>`
//!
//! Creates the channel on first use. Every JOIN, repeated ones included, is
//! announced to all members.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};
use async_trait::async_trait;
use minirc_proto::{ChannelExt, MessageRef};
use tracing::debug;

/// Handler for JOIN command.
pub struct JoinHandler;

#[async_trait]
impl Handler for JoinHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let nick = ctx.require_registered()?;

        let name = msg.args;
        if !name.is_channel_name() {
            return Err(HandlerError::InvalidChannelName(name.to_string()));
        }

        let channel = ctx.matrix.channels.get_or_create(name);
        let outcome = channel.join(ctx.session, &nick);
        if outcome.added {
            ctx.session.add_channel(name);
        }

        debug!(
            channel = %name,
            nick = %nick,
            added = outcome.added,
            recipients = outcome.recipients,
            "JOIN"
        );
        Ok(())
    }
}
