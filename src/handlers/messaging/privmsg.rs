//! PRIVMSG command handler.
//!
//! `PRIVMSG <target> :<text>`
//!
//! A `#name` target fans out to every channel member, sender included.
//! Membership is not required to send. Any other target is looked up as a
//! nickname and receives the only copy.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};
use async_trait::async_trait;
use minirc_proto::{ChannelExt, Message, MessageRef};
use tracing::debug;

/// Handler for PRIVMSG command.
pub struct PrivmsgHandler;

#[async_trait]
impl Handler for PrivmsgHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let nick = ctx.require_registered()?;

        let (target, text) = msg
            .split_trailing()
            .ok_or(HandlerError::InvalidArgs("PRIVMSG"))?;
        let target = target.trim();
        let out = Message::privmsg(&nick, target, text);

        if target.is_channel_name() {
            let channel = ctx
                .matrix
                .channels
                .get(target)
                .ok_or_else(|| HandlerError::NoSuchChannel(target.to_string()))?;
            let recipients = channel.broadcast(out);
            debug!(from = %nick, channel = %target, recipients, "PRIVMSG to channel");
        } else {
            let recipient = ctx
                .matrix
                .clients
                .lookup(target)
                .ok_or_else(|| HandlerError::NoSuchUser(target.to_string()))?;
            let delivery = recipient.send(out);
            debug!(from = %nick, to = %target, ?delivery, "PRIVMSG to user");
        }
        Ok(())
    }
}
