//! NAMES command handler.
//!
//! `NAMES <#channel>`: member nicknames in join order.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};
use async_trait::async_trait;
use minirc_proto::{Message, MessageRef};

/// Handler for NAMES command.
pub struct NamesHandler;

#[async_trait]
impl Handler for NamesHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let name = msg.args;
        let channel = ctx
            .matrix
            .channels
            .get(name)
            .ok_or_else(|| HandlerError::NoSuchChannel(name.to_string()))?;

        let nicks = channel.member_nicks();
        ctx.reply(Message::names(
            ctx.server_name(),
            &ctx.nick_or_star(),
            channel.name(),
            &nicks,
        ));
        Ok(())
    }
}
