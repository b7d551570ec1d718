//! INFO command handler.
//!
//! `INFO`: the configured server description.

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};
use async_trait::async_trait;
use minirc_proto::{Message, MessageRef};

/// Handler for INFO command.
pub struct InfoHandler;

#[async_trait]
impl Handler for InfoHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _msg: &MessageRef<'_>) -> HandlerResult {
        let info = &ctx.matrix.server_info.info;
        ctx.reply(Message::info(ctx.server_name(), &ctx.nick_or_star(), info));
        Ok(())
    }
}
