//! LIST command handler.
//!
//! `LIST`: one 322 per channel, oldest first, then 323. Arguments are ignored.

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};
use async_trait::async_trait;
use minirc_proto::{Message, MessageRef};

/// Handler for LIST command.
pub struct ListHandler;

#[async_trait]
impl Handler for ListHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _msg: &MessageRef<'_>) -> HandlerResult {
        let server_name = ctx.server_name();
        let nick = ctx.nick_or_star();

        for name in ctx.matrix.channels.names() {
            ctx.reply(Message::list_entry(server_name, &nick, &name));
        }
        ctx.reply(Message::list_end(server_name, &nick));
        Ok(())
    }
}
