//! PING handler.

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};
use async_trait::async_trait;
use minirc_proto::{Message, MessageRef};

/// Handler for PING command.
pub struct PingHandler;

#[async_trait]
impl Handler for PingHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        // PING <anything>: echoed back verbatim
        ctx.reply(Message::pong(msg.args));
        Ok(())
    }
}
