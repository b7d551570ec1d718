//! TIME command handler.
//!
//! `TIME`
//!
//! Returns the local time on the server.

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};
use async_trait::async_trait;
use minirc_proto::{Message, MessageRef};

/// ISO-8601 local time with millisecond precision.
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Handler for TIME command.
pub struct TimeHandler;

#[async_trait]
impl Handler for TimeHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _msg: &MessageRef<'_>) -> HandlerResult {
        let now = chrono::Local::now();
        let time_string = now.format(TIME_FORMAT).to_string();

        ctx.reply(Message::time(
            ctx.server_name(),
            &ctx.nick_or_star(),
            &time_string,
        ));
        Ok(())
    }
}
