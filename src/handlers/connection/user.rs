//! USER command handler.
//!
//! `USER <username> 0 * :<realname>`
//!
//! Completes registration once a nickname is set and replies with 001.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};
use async_trait::async_trait;
use minirc_proto::{Message, MessageRef};
use tracing::info;

/// Handler for USER command.
pub struct UserHandler;

/// Split `<username> 0 * :<realname>` into username and realname.
fn parse_user_args(msg: &MessageRef<'_>) -> Result<(String, String), HandlerError> {
    let invalid = || HandlerError::InvalidArgs("USER");

    let (head, realname) = msg.split_trailing().ok_or_else(invalid)?;
    if realname.is_empty() {
        return Err(invalid());
    }

    let mut params: Vec<&str> = head.split(' ').collect();
    while params.last() == Some(&"") {
        params.pop();
    }

    match params.as_slice() {
        [username, "0", "*"]
            if !username.is_empty() && !username.contains(char::is_whitespace) =>
        {
            Ok((username.to_string(), realname.to_string()))
        }
        _ => Err(invalid()),
    }
}

#[async_trait]
impl Handler for UserHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let nick = ctx.session.nick().ok_or(HandlerError::NoNickname)?;

        if ctx.session.username().is_some() {
            return Err(HandlerError::AlreadyRegistered);
        }

        let (username, realname) = parse_user_args(msg)?;
        ctx.session.set_user(&username, &realname);

        info!(
            uid = %ctx.session.uid,
            nick = %nick,
            user = %username,
            realname = ?ctx.session.realname(),
            addr = %ctx.session.addr,
            "Client registered"
        );

        ctx.reply(Message::welcome(ctx.server_name(), &nick));
        Ok(())
    }
}
