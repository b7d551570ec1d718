//! Command handler registry and dispatch.
//!
//! The `Registry` maps command tokens to handlers and is the entry point for
//! interpreting one inbound line on behalf of a session.

use super::context::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{
    channel::{JoinHandler, ListHandler, NamesHandler, PartHandler},
    connection::{NickHandler, PingHandler, QuitHandler, UserHandler},
    messaging::PrivmsgHandler,
    server_query::{InfoHandler, TimeHandler},
};
use crate::telemetry::{CommandTimer, spans};
use minirc_proto::{MessageRef, ProtocolError};
use std::collections::HashMap;
use tracing::{Instrument, debug};

/// Registry of command handlers.
pub struct Registry {
    handlers: HashMap<&'static str, Box<dyn Handler>>,
}

impl Registry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut handlers: HashMap<&'static str, Box<dyn Handler>> = HashMap::new();

        // Connection/registration handlers
        handlers.insert("NICK", Box::new(NickHandler));
        handlers.insert("USER", Box::new(UserHandler));
        handlers.insert("QUIT", Box::new(QuitHandler));
        handlers.insert("PING", Box::new(PingHandler));

        // Channel handlers
        handlers.insert("JOIN", Box::new(JoinHandler));
        handlers.insert("PART", Box::new(PartHandler));
        handlers.insert("NAMES", Box::new(NamesHandler));
        handlers.insert("LIST", Box::new(ListHandler));

        // Messaging handlers
        handlers.insert("PRIVMSG", Box::new(PrivmsgHandler));

        // Server query handlers
        handlers.insert("TIME", Box::new(TimeHandler));
        handlers.insert("INFO", Box::new(InfoHandler));

        Self { handlers }
    }

    /// Commands this registry understands.
    pub fn commands(&self) -> Vec<&'static str> {
        let mut commands: Vec<_> = self.handlers.keys().copied().collect();
        commands.sort_unstable();
        commands
    }

    /// Dispatch a parsed line to its handler.
    ///
    /// Command tokens match exactly; `nick` is not `NICK`.
    pub async fn dispatch(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let Some((&cmd_name, handler)) = self.handlers.get_key_value(msg.command) else {
            crate::metrics::record_command_error("unknown", "unknown_command");
            return Err(HandlerError::UnknownCommand(msg.command.to_string()));
        };

        let nick = ctx.session.nick();
        let span = spans::command(cmd_name, &ctx.session.uid, nick.as_deref());
        let _timer = CommandTimer::new(cmd_name);

        let result = handler.handle(ctx, msg).instrument(span).await;

        if let Err(ref e) = result {
            crate::metrics::record_command_error(cmd_name, e.error_code());
            debug!(command = %cmd_name, error = %e, "Command error");
        }

        result
    }

    /// Interpret one inbound line for a session.
    ///
    /// Blank lines are ignored. A failing command produces exactly one error
    /// reply to the issuer.
    pub async fn interpret(&self, ctx: &mut Context<'_>, line: &str) {
        let msg = match MessageRef::parse(line) {
            Ok(msg) => msg,
            Err(ProtocolError::EmptyMessage) => return,
            Err(e) => {
                debug!(error = %e, "Unparseable line");
                return;
            }
        };

        if let Err(e) = self.dispatch(ctx, &msg).await {
            ctx.reply_error(&e);
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
