//! QUIT command handler.
//!
//! `QUIT [anything]`
//!
//! Announces the departure (registered sessions only), removes the session
//! from every channel and registry, and closes the connection once queued
//! output has been flushed.

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};
use async_trait::async_trait;
use minirc_proto::MessageRef;
use tracing::info;

/// Handler for QUIT command.
pub struct QuitHandler;

#[async_trait]
impl Handler for QuitHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _msg: &MessageRef<'_>) -> HandlerResult {
        info!(uid = %ctx.session.uid, nick = ?ctx.session.nick(), "Client quit");

        // The connection loop sees the closed session and stops reading.
        ctx.matrix.disconnect(ctx.session);
        Ok(())
    }
}
