//! PART command handler.
//!
//! `PART <#channel>`
//!
//! The channel must exist before registration is even checked. Parting a
//! channel the session is not in does nothing.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};
use async_trait::async_trait;
use minirc_proto::MessageRef;
use tracing::debug;

/// Handler for PART command.
pub struct PartHandler;

#[async_trait]
impl Handler for PartHandler {
    async fn handle(&self, ctx: &mut Context<'_>, msg: &MessageRef<'_>) -> HandlerResult {
        let name = msg.args;
        let channel = ctx
            .matrix
            .channels
            .get(name)
            .ok_or_else(|| HandlerError::NoSuchChannel(name.to_string()))?;

        let nick = ctx.require_registered()?;

        match channel.part(ctx.session, &nick) {
            Some(recipients) => {
                ctx.session.remove_channel(name);
                debug!(channel = %name, nick = %nick, recipients, "PART");
            }
            None => debug!(channel = %name, nick = %nick, "PART from non-member ignored"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::Harness;

    #[tokio::test]
    async fn part_unknown_channel_fails_first() {
        let harness = Harness::new();
        let mut anon = harness.client();

        // Missing channel wins over missing registration.
        harness.run(&anon, "PART #nowhere").await;

        assert_eq!(
            anon.take(),
            vec![":irc.test 400 * :No channel exists with that name"]
        );
    }

    #[tokio::test]
    async fn part_existing_channel_requires_registration() {
        let harness = Harness::new();
        let alice = harness.registered("alice").await;
        let mut anon = harness.client();
        harness.run(&alice, "JOIN #test").await;

        harness.run(&anon, "PART #test").await;

        assert_eq!(anon.take(), vec![":irc.test 400 * :You need to register first"]);
    }

    #[tokio::test]
    async fn part_notifies_members_then_removes() {
        let harness = Harness::new();
        let mut alice = harness.registered("alice").await;
        let mut bob = harness.registered("bob").await;
        harness.run(&alice, "JOIN #test").await;
        harness.run(&bob, "JOIN #test").await;
        alice.take();
        bob.take();

        harness.run(&bob, "PART #test").await;

        assert_eq!(alice.take(), vec![":bob PART #test"]);
        assert_eq!(bob.take(), vec![":bob PART #test"]);
        let channel = harness.matrix.channels.get("#test").unwrap();
        assert_eq!(channel.member_nicks(), vec!["alice"]);
        assert!(!bob.session.in_channel("#test"));
    }

    #[tokio::test]
    async fn join_then_part_restores_membership() {
        let harness = Harness::new();
        let mut alice = harness.registered("alice").await;
        let bob = harness.registered("bob").await;
        harness.run(&alice, "JOIN #test").await;
        let before = harness.matrix.channels.get("#test").unwrap().member_nicks();

        harness.run(&bob, "JOIN #test").await;
        harness.run(&bob, "PART #test").await;

        let after = harness.matrix.channels.get("#test").unwrap().member_nicks();
        assert_eq!(before, after);
        assert!(bob.session.channels().is_empty());
        alice.take();
    }

    #[tokio::test]
    async fn part_when_not_member_is_silent() {
        let harness = Harness::new();
        let mut alice = harness.registered("alice").await;
        let mut bob = harness.registered("bob").await;
        harness.run(&alice, "JOIN #test").await;
        alice.take();

        harness.run(&bob, "PART #test").await;

        assert!(alice.take().is_empty());
        assert!(bob.take().is_empty());
    }

    #[tokio::test]
    async fn empty_channel_is_retained() {
        let harness = Harness::new();
        let mut alice = harness.registered("alice").await;
        harness.run(&alice, "JOIN #test").await;
        harness.run(&alice, "PART #test").await;
        alice.take();

        harness.run(&alice, "LIST").await;

        assert_eq!(
            alice.take(),
            vec![":irc.test 322 alice #test", ":irc.test 323 alice :End of LIST"]
        );
    }
}
