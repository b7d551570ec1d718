//! Inbound line splitting and outbound message rendering.
//!
//! Inbound lines are split into a command token and a single argument blob;
//! each command interprets its own blob. Outbound lines are built as
//! [`Message`] values and rendered with `Display`.

use std::fmt;

use crate::error::{ProtocolError, Result};
use crate::response::Response;

/// A borrowed view of one inbound line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageRef<'a> {
    /// Text up to the first space.
    pub command: &'a str,
    /// Everything after the first space, untouched. Empty when absent.
    pub args: &'a str,
}

impl<'a> MessageRef<'a> {
    /// Split a line (terminator already stripped) into command and arguments.
    ///
    /// Returns [`ProtocolError::EmptyMessage`] for blank lines.
    ///
    /// ```
    /// use minirc_proto::MessageRef;
    ///
    /// let msg = MessageRef::parse("USER alice 0 * :Alice A").unwrap();
    /// assert_eq!(msg.command, "USER");
    /// assert_eq!(msg.args, "alice 0 * :Alice A");
    ///
    /// let msg = MessageRef::parse("LIST").unwrap();
    /// assert_eq!(msg.args, "");
    /// ```
    pub fn parse(line: &'a str) -> Result<Self> {
        if line.trim().is_empty() {
            return Err(ProtocolError::EmptyMessage);
        }

        let (command, args) = line.split_once(' ').unwrap_or((line, ""));
        Ok(Self { command, args })
    }

    /// Split the argument blob at its first `:`.
    ///
    /// Returns `(head, trailing)`; `None` when there is no colon.
    pub fn split_trailing(&self) -> Option<(&'a str, &'a str)> {
        self.args.split_once(':')
    }
}

/// An outbound protocol line.
///
/// Renders as `[:prefix ]command[ params...][ :trailing]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Origin (server name or nickname).
    pub prefix: Option<String>,
    /// Command word or 3-digit numeric.
    pub command: String,
    /// Middle parameters, joined with single spaces.
    pub params: Vec<String>,
    /// Final parameter, rendered after ` :`.
    pub trailing: Option<String>,
}

impl Message {
    /// Create a message with just a command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            prefix: None,
            command: command.into(),
            params: Vec::new(),
            trailing: None,
        }
    }

    /// Set the origin prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Append a middle parameter.
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Set the trailing parameter.
    pub fn with_trailing(mut self, trailing: impl Into<String>) -> Self {
        self.trailing = Some(trailing.into());
        self
    }

    /// A numeric reply from `server` addressed to `target`.
    pub fn numeric(server: &str, response: Response, target: &str) -> Self {
        Self::new(response.to_string())
            .with_prefix(server)
            .with_param(target)
    }

    /// `:<server> 001 <nick> :Welcome to the IRC network, <nick>`
    pub fn welcome(server: &str, nick: &str) -> Self {
        Self::numeric(server, Response::RPL_WELCOME, nick)
            .with_trailing(format!("Welcome to the IRC network, {nick}"))
    }

    /// `:<server> 322 <nick> <channel>`
    pub fn list_entry(server: &str, nick: &str, channel: &str) -> Self {
        Self::numeric(server, Response::RPL_LIST, nick).with_param(channel)
    }

    /// `:<server> 323 <nick> :End of LIST`
    pub fn list_end(server: &str, nick: &str) -> Self {
        Self::numeric(server, Response::RPL_LISTEND, nick).with_trailing("End of LIST")
    }

    /// `:<server> 353 <nick> = <channel> :<names>`
    pub fn names<S: AsRef<str>>(server: &str, nick: &str, channel: &str, members: &[S]) -> Self {
        let names = members
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self::numeric(server, Response::RPL_NAMREPLY, nick)
            .with_param("=")
            .with_param(channel)
            .with_trailing(names)
    }

    /// `:<server> 391 <nick> :<timestamp>`
    pub fn time(server: &str, nick: &str, timestamp: &str) -> Self {
        Self::numeric(server, Response::RPL_TIME, nick).with_trailing(timestamp)
    }

    /// `:<server> 371 <nick> :<text>`
    pub fn info(server: &str, nick: &str, text: &str) -> Self {
        Self::numeric(server, Response::RPL_INFO, nick).with_trailing(text)
    }

    /// `:<server> 400 <nick> :<text>`
    pub fn error(server: &str, nick: &str, text: &str) -> Self {
        Self::numeric(server, Response::ERR_GENERIC, nick).with_trailing(text)
    }

    /// `:<nick> JOIN <channel>`
    pub fn join(nick: &str, channel: &str) -> Self {
        Self::new("JOIN").with_prefix(nick).with_param(channel)
    }

    /// `:<nick> PART <channel>`
    pub fn part(nick: &str, channel: &str) -> Self {
        Self::new("PART").with_prefix(nick).with_param(channel)
    }

    /// `:<nick> QUIT`
    pub fn quit(nick: &str) -> Self {
        Self::new("QUIT").with_prefix(nick)
    }

    /// `:<sender> PRIVMSG <target> :<text>`
    pub fn privmsg(sender: &str, target: &str, text: &str) -> Self {
        Self::new("PRIVMSG")
            .with_prefix(sender)
            .with_param(target)
            .with_trailing(text)
    }

    /// `PONG <args>`, echoing the PING argument blob verbatim.
    pub fn pong(args: &str) -> Self {
        let msg = Self::new("PONG");
        if args.is_empty() {
            msg
        } else {
            msg.with_param(args)
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, ":{prefix} ")?;
        }
        f.write_str(&self.command)?;
        for param in &self.params {
            write!(f, " {param}")?;
        }
        if let Some(trailing) = &self.trailing {
            write!(f, " :{trailing}")?;
        }
        Ok(())
    }
}

impl From<Message> for String {
    fn from(msg: Message) -> Self {
        msg.to_string()
    }
}
