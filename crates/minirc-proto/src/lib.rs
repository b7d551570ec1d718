//! # minirc-proto
//!
//! Protocol primitives for the minircd line-oriented chat server.
//!
//! ## Features
//!
//! - Newline-delimited framing with a length cap ([`LineCodec`], `tokio` feature)
//! - Splitting an inbound line into a command token and argument blob
//! - Nickname and channel-name grammar
//! - Numeric reply codes and outbound message rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use minirc_proto::{Message, MessageRef, Response};
//!
//! let line = MessageRef::parse("PRIVMSG #rust :hello there").unwrap();
//! assert_eq!(line.command, "PRIVMSG");
//! assert_eq!(line.args, "#rust :hello there");
//!
//! let welcome = Message::welcome("irc.example.net", "alice");
//! assert_eq!(
//!     welcome.to_string(),
//!     ":irc.example.net 001 alice :Welcome to the IRC network, alice"
//! );
//!
//! assert_eq!(Response::RPL_LISTEND.code(), 323);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod chan;
pub mod error;
#[cfg(feature = "tokio")]
pub mod line;
pub mod message;
pub mod nick;
pub mod response;

pub use self::chan::ChannelExt;
pub use self::error::ProtocolError;
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
pub use self::message::{Message, MessageRef};
pub use self::nick::{NickExt, NICK_MAX_LEN};
pub use self::response::Response;

/// Placeholder used in numeric replies when the recipient has no nickname yet.
pub const NO_NICK: &str = "*";

/// Default maximum inbound line length in bytes, terminator included.
pub const DEFAULT_MAX_LINE_LEN: usize = 512;
