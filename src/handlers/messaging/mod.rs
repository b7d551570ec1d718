//! Message delivery handlers.

mod privmsg;

pub use privmsg::PrivmsgHandler;
