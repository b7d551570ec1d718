//! Connection and registration handlers.
//!
//! Handles NICK, USER, QUIT, PING commands.

mod nick;
mod ping;
mod quit;
mod user;

pub use nick::NickHandler;
pub use ping::PingHandler;
pub use quit::QuitHandler;
pub use user::UserHandler;
