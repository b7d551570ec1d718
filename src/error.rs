//! Unified error handling for minircd.
//!
//! Command failures map onto a single numeric (400) reply carrying a fixed
//! text, plus a static code used for metric labels.

use minirc_proto::Message;
use thiserror::Error;

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur during command handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("not registered")]
    NotRegistered,

    #[error("already registered")]
    AlreadyRegistered,

    #[error("no nickname set")]
    NoNickname,

    #[error("erroneous nickname: {0}")]
    InvalidNickname(String),

    #[error("nickname in use: {0}")]
    NicknameInUse(String),

    #[error("invalid arguments to {0}")]
    InvalidArgs(&'static str),

    #[error("invalid channel name: {0}")]
    InvalidChannelName(String),

    #[error("no such channel: {0}")]
    NoSuchChannel(String),

    #[error("no such nick: {0}")]
    NoSuchUser(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Recoverable framing problem reported back to the client.
    #[error("line rejected: {0}")]
    BadLine(&'static str),
}

impl HandlerError {
    /// Get a static error code string for metrics labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotRegistered => "not_registered",
            Self::AlreadyRegistered => "already_registered",
            Self::NoNickname => "no_nickname",
            Self::InvalidNickname(_) => "invalid_nickname",
            Self::NicknameInUse(_) => "nickname_in_use",
            Self::InvalidArgs(_) => "invalid_args",
            Self::InvalidChannelName(_) => "invalid_channel_name",
            Self::NoSuchChannel(_) => "no_such_channel",
            Self::NoSuchUser(_) => "no_such_user",
            Self::UnknownCommand(_) => "unknown_command",
            Self::BadLine(_) => "bad_line",
        }
    }

    /// Text carried in the error reply.
    pub fn reply_text(&self) -> String {
        match self {
            Self::NotRegistered => "You need to register first".into(),
            Self::AlreadyRegistered => "You are already registered".into(),
            Self::NoNickname => "You must have a nickname before you can register.".into(),
            Self::InvalidNickname(_) => "Invalid nickname".into(),
            Self::NicknameInUse(_) => "Nickname is already in use".into(),
            Self::InvalidArgs(cmd) => format!("Invalid arguments to {cmd} command"),
            Self::InvalidChannelName(_) => "Invalid channel name".into(),
            Self::NoSuchChannel(_) => "No channel exists with that name".into(),
            Self::NoSuchUser(_) => "No user exists with that name".into(),
            Self::UnknownCommand(_) => "Invalid command, try again.".into(),
            Self::BadLine(text) => (*text).into(),
        }
    }

    /// Convert to the error reply sent to the issuing client.
    pub fn to_reply(&self, server_name: &str, nick: &str) -> Message {
        Message::error(server_name, nick, &self.reply_text())
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_use_numeric_400() {
        let reply = HandlerError::NotRegistered.to_reply("irc.test", "*");
        assert_eq!(
            reply.to_string(),
            ":irc.test 400 * :You need to register first"
        );
    }

    #[test]
    fn invalid_args_names_the_command() {
        assert_eq!(
            HandlerError::InvalidArgs("PRIVMSG").reply_text(),
            "Invalid arguments to PRIVMSG command"
        );
    }

    #[test]
    fn error_codes_are_distinct() {
        let all = [
            HandlerError::NotRegistered,
            HandlerError::AlreadyRegistered,
            HandlerError::NoNickname,
            HandlerError::InvalidNickname("1".into()),
            HandlerError::NicknameInUse("a".into()),
            HandlerError::InvalidArgs("USER"),
            HandlerError::InvalidChannelName("x".into()),
            HandlerError::NoSuchChannel("#x".into()),
            HandlerError::NoSuchUser("x".into()),
            HandlerError::UnknownCommand("FOO".into()),
            HandlerError::BadLine("Input line too long"),
        ];
        let mut codes: Vec<_> = all.iter().map(HandlerError::error_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }
}
