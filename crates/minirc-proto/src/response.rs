//! Numeric reply codes sent by the server.

#![allow(non_camel_case_types)]

use std::fmt;

/// Numeric replies the server emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
#[non_exhaustive]
pub enum Response {
    /// `001 <nick> :Welcome to the IRC network, <nick>`
    RPL_WELCOME = 1,
    /// `322 <nick> <channel>`
    RPL_LIST = 322,
    /// `323 <nick> :End of LIST`
    RPL_LISTEND = 323,
    /// `353 <nick> = <channel> :<names>`
    RPL_NAMREPLY = 353,
    /// `371 <nick> :<info text>`
    RPL_INFO = 371,
    /// `391 <nick> :<timestamp>`
    RPL_TIME = 391,
    /// `400 <nick> :<error text>`; every command failure uses this code.
    ERR_GENERIC = 400,
}

impl Response {
    /// Numeric value of the reply.
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Look up a reply by its numeric value.
    pub fn from_code(code: u16) -> Option<Self> {
        Some(match code {
            1 => Self::RPL_WELCOME,
            322 => Self::RPL_LIST,
            323 => Self::RPL_LISTEND,
            353 => Self::RPL_NAMREPLY,
            371 => Self::RPL_INFO,
            391 => Self::RPL_TIME,
            400 => Self::ERR_GENERIC,
            _ => return None,
        })
    }

    /// Whether this numeric reports a failure.
    #[inline]
    pub fn is_error(self) -> bool {
        self.code() >= 400
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}
