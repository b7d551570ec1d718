//! Nickname validation utilities.
//!
//! A nickname is one letter or underscore followed by up to eight letters,
//! digits or underscores (ASCII only).

/// Maximum nickname length in characters.
pub const NICK_MAX_LEN: usize = 9;

/// Extension trait for checking if a string is a valid nickname.
pub trait NickExt {
    /// Check if this string is a valid nickname.
    ///
    /// # Examples
    ///
    /// ```
    /// use minirc_proto::NickExt;
    ///
    /// assert!("alice".is_valid_nick());
    /// assert!("_bot42".is_valid_nick());
    ///
    /// assert!(!"4chan".is_valid_nick());     // Can't start with digit
    /// assert!(!"".is_valid_nick());          // Empty
    /// assert!(!"averylongnick".is_valid_nick()); // More than 9 characters
    /// ```
    fn is_valid_nick(&self) -> bool;
}

#[inline]
fn is_word_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

impl NickExt for str {
    fn is_valid_nick(&self) -> bool {
        let bytes = self.as_bytes();
        let Some((&first, rest)) = bytes.split_first() else {
            return false;
        };

        if bytes.len() > NICK_MAX_LEN {
            return false;
        }

        (first.is_ascii_alphabetic() || first == b'_') && rest.iter().all(|&c| is_word_char(c))
    }
}

impl NickExt for String {
    fn is_valid_nick(&self) -> bool {
        self.as_str().is_valid_nick()
    }
}
