//! Error types for the protocol library.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Extract the command token from raw line bytes (for error reporting).
///
/// Works without UTF-8 validation so a hint is available even when the
/// rest of the line is garbage.
pub(crate) fn extract_command_hint(raw_line: &[u8]) -> Option<String> {
    let end = raw_line
        .iter()
        .position(|b| !b.is_ascii_alphanumeric())
        .unwrap_or(raw_line.len());

    if end == 0 {
        return None;
    }

    String::from_utf8(raw_line[..end].to_vec()).ok()
}

/// Errors raised while framing or splitting protocol lines.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Line exceeded the configured maximum length.
    #[error("message too long: {actual} bytes (limit {limit})")]
    MessageTooLong {
        /// Bytes seen before the limit tripped.
        actual: usize,
        /// Configured limit.
        limit: usize,
    },

    /// Line was not valid UTF-8.
    #[error("invalid utf-8 at byte {byte_pos}: {details}")]
    InvalidUtf8 {
        /// Offset of the first invalid byte.
        byte_pos: usize,
        /// Decoder message.
        details: String,
        /// Command token, if one could be recovered from the raw bytes.
        command_hint: Option<String>,
    },

    /// Line contained nothing but whitespace.
    #[error("empty message")]
    EmptyMessage,
}

impl ProtocolError {
    /// Whether the connection can keep going after this error.
    ///
    /// Framing problems affect a single line; I/O errors end the transport.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}
