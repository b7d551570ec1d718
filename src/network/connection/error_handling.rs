//! Classification of inbound framing errors.

use crate::error::HandlerError;
use minirc_proto::ProtocolError;

/// What the connection loop does with a read error.
pub(super) enum ReadErrorAction {
    /// Reply with a 400 and keep reading.
    Reject(HandlerError),
    /// Nothing to report.
    Ignore,
    /// Transport is broken; tear the session down.
    Disconnect,
}

/// Classify a read error into an actionable category.
pub(super) fn classify_read_error(e: &ProtocolError) -> ReadErrorAction {
    match e {
        ProtocolError::MessageTooLong { .. } => {
            ReadErrorAction::Reject(HandlerError::BadLine("Input line too long"))
        }
        ProtocolError::InvalidUtf8 { .. } => {
            ReadErrorAction::Reject(HandlerError::BadLine("Invalid UTF-8 in message"))
        }
        ProtocolError::EmptyMessage => ReadErrorAction::Ignore,
        ProtocolError::Io(_) => ReadErrorAction::Disconnect,
        _ if e.is_recoverable() => ReadErrorAction::Ignore,
        _ => ReadErrorAction::Disconnect,
    }
}
