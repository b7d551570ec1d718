//! Line-based codec for tokio.
//!
//! Reads newline-terminated lines (`\n` or `\r\n`) and writes lines with a
//! `\r\n` terminator appended.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::error::{self, ProtocolError};

/// Line-based codec that handles newline-terminated messages.
///
/// Lines are limited to [`DEFAULT_MAX_LINE_LEN`](crate::DEFAULT_MAX_LINE_LEN)
/// bytes by default, terminator included.
///
/// Per-line problems (too long, bad UTF-8) are yielded as `Ok(Err(_))` items
/// so a `FramedRead` keeps running afterwards. Only I/O failures surface as
/// the stream's own error.
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
    /// Dropping bytes of an overlong line until its newline shows up
    discarding: bool,
}

impl LineCodec {
    /// Create a codec with the default line limit.
    pub fn new() -> Self {
        Self::with_max_len(crate::DEFAULT_MAX_LINE_LEN)
    }

    /// Create a codec with a custom max line length.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
            discarding: false,
        }
    }

    /// The configured line limit.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    fn decode_line(&self, line: &[u8]) -> error::Result<String> {
        if line.len() > self.max_len {
            return Err(ProtocolError::MessageTooLong {
                actual: line.len(),
                limit: self.max_len,
            });
        }

        let body = strip_terminator(line);
        String::from_utf8(body.to_vec()).map_err(|e| ProtocolError::InvalidUtf8 {
            byte_pos: e.utf8_error().valid_up_to(),
            details: e.utf8_error().to_string(),
            command_hint: error::extract_command_hint(body),
        })
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

impl Decoder for LineCodec {
    type Item = error::Result<String>;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, ProtocolError> {
        loop {
            // Look for newline starting from where we left off
            let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') else {
                if self.discarding {
                    src.clear();
                    self.next_index = 0;
                    return Ok(None);
                }

                // Partial line already over the limit: drop it and keep
                // discarding until its newline arrives.
                if src.len() > self.max_len {
                    let actual = src.len();
                    src.clear();
                    self.next_index = 0;
                    self.discarding = true;
                    return Ok(Some(Err(ProtocolError::MessageTooLong {
                        actual,
                        limit: self.max_len,
                    })));
                }

                self.next_index = src.len();
                return Ok(None);
            };

            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if self.discarding {
                self.discarding = false;
                continue;
            }

            return Ok(Some(self.decode_line(&line)));
        }
    }

    /// A final line without a terminator is still delivered when the peer
    /// closes its side.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, ProtocolError> {
        if let Some(item) = self.decode(src)? {
            return Ok(Some(item));
        }

        if self.discarding {
            src.clear();
            self.discarding = false;
            self.next_index = 0;
            return Ok(None);
        }

        if src.is_empty() {
            return Ok(None);
        }

        let line = src.split();
        self.next_index = 0;
        Ok(Some(self.decode_line(&line)))
    }
}

impl<T: AsRef<str>> Encoder<T> for LineCodec {
    type Error = ProtocolError;

    fn encode(&mut self, msg: T, dst: &mut BytesMut) -> error::Result<()> {
        let msg = msg.as_ref();
        dst.reserve(msg.len() + 2);
        dst.extend_from_slice(msg.as_bytes());
        dst.extend_from_slice(b"\r\n");
        Ok(())
    }
}
