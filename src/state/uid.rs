//! Connection identifier generation.

use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a connection, stable for its whole lifetime.
pub type Uid = String;

/// Generates unique connection IDs.
///
/// Format: 6 characters of base36, e.g. "AAAAAB". IDs are never reused
/// within a server's lifetime (wraps only after 36^6 connections).
#[derive(Default)]
pub struct UidGenerator {
    counter: AtomicU64,
}

impl UidGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next unique UID.
    pub fn next(&self) -> Uid {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        base36_encode_6(n)
    }
}

/// Encode a number as a 6-character base36 string.
fn base36_encode_6(mut n: u64) -> String {
    const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut result = [b'A'; 6];

    for slot in result.iter_mut().rev() {
        *slot = CHARS[(n % 36) as usize];
        n /= 36;
    }

    result.iter().map(|&b| b as char).collect()
}
