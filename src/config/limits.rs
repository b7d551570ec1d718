//! Per-connection limits configuration.

use serde::Deserialize;

/// Per-connection limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Longest accepted inbound line in bytes, terminator included (default: 512).
    #[serde(default = "default_max_line_len")]
    pub max_line_len: usize,
    /// Outbound queue capacity per session (default: 512).
    /// Lines for a session whose queue is full are dropped.
    #[serde(default = "default_sendq")]
    pub sendq: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_len: default_max_line_len(),
            sendq: default_sendq(),
        }
    }
}

fn default_max_line_len() -> usize {
    minirc_proto::DEFAULT_MAX_LINE_LEN
}

fn default_sendq() -> usize {
    512
}
