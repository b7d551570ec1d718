//! Prometheus metrics collection for minircd.
//!
//! Metrics are exposed on an HTTP endpoint when `server.metrics_port` is set.
//! Recording helpers are no-ops until [`init`] has run, so unit tests and
//! metrics-disabled servers pay nothing.
//!
//! - `irc_command_total{command}` - Commands processed by type
//! - `irc_command_duration_seconds{command}` - Command latency histogram
//! - `irc_command_errors_total{command,error}` - Failed commands
//! - `irc_message_fanout` - Recipients per channel message (histogram)

use prometheus::{
    Encoder, Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder,
};
use std::sync::OnceLock;

/// Global Prometheus registry for all metrics.
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::new)
}

// ========================================================================
// Counters
// ========================================================================

/// Lines dropped because a session's SendQ was full.
pub static LINES_DROPPED: OnceLock<IntCounter> = OnceLock::new();

/// Lines rejected by the codec (too long, bad UTF-8).
pub static LINES_REJECTED: OnceLock<IntCounter> = OnceLock::new();

// ========================================================================
// Gauges
// ========================================================================

/// Currently connected sessions (registered or not).
pub static CONNECTED_USERS: OnceLock<IntGauge> = OnceLock::new();

/// Channels in the registry. Channels are never destroyed.
pub static ACTIVE_CHANNELS: OnceLock<IntGauge> = OnceLock::new();

// ========================================================================
// Per-command
// ========================================================================

/// Commands processed by type (PRIVMSG, JOIN, PART, etc.).
pub static COMMAND_COUNTER: OnceLock<IntCounterVec> = OnceLock::new();

/// Command processing latency by command type.
pub static COMMAND_LATENCY: OnceLock<HistogramVec> = OnceLock::new();

/// Command errors by type and error kind.
pub static COMMAND_ERRORS: OnceLock<IntCounterVec> = OnceLock::new();

/// Message fan-out histogram: how many recipients per channel message.
pub static MESSAGE_FANOUT: OnceLock<Histogram> = OnceLock::new();

/// Initialize the Prometheus metrics registry.
///
/// Call once at startup before serving `/metrics`.
pub fn init() {
    let r = registry();

    macro_rules! register {
        ($metric:ident, $init:expr) => {
            match $init {
                Ok(m) => {
                    if let Err(e) = r.register(Box::new(m.clone())) {
                        tracing::warn!(error = %e, concat!("Failed to register metric ", stringify!($metric)));
                    }
                    let _ = $metric.set(m);
                }
                Err(e) => {
                    tracing::warn!(error = %e, concat!("Failed to create metric ", stringify!($metric)));
                }
            }
        };
    }

    register!(LINES_DROPPED, IntCounter::new("irc_lines_dropped_total", "Outbound lines dropped on full SendQ"));
    register!(LINES_REJECTED, IntCounter::new("irc_lines_rejected_total", "Inbound lines rejected by the codec"));
    register!(CONNECTED_USERS, IntGauge::new("irc_connected_users", "Currently connected users"));
    register!(ACTIVE_CHANNELS, IntGauge::new("irc_active_channels", "Channels in the registry"));

    register!(COMMAND_COUNTER, IntCounterVec::new(Opts::new("irc_command_total", "IRC commands processed by type"), &["command"]));
    register!(COMMAND_LATENCY, HistogramVec::new(
        HistogramOpts::new("irc_command_duration_seconds", "IRC command latency by type")
            .buckets(vec![0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5]),
        &["command"]));
    register!(COMMAND_ERRORS, IntCounterVec::new(Opts::new("irc_command_errors_total", "IRC command errors by type"), &["command", "error"]));
    register!(MESSAGE_FANOUT, Histogram::with_opts(
        HistogramOpts::new("irc_message_fanout", "Recipients per channel message")
            .buckets(vec![1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0])));
}

/// Gather all metrics and encode them in Prometheus text format.
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = registry().gather();
    let mut buffer = vec![];
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode Prometheus metrics");
        return String::new();
    }
    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Prometheus metrics were not valid UTF-8");
            String::new()
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Record a command execution with latency.
#[inline]
pub fn record_command(command: &str, duration_secs: f64) {
    if let Some(c) = COMMAND_COUNTER.get() {
        c.with_label_values(&[command]).inc();
    }
    if let Some(h) = COMMAND_LATENCY.get() {
        h.with_label_values(&[command]).observe(duration_secs);
    }
}

/// Record a command error.
#[inline]
pub fn record_command_error(command: &str, error: &str) {
    if let Some(c) = COMMAND_ERRORS.get() {
        c.with_label_values(&[command, error]).inc();
    }
}

/// Record message fan-out (how many recipients received a channel message).
#[inline]
pub fn record_fanout(recipients: usize) {
    if let Some(h) = MESSAGE_FANOUT.get() {
        h.observe(recipients as f64);
    }
}

#[inline]
pub fn record_dropped_line() {
    if let Some(c) = LINES_DROPPED.get() {
        c.inc();
    }
}

#[inline]
pub fn record_rejected_line() {
    if let Some(c) = LINES_REJECTED.get() {
        c.inc();
    }
}

#[inline]
pub fn user_connected() {
    if let Some(g) = CONNECTED_USERS.get() {
        g.inc();
    }
}

#[inline]
pub fn user_disconnected() {
    if let Some(g) = CONNECTED_USERS.get() {
        g.dec();
    }
}

#[inline]
pub fn channel_created() {
    if let Some(g) = ACTIVE_CHANNELS.get() {
        g.inc();
    }
}
