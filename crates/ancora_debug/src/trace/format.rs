//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records, one per line.
    fn format_many(&self, records: &[&TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        use std::fmt::Write;
        let mut prefix = String::new();

        if self.show_ids {
            let _ = write!(prefix, "[{:06}] ", record.id);
        }

        let _ = write!(prefix, "P{:04} ", record.parse);

        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        let event_str = match &record.event {
            TraceEvent::ParseStart { grammar, input_len } => match grammar {
                Some(name) => format!("=== PARSE {name} START ({input_len} bytes) ==="),
                None => format!("=== PARSE START ({input_len} bytes) ==="),
            },
            TraceEvent::ParseEnd { result, consumed } => {
                format!("=== PARSE END ({result}, {consumed} bytes consumed) ===")
            }
            TraceEvent::Probe {
                label,
                line,
                column,
                ..
            } => format!("  PROBE {label} at {line}:{column}"),
            TraceEvent::Failure {
                tier,
                message,
                line,
                column,
            } => format!("  {} at {line}:{column}: {message}", tier.to_string().to_uppercase()),
        };

        format!("{prefix}{event_str}")
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as single-line JSON objects.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Escapes a string for JSON.
    fn escape_string(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        let event_data = match &record.event {
            TraceEvent::ParseStart { grammar, input_len } => {
                let grammar_json = grammar.as_ref().map_or_else(
                    || "null".to_string(),
                    |g| format!("\"{}\"", Self::escape_string(g)),
                );
                format!("\"grammar\":{grammar_json},\"input_len\":{input_len}")
            }
            TraceEvent::ParseEnd { result, consumed } => {
                format!("\"result\":\"{result}\",\"consumed\":{consumed}")
            }
            TraceEvent::Probe {
                label,
                offset,
                line,
                column,
            } => format!(
                "\"label\":\"{}\",\"offset\":{offset},\"line\":{line},\"column\":{column}",
                Self::escape_string(label)
            ),
            TraceEvent::Failure {
                tier,
                message,
                line,
                column,
            } => format!(
                "\"tier\":\"{tier}\",\"message\":\"{}\",\"line\":{line},\"column\":{column}",
                Self::escape_string(message)
            ),
        };

        format!(
            "{{\"id\":{},\"parse\":{},\"ts\":{},\"type\":\"{}\",{event_data}}}",
            record.id,
            record.parse,
            record.timestamp_ns,
            record.event_type()
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
