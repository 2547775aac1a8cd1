//! Trace event and record types.
//!
//! This module defines the events that can be traced while parsing.

use ancora_combinators::ResultType;

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced during parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A parse of a whole input has started.
    ParseStart {
        /// Name of the grammar, if it has one.
        grammar: Option<String>,
        /// Length of the input in bytes.
        input_len: usize,
    },

    /// A parse of a whole input has finished.
    ParseEnd {
        /// Outcome tier of the parse.
        result: ResultType,
        /// Bytes consumed by a successful parse (0 otherwise).
        consumed: usize,
    },

    /// A probe placed in the grammar was reached.
    Probe {
        /// Label given to the probe.
        label: String,
        /// Byte offset of the cursor.
        offset: usize,
        /// 1-based line of the cursor.
        line: u32,
        /// 1-based column of the cursor.
        column: u32,
    },

    /// A parse ended in a failure of either tier.
    Failure {
        /// Which tier the failure belongs to.
        tier: ResultType,
        /// Message of the failure that got furthest into the input.
        message: String,
        /// 1-based line of that failure.
        line: u32,
        /// 1-based column of that failure.
        column: u32,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ParseStart { .. } => "parse-start",
            Self::ParseEnd { .. } => "parse-end",
            Self::Probe { .. } => "probe",
            Self::Failure { .. } => "failure",
        }
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceRecord {
    /// Unique record ID within the tracer's lifetime.
    pub id: u64,
    /// Sequence number of the parse this event belongs to.
    pub parse: u64,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, parse: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            parse,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
