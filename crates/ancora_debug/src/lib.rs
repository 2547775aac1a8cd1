//! Tracing and diagnostics for Ancora grammars.
//!
//! This crate provides:
//! - [`Tracer`] - Opt-in recording of parse runs, probes, and failures
//! - [`TraceLog`] - The most recent [`ParseRun`]s and their [`TraceRecord`]s
//! - [`HumanFormatter`] / [`JsonFormatter`] - Trace output formats
//! - [`FailureReport`] - Indented rendering of failure trees

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod report;
pub mod trace;

pub use report::{FailureReport, ReportConfig};
pub use trace::{
    HumanFormatter, JsonFormatter, ParseRun, SharedTracer, TraceEvent, TraceFormatter, TraceLog,
    TraceRecord, Tracer, TracerConfig,
};
