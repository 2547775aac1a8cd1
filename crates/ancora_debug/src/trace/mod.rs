//! Tracing of grammar runs.
//!
//! Each call to [`Tracer::begin_parse`] opens a [`ParseRun`]. Probes placed
//! inside the grammar, the failure the parse ended with and its end are
//! recorded into that run. Recording is a no-op while the tracer is
//! disabled.
//!
//! # Example
//!
//! ```
//! use ancora_combinators::ResultType;
//! use ancora_debug::trace::{Tracer, TracerConfig};
//!
//! let mut tracer = Tracer::new(TracerConfig::new().enabled());
//! let parse = tracer.begin_parse(Some("numbers"), 3);
//! tracer.end_parse(ResultType::Success, 3);
//!
//! let run = tracer.log().run(parse).unwrap();
//! assert_eq!(run.outcome(), Some((ResultType::Success, 3)));
//! ```

pub mod format;
pub mod log;
pub mod record;

pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use log::{ParseRun, TraceLog};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use ancora_combinators::{Failure, ResultType};
use ancora_foundation::Cursor;

/// A tracer shared between a grammar and the probes inside it.
pub type SharedTracer = Arc<Mutex<Tracer>>;

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Settings for a [`Tracer`].
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether anything is recorded.
    pub enabled: bool,
    /// How many parse runs the log holds before dropping the oldest.
    pub max_runs: usize,
    /// Whether runs that end in success stay in the log.
    pub keep_successful: bool,
    /// Whether a run that ends in failure is printed to stderr.
    pub echo_failures: bool,
    /// Whether [`Tracer::render`] writes JSON lines instead of text.
    pub json: bool,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_runs: 256,
            keep_successful: true,
            echo_failures: false,
            json: false,
        }
    }
}

impl TracerConfig {
    /// Creates a disabled configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns recording on.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Keeps up to `max_runs` parse runs.
    #[must_use]
    pub fn keep_runs(mut self, max_runs: usize) -> Self {
        self.max_runs = max_runs;
        self
    }

    /// Drops each run that ends in success, keeping only failed parses.
    #[must_use]
    pub fn failures_only(mut self) -> Self {
        self.keep_successful = false;
        self
    }

    /// Prints every failed run to stderr as soon as it ends.
    #[must_use]
    pub fn echo_failures(mut self) -> Self {
        self.echo_failures = true;
        self
    }

    /// Renders runs as JSON lines.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json = true;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records parse runs into a bounded [`TraceLog`].
pub struct Tracer {
    config: TracerConfig,
    log: TraceLog,
    runs_started: u64,
    epoch: Instant,
}

impl Tracer {
    /// Creates a tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let log = TraceLog::new(config.max_runs);
        Self {
            config,
            log,
            runs_started: 0,
            epoch: Instant::now(),
        }
    }

    /// Creates a tracer that records nothing until enabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Wraps this tracer for sharing with probes.
    #[must_use]
    pub fn shared(self) -> SharedTracer {
        Arc::new(Mutex::new(self))
    }

    /// Returns whether recording is on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Turns recording on or off.
    ///
    /// Records made while a run is open go to that run, even if it was
    /// opened while disabled and so lacks its start event.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Returns how many parses have begun, recorded or not.
    #[must_use]
    pub fn runs_started(&self) -> u64 {
        self.runs_started
    }

    /// Returns the log of recorded runs.
    #[must_use]
    pub fn log(&self) -> &TraceLog {
        &self.log
    }

    /// Drops every recorded run.
    pub fn clear(&mut self) {
        self.log.clear();
    }

    // -------------------------------------------------------------------------
    // Recording
    // -------------------------------------------------------------------------

    /// Opens a new run and records its start.
    ///
    /// Returns the run's number. Numbers advance even while disabled.
    pub fn begin_parse(&mut self, grammar: Option<&str>, input_len: usize) -> u64 {
        self.runs_started += 1;
        if self.config.enabled {
            self.log.open_run(self.runs_started);
            self.append(TraceEvent::ParseStart {
                grammar: grammar.map(str::to_string),
                input_len,
            });
        }
        self.runs_started
    }

    /// Records the end of the current run.
    ///
    /// A successful run is dropped here when the configuration keeps only
    /// failures. A failed run is echoed to stderr when asked for.
    pub fn end_parse(&mut self, result: ResultType, consumed: usize) {
        if !self.config.enabled {
            return;
        }
        self.append(TraceEvent::ParseEnd { result, consumed });

        if result == ResultType::Success {
            if !self.config.keep_successful {
                self.log.drop_newest();
            }
        } else if self.config.echo_failures {
            if let Some(run) = self.log.newest() {
                let text = self.render_run(run);
                let _ = writeln!(io::stderr(), "{text}");
            }
        }
    }

    /// Records that a probe labelled `label` was reached at `cursor`.
    pub fn probe(&mut self, label: &str, cursor: &Cursor) {
        if !self.config.enabled {
            return;
        }
        let location = cursor.location();
        self.append(TraceEvent::Probe {
            label: label.to_string(),
            offset: cursor.offset(),
            line: location.line,
            column: location.column,
        });
    }

    /// Records the failure the current run ended with.
    ///
    /// Only the furthest leaf of the failure tree is kept.
    pub fn failure(&mut self, tier: ResultType, failure: &Failure) {
        if !self.config.enabled {
            return;
        }
        let furthest = failure.furthest();
        let location = furthest.position();
        self.append(TraceEvent::Failure {
            tier,
            message: furthest.message.clone(),
            line: location.line,
            column: location.column,
        });
    }

    fn append(&mut self, event: TraceEvent) {
        let timestamp_ns = u64::try_from(self.epoch.elapsed().as_nanos()).unwrap_or(u64::MAX);
        self.log.append(timestamp_ns, event);
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Renders one run, one line per record.
    #[must_use]
    pub fn render_run(&self, run: &ParseRun) -> String {
        let records: Vec<&TraceRecord> = run.records.iter().collect();
        if self.config.json {
            JsonFormatter::new().format_many(&records)
        } else {
            HumanFormatter::new().format_many(&records)
        }
    }

    /// Renders every held run, oldest first.
    #[must_use]
    pub fn render(&self) -> String {
        self.log
            .runs()
            .map(|run| self.render_run(run))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl std::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracer")
            .field("enabled", &self.config.enabled)
            .field("runs_held", &self.log.run_count())
            .field("runs_started", &self.runs_started)
            .finish_non_exhaustive()
    }
}
