//! Trace records grouped by parse run.

use std::collections::VecDeque;

use ancora_combinators::ResultType;

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Parse Run
// =============================================================================

/// Everything recorded between one `begin_parse` and the next.
///
/// Run 0 collects records made before any parse began, such as probes
/// exercised on a bare parser.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseRun {
    /// Sequence number of the run.
    pub number: u64,
    /// The run's records in the order they were made.
    pub records: Vec<TraceRecord>,
}

impl ParseRun {
    fn new(number: u64) -> Self {
        Self {
            number,
            records: Vec::new(),
        }
    }

    /// Returns the grammar name and input length the run started with.
    #[must_use]
    pub fn start(&self) -> Option<(Option<&str>, usize)> {
        self.records.iter().find_map(|r| match &r.event {
            TraceEvent::ParseStart { grammar, input_len } => {
                Some((grammar.as_deref(), *input_len))
            }
            _ => None,
        })
    }

    /// Returns how the run ended and how much input it consumed.
    ///
    /// `None` while the parse is still in progress.
    #[must_use]
    pub fn outcome(&self) -> Option<(ResultType, usize)> {
        self.records.iter().rev().find_map(|r| match r.event {
            TraceEvent::ParseEnd { result, consumed } => Some((result, consumed)),
            _ => None,
        })
    }

    /// Returns the failure event the run ended with, if any.
    #[must_use]
    pub fn failure(&self) -> Option<&TraceEvent> {
        self.records
            .iter()
            .map(|r| &r.event)
            .find(|e| matches!(e, TraceEvent::Failure { .. }))
    }

    /// Returns the labels of the probes reached, in order.
    #[must_use]
    pub fn probes(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|r| match &r.event {
                TraceEvent::Probe { label, .. } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Returns the events of the run.
    pub fn events(&self) -> impl Iterator<Item = &TraceEvent> {
        self.records.iter().map(|r| &r.event)
    }
}

// =============================================================================
// Trace Log
// =============================================================================

/// The most recent parse runs, oldest first.
///
/// Holds at most `max_runs` runs; starting another drops the oldest.
#[derive(Clone, Debug)]
pub struct TraceLog {
    runs: VecDeque<ParseRun>,
    max_runs: usize,
    next_id: u64,
}

impl TraceLog {
    /// Creates an empty log that keeps up to `max_runs` runs.
    #[must_use]
    pub fn new(max_runs: usize) -> Self {
        Self {
            runs: VecDeque::new(),
            max_runs: max_runs.max(1),
            next_id: 0,
        }
    }

    /// Opens run `number`. Later records go to it.
    pub fn open_run(&mut self, number: u64) {
        self.runs.push_back(ParseRun::new(number));
        while self.runs.len() > self.max_runs {
            self.runs.pop_front();
        }
    }

    /// Appends an event to the newest run, opening run 0 if there is none.
    ///
    /// Returns the record's ID. IDs increase across runs and clears.
    pub fn append(&mut self, timestamp_ns: u64, event: TraceEvent) -> u64 {
        if self.runs.is_empty() {
            self.open_run(0);
        }
        let id = self.next_id;
        self.next_id += 1;
        if let Some(run) = self.runs.back_mut() {
            run.records
                .push(TraceRecord::new(id, run.number, timestamp_ns, event));
        }
        id
    }

    /// Removes and returns the newest run.
    pub fn drop_newest(&mut self) -> Option<ParseRun> {
        self.runs.pop_back()
    }

    /// Returns the newest run.
    #[must_use]
    pub fn newest(&self) -> Option<&ParseRun> {
        self.runs.back()
    }

    /// Returns run `number`, if it is still held.
    #[must_use]
    pub fn run(&self, number: u64) -> Option<&ParseRun> {
        self.runs.iter().find(|r| r.number == number)
    }

    /// Returns the held runs, oldest first.
    pub fn runs(&self) -> impl Iterator<Item = &ParseRun> {
        self.runs.iter()
    }

    /// Returns every held record, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &TraceRecord> {
        self.runs.iter().flat_map(|r| r.records.iter())
    }

    /// Returns the number of held runs.
    #[must_use]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Returns true if no run is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Drops every run.
    pub fn clear(&mut self) {
        self.runs.clear();
    }
}

impl Default for TraceLog {
    fn default() -> Self {
        Self::new(256)
    }
}
