//! Error types for the Ancora engine.
//!
//! Parse outcomes are plain data and never use this type. `Error` covers
//! grammar construction mistakes and the convenience entry points that turn
//! a failed parse into a `Result`.

use std::fmt;

use thiserror::Error;

/// The main error type for Ancora operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a recoverable parse failure error.
    #[must_use]
    pub fn parse_failure(
        message: impl Into<String>,
        line: u32,
        column: u32,
        context: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::ParseFailure {
            message: message.into(),
            line,
            column,
            context: context.into(),
        })
    }

    /// Creates a hard (committed) parse error.
    #[must_use]
    pub fn hard_error(
        message: impl Into<String>,
        line: u32,
        column: u32,
        context: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::HardError {
            message: message.into(),
            line,
            column,
            context: context.into(),
        })
    }

    /// Creates an unbound late-binding error.
    #[must_use]
    pub fn unbound_late_bound(parser: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnboundLateBound {
            parser: parser.into(),
        })
    }

    /// Creates an error for binding a late-bound parser twice.
    #[must_use]
    pub fn late_bound_already_bound() -> Self {
        Self::new(ErrorKind::LateBoundAlreadyBound)
    }

    /// Returns true if this error came from a failed parse of either tier.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ParseFailure { .. } | ErrorKind::HardError { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Input did not match the grammar.
    #[error("parse failure at {line}:{column}: {message}")]
    ParseFailure {
        /// Description of the failure.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the failure occurred.
        context: String,
    },

    /// Input was syntactically broken past a commit point.
    #[error("syntax error at {line}:{column}: {message}")]
    HardError {
        /// Description of the error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// A late-bound parser was reachable from a grammar root but never bound.
    #[error("late-bound parser {parser} was never bound")]
    UnboundLateBound {
        /// Description of the unbound parser.
        parser: String,
    },

    /// A late-bound parser was bound more than once.
    #[error("late-bound parser is already bound")]
    LateBoundAlreadyBound,
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Grammar name, if the grammar was given one.
    pub grammar: Option<String>,
    /// Chain of failure messages from the outermost rule inward.
    pub trail: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grammar name.
    #[must_use]
    pub fn with_grammar(mut self, grammar: impl Into<String>) -> Self {
        self.grammar = Some(grammar.into());
        self
    }

    /// Adds one step of the failure trail.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.trail.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(grammar) = &self.grammar {
            write!(f, "in grammar {grammar}")?;
        }
        if !self.trail.is_empty() {
            writeln!(f)?;
            for frame in &self.trail {
                writeln!(f, "  from {frame}")?;
            }
        }
        Ok(())
    }
}
