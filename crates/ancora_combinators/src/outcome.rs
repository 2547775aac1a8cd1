//! The tri-state result of a parse attempt.
//!
//! A [`ParseResult`] is either a success (optional node plus the cursor after
//! the match), a recoverable [`ResultType::Failure`], or a fatal
//! [`ResultType::HardError`]. Both failure tiers carry a [`Failure`] cause
//! tree for diagnostics.

use std::fmt;

use ancora_foundation::{AstNode, Cursor, Location};
use thiserror::Error;

// =============================================================================
// Result Type
// =============================================================================

/// Which tier a parse outcome belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultType {
    /// The parser matched.
    Success,
    /// The parser did not match; another branch may be tried.
    Failure,
    /// The input is broken past a commit point; no branch may be tried.
    HardError,
}

impl fmt::Display for ResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
            Self::HardError => write!(f, "hard-error"),
        }
    }
}

// =============================================================================
// Failure
// =============================================================================

/// Shape of a failure node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// A single failure with at most one cause.
    Simple,
    /// An aggregate of sibling failures, all of which are reported.
    Compound,
}

/// Why a parser did not match.
///
/// Simple failures chain to at most one cause. Compound failures hold the
/// failures of several siblings (for example every branch of an
/// alternative) and are never empty.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct Failure {
    /// Human-readable description.
    pub message: String,
    /// Description of the parser that raised this failure.
    pub failed_at: String,
    /// Where in the input the failure was raised.
    pub location: Cursor,
    /// Whether this is a simple or compound failure.
    pub kind: FailureKind,
    causes: Vec<Failure>,
}

impl Failure {
    /// Creates a simple failure with no cause.
    #[must_use]
    pub fn new(message: impl Into<String>, failed_at: impl Into<String>, location: Cursor) -> Self {
        Self {
            message: message.into(),
            failed_at: failed_at.into(),
            location,
            kind: FailureKind::Simple,
            causes: Vec::new(),
        }
    }

    /// Attaches the failure that caused this one.
    ///
    /// Replaces any cause already attached to a simple failure.
    #[must_use]
    pub fn with_cause(mut self, cause: Failure) -> Self {
        match self.kind {
            FailureKind::Simple => self.causes = vec![cause],
            FailureKind::Compound => self.causes.push(cause),
        }
        self
    }

    /// Wraps this failure in a one-element compound, or returns it unchanged
    /// if it is already compound.
    #[must_use]
    pub fn into_compound(self) -> Self {
        if self.is_compound() {
            return self;
        }
        Self {
            message: "Multiple failures".to_string(),
            failed_at: self.failed_at.clone(),
            location: self.location.clone(),
            kind: FailureKind::Compound,
            causes: vec![self],
        }
    }

    /// Combines two failures into one compound failure.
    ///
    /// Compound operands are flattened into the result rather than nested.
    #[must_use]
    pub fn compound(a: Failure, b: Failure) -> Self {
        let mut combined = a.into_compound();
        if b.is_compound() {
            combined.causes.extend(b.causes);
        } else {
            combined.causes.push(b);
        }
        combined
    }

    /// Returns true for compound failures.
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.kind == FailureKind::Compound
    }

    /// Returns the single cause of a simple failure.
    #[must_use]
    pub fn cause(&self) -> Option<&Failure> {
        match self.kind {
            FailureKind::Simple => self.causes.first(),
            FailureKind::Compound => None,
        }
    }

    /// Returns every direct cause (the member list for compound failures).
    #[must_use]
    pub fn causes(&self) -> &[Failure] {
        &self.causes
    }

    /// Returns the failures at the bottom of the cause tree.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Failure> {
        if self.causes.is_empty() {
            return vec![self];
        }
        self.causes.iter().flat_map(Failure::leaves).collect()
    }

    /// Returns the leaf failure that got furthest into the input.
    ///
    /// Ties go to the leaf found first.
    #[must_use]
    pub fn furthest(&self) -> &Failure {
        let mut best: Option<&Failure> = None;
        for leaf in self.leaves() {
            if best.is_none_or(|b| leaf.location.offset() > b.location.offset()) {
                best = Some(leaf);
            }
        }
        best.unwrap_or(self)
    }

    /// Returns the line and column where this failure was raised.
    #[must_use]
    pub fn position(&self) -> Location {
        self.location.location()
    }

    /// Returns the messages from this failure down its first-cause chain.
    #[must_use]
    pub fn trail(&self) -> Vec<&str> {
        let mut trail = vec![self.message.as_str()];
        let mut current = self;
        while let Some(next) = current.causes.first() {
            trail.push(next.message.as_str());
            current = next;
        }
        trail
    }
}

// =============================================================================
// Parse Result
// =============================================================================

/// Outcome of running a parser at a cursor.
#[derive(Clone, Debug)]
pub enum ParseResult {
    /// The parser matched.
    Success {
        /// The node produced, or `None` if the match was discarded.
        node: Option<AstNode>,
        /// Cursor just past the matched input.
        after: Cursor,
    },
    /// Recoverable mismatch.
    Failure(Failure),
    /// Fatal mismatch; propagates through every enclosing combinator.
    HardError(Failure),
}

impl ParseResult {
    /// Creates a success.
    #[must_use]
    pub fn success(node: Option<AstNode>, after: Cursor) -> Self {
        Self::Success { node, after }
    }

    /// Returns the tier of this outcome.
    #[must_use]
    pub fn result_type(&self) -> ResultType {
        match self {
            Self::Success { .. } => ResultType::Success,
            Self::Failure(_) => ResultType::Failure,
            Self::HardError(_) => ResultType::HardError,
        }
    }

    /// Returns true if the parser matched.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns true for a fatal error.
    #[must_use]
    pub fn is_hard_error(&self) -> bool {
        matches!(self, Self::HardError(_))
    }

    /// Returns the node of a success.
    #[must_use]
    pub fn node(&self) -> Option<&AstNode> {
        match self {
            Self::Success { node, .. } => node.as_ref(),
            _ => None,
        }
    }

    /// Takes the node out of a success.
    #[must_use]
    pub fn into_node(self) -> Option<AstNode> {
        match self {
            Self::Success { node, .. } => node,
            _ => None,
        }
    }

    /// Returns the cursor after a success.
    #[must_use]
    pub fn after(&self) -> Option<&Cursor> {
        match self {
            Self::Success { after, .. } => Some(after),
            _ => None,
        }
    }

    /// Returns the failure of either failure tier.
    #[must_use]
    pub fn fail_reason(&self) -> Option<&Failure> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(f) | Self::HardError(f) => Some(f),
        }
    }
}
