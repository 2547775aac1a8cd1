//! The parser abstraction every combinator plugs into.
//!
//! A [`Combinator`] implements the matching logic. A [`Parser`] wraps one
//! together with the two settings every combinator shares: the AST type tag
//! given to nodes it builds, and the mutator applied to its successful
//! output. Configuring a parser always produces a new value, so a combinator
//! referenced from several places in a grammar is never changed behind
//! anyone's back.

use std::any::Any;
use std::fmt;
use std::ops::{Add, BitOr};
use std::sync::Arc;

use ancora_foundation::{AstNode, Cursor, UNNAMED};
use tracing::trace;

use crate::alternative::Alternative;
use crate::outcome::{Failure, ParseResult};
use crate::sequence::Sequence;

/// A function that reshapes a successfully parsed node.
///
/// Returning `None` discards the node entirely.
pub type AstMutator = Arc<dyn Fn(AstNode) -> Option<AstNode> + Send + Sync>;

// =============================================================================
// Combinator Trait
// =============================================================================

/// Matching logic of one kind of parser.
pub trait Combinator: Any + Send + Sync {
    /// Attempts a match at `cursor`.
    ///
    /// `this` is the configured parser wrapping this combinator; use it for
    /// the node tag and for building failures. Mutators are applied by
    /// [`Parser::parse`], not here.
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult;

    /// Short description used in failures and traces.
    fn describe(&self) -> String;

    /// Parsers this combinator delegates to.
    fn sub_parsers(&self) -> Vec<Parser> {
        Vec::new()
    }

    /// Returns this combinator as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

// =============================================================================
// Parser
// =============================================================================

/// A configured combinator.
///
/// Cloning is cheap and yields an independent value carrying the same
/// combinator, tag and mutator.
#[derive(Clone)]
pub struct Parser {
    combinator: Arc<dyn Combinator>,
    ast_type: Arc<str>,
    mutator: Option<AstMutator>,
}

impl Parser {
    /// Wraps a combinator with the default tag and no mutator.
    #[must_use]
    pub fn new(combinator: impl Combinator) -> Self {
        Self {
            combinator: Arc::new(combinator),
            ast_type: Arc::from(UNNAMED),
            mutator: None,
        }
    }

    /// Runs the combinator and applies the mutator to a successful node.
    #[must_use]
    pub fn parse(&self, cursor: &Cursor) -> ParseResult {
        let result = self.combinator.parse_at(self, cursor);
        trace!(
            parser = %self.describe(),
            offset = cursor.offset(),
            result = %result.result_type(),
            "parse attempt"
        );
        match result {
            ParseResult::Success { node, after } => {
                let node = match (&self.mutator, node) {
                    (Some(mutator), Some(node)) => mutator(node),
                    (_, node) => node,
                };
                ParseResult::Success { node, after }
            }
            other => other,
        }
    }

    /// Returns a copy that tags the nodes it builds with `name`.
    #[must_use]
    pub fn ast(mut self, name: impl AsRef<str>) -> Self {
        self.ast_type = Arc::from(name.as_ref());
        self
    }

    /// Returns a copy whose mutator runs `f` after the existing one.
    #[must_use]
    pub fn with_mutator<F>(mut self, f: F) -> Self
    where
        F: Fn(AstNode) -> Option<AstNode> + Send + Sync + 'static,
    {
        let mutator: AstMutator = match self.mutator.take() {
            None => Arc::new(f),
            Some(old) => Arc::new(move |node: AstNode| old(node).and_then(&f)),
        };
        self.mutator = Some(mutator);
        self
    }

    /// Returns a copy with the mutator reset to identity.
    #[must_use]
    pub fn without_mutators(mut self) -> Self {
        self.mutator = None;
        self
    }

    /// Returns the tag this parser gives the nodes it builds.
    #[must_use]
    pub fn ast_type(&self) -> &str {
        &self.ast_type
    }

    /// Returns true if this parser has a mutator.
    #[must_use]
    pub fn has_mutator(&self) -> bool {
        self.mutator.is_some()
    }

    /// Describes this parser by tag, falling back to its combinator.
    #[must_use]
    pub fn describe(&self) -> String {
        if &*self.ast_type == UNNAMED {
            self.combinator.describe()
        } else {
            self.ast_type.to_string()
        }
    }

    /// Returns the parsers the wrapped combinator delegates to.
    #[must_use]
    pub fn sub_parsers(&self) -> Vec<Parser> {
        self.combinator.sub_parsers()
    }

    /// Returns the wrapped combinator if it is of type `C`.
    #[must_use]
    pub fn downcast<C: Combinator>(&self) -> Option<&C> {
        self.combinator.as_any().downcast_ref::<C>()
    }

    /// Returns an identity key for the wrapped combinator.
    ///
    /// Clones and reconfigured copies share the key.
    #[must_use]
    pub fn combinator_id(&self) -> usize {
        Arc::as_ptr(&self.combinator).cast::<()>() as usize
    }

    /// Creates a fresh node tagged with this parser's type.
    #[must_use]
    pub fn node_at(&self, location: &Cursor) -> AstNode {
        AstNode::new(self.ast_type.as_ref(), location.clone())
    }

    /// Builds a failure raised by this parser.
    #[must_use]
    pub fn failure(&self, message: impl Into<String>, at: &Cursor) -> Failure {
        Failure::new(message, self.describe(), at.clone())
    }

    /// Returns a recoverable failure.
    #[must_use]
    pub fn fail(&self, message: impl Into<String>, at: &Cursor) -> ParseResult {
        ParseResult::Failure(self.failure(message, at))
    }

    /// Returns a recoverable failure wrapping `cause`.
    #[must_use]
    pub fn fail_because(
        &self,
        message: impl Into<String>,
        at: &Cursor,
        cause: Failure,
    ) -> ParseResult {
        ParseResult::Failure(self.failure(message, at).with_cause(cause))
    }

    /// Returns a fatal error.
    #[must_use]
    pub fn error(&self, message: impl Into<String>, at: &Cursor) -> ParseResult {
        ParseResult::HardError(self.failure(message, at))
    }

    /// Returns a fatal error wrapping `cause`.
    #[must_use]
    pub fn error_because(
        &self,
        message: impl Into<String>,
        at: &Cursor,
        cause: Failure,
    ) -> ParseResult {
        ParseResult::HardError(self.failure(message, at).with_cause(cause))
    }

    /// Returns true if this is a bare sequence or alternative that can absorb
    /// further operands without changing meaning.
    fn is_plain(&self) -> bool {
        &*self.ast_type == UNNAMED && self.mutator.is_none()
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("combinator", &self.combinator.describe())
            .field("ast_type", &&*self.ast_type)
            .field("has_mutator", &self.mutator.is_some())
            .finish()
    }
}

// =============================================================================
// Operator Overloading
// =============================================================================

/// `+` for sequence: `a + b + c` builds one three-element sequence.
impl Add for Parser {
    type Output = Parser;

    fn add(self, rhs: Parser) -> Parser {
        let flattened = if self.is_plain() {
            self.downcast::<Sequence>().map(|seq| seq.parts().to_vec())
        } else {
            None
        };
        let mut parts = flattened.unwrap_or_else(|| vec![self]);
        parts.push(rhs);
        Parser::new(Sequence::new(parts))
    }
}

/// `|` for choice: `a | b | c` builds one three-way alternative.
impl BitOr for Parser {
    type Output = Parser;

    fn bitor(self, rhs: Parser) -> Parser {
        let flattened = if self.is_plain() {
            self.downcast::<Alternative>().map(|alt| alt.options().to_vec())
        } else {
            None
        };
        let mut options = flattened.unwrap_or_else(|| vec![self]);
        options.push(rhs);
        Parser::new(Alternative::new(options))
    }
}
