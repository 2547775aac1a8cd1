//! Optional and repeated matches.

use std::any::Any;

use ancora_foundation::{AstNode, Cursor};

use crate::outcome::{Failure, ParseResult};
use crate::parser::{Combinator, Parser};

// =============================================================================
// Maybe
// =============================================================================

/// Matches the inner parser zero or one times.
///
/// A plain failure of the inner parser becomes a success with an empty node
/// at the original cursor. Hard errors still propagate.
#[derive(Clone, Debug)]
pub struct Maybe {
    inner: Parser,
}

impl Maybe {
    /// Makes `inner` optional.
    #[must_use]
    pub fn new(inner: Parser) -> Self {
        Self { inner }
    }
}

impl Combinator for Maybe {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        match self.inner.parse(cursor) {
            ParseResult::Success { node: child, after } => {
                let mut node = this.node_at(cursor);
                node.children.extend(child);
                ParseResult::success(Some(node), after)
            }
            ParseResult::Failure(_) => {
                ParseResult::success(Some(this.node_at(cursor)), cursor.clone())
            }
            ParseResult::HardError(cause) => {
                this.error_because("Child produced hard error", cursor, cause)
            }
        }
    }

    fn describe(&self) -> String {
        format!("Maybe({})", self.inner.describe())
    }

    fn sub_parsers(&self) -> Vec<Parser> {
        vec![self.inner.clone()]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Repetition
// =============================================================================

/// Outcome of running a parser repeatedly.
enum Repeated {
    /// The run ended without a hard error.
    Done {
        /// Wrapper holding every advancing match.
        node: AstNode,
        /// Cursor after the last advancing match.
        after: Cursor,
        /// Whether any iteration succeeded, advancing or not.
        matched: bool,
        /// The failure that ended the run, if one did.
        cause: Option<Failure>,
    },
    /// A hard error ended the run.
    Fatal(ParseResult),
}

/// Applies `inner` until it stops matching.
///
/// A success that does not move the cursor ends the run. It still counts as
/// a match, but its node is not recorded, so optional inner parsers cannot
/// loop forever.
fn repeat(this: &Parser, inner: &Parser, cursor: &Cursor) -> Repeated {
    let mut node = this.node_at(cursor);
    let mut at = cursor.clone();
    let mut matched = false;
    loop {
        match inner.parse(&at) {
            ParseResult::Success { node: child, after } => {
                matched = true;
                if after == at {
                    return Repeated::Done {
                        node,
                        after: at,
                        matched,
                        cause: None,
                    };
                }
                node.children.extend(child);
                at = after;
            }
            ParseResult::Failure(cause) => {
                return Repeated::Done {
                    node,
                    after: at,
                    matched,
                    cause: Some(cause),
                };
            }
            ParseResult::HardError(cause) => {
                let error = this.error_because("Child produced hard error", &at, cause);
                return Repeated::Fatal(error);
            }
        }
    }
}

/// Matches the inner parser any number of times, including none.
#[derive(Clone, Debug)]
pub struct NoneOrMany {
    inner: Parser,
}

impl NoneOrMany {
    /// Repeats `inner`.
    #[must_use]
    pub fn new(inner: Parser) -> Self {
        Self { inner }
    }
}

impl Combinator for NoneOrMany {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        match repeat(this, &self.inner, cursor) {
            Repeated::Done { node, after, .. } => ParseResult::success(Some(node), after),
            Repeated::Fatal(result) => result,
        }
    }

    fn describe(&self) -> String {
        format!("NoneOrMany({})", self.inner.describe())
    }

    fn sub_parsers(&self) -> Vec<Parser> {
        vec![self.inner.clone()]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Matches the inner parser at least once.
#[derive(Clone, Debug)]
pub struct OneOrMany {
    inner: Parser,
}

impl OneOrMany {
    /// Repeats `inner`, requiring one match.
    ///
    /// A single match that consumes nothing is enough; the result is then an
    /// empty wrapper at the starting cursor.
    #[must_use]
    pub fn new(inner: Parser) -> Self {
        Self { inner }
    }
}

impl Combinator for OneOrMany {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        match repeat(this, &self.inner, cursor) {
            Repeated::Done {
                node,
                after,
                matched: true,
                ..
            } => ParseResult::success(Some(node), after),
            Repeated::Done {
                cause: Some(cause), ..
            } => this.fail_because("Expected at least one match", cursor, cause),
            Repeated::Done { .. } => this.fail("Expected at least one match", cursor),
            Repeated::Fatal(result) => result,
        }
    }

    fn describe(&self) -> String {
        format!("OneOrMany({})", self.inner.describe())
    }

    fn sub_parsers(&self) -> Vec<Parser> {
        vec![self.inner.clone()]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
