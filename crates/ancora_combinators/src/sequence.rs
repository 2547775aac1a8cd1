//! Left-to-right composition.

use std::any::Any;

use ancora_foundation::Cursor;

use crate::outcome::ParseResult;
use crate::parser::{Combinator, Parser};

/// Runs every part in order over one advancing cursor.
///
/// Succeeds with a node whose children are the parts' nodes; parts that
/// produce no node are skipped. Any failing part fails the whole sequence.
#[derive(Clone, Debug)]
pub struct Sequence {
    parts: Vec<Parser>,
}

impl Sequence {
    /// Creates a sequence of `parts`.
    #[must_use]
    pub fn new(parts: Vec<Parser>) -> Self {
        Self { parts }
    }

    /// Returns the parts in order.
    #[must_use]
    pub fn parts(&self) -> &[Parser] {
        &self.parts
    }
}

impl Combinator for Sequence {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        let mut node = this.node_at(cursor);
        let mut at = cursor.clone();
        for part in &self.parts {
            match part.parse(&at) {
                ParseResult::Success { node: child, after } => {
                    node.children.extend(child);
                    at = after;
                }
                ParseResult::Failure(cause) => {
                    return this.fail_because("Sequence failed", &at, cause);
                }
                ParseResult::HardError(cause) => {
                    return this.error_because("Child produced hard error", &at, cause);
                }
            }
        }
        ParseResult::success(Some(node), at)
    }

    fn describe(&self) -> String {
        format!("Sequence[{}]", self.parts.len())
    }

    fn sub_parsers(&self) -> Vec<Parser> {
        self.parts.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
