//! Commit points.

use std::any::Any;

use ancora_foundation::Cursor;

use crate::outcome::ParseResult;
use crate::parser::{Combinator, Parser};

/// Escalates a failure of the inner parser into a hard error.
///
/// Place it after whatever disambiguates a branch: from there on, a
/// mismatch is a syntax error rather than a reason to backtrack.
#[derive(Clone, Debug)]
pub struct HardError {
    inner: Parser,
}

impl HardError {
    /// Marks `inner` as required.
    #[must_use]
    pub fn new(inner: Parser) -> Self {
        Self { inner }
    }
}

impl Combinator for HardError {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        match self.inner.parse(cursor) {
            ParseResult::Failure(cause) => this.error_because(
                format!("Expected {}", self.inner.describe()),
                cursor,
                cause,
            ),
            other => other,
        }
    }

    fn describe(&self) -> String {
        format!("HardError({})", self.inner.describe())
    }

    fn sub_parsers(&self) -> Vec<Parser> {
        vec![self.inner.clone()]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
