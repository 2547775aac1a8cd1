//! Ordered choice.

use std::any::Any;

use ancora_foundation::Cursor;

use crate::outcome::{Failure, ParseResult};
use crate::parser::{Combinator, Parser};

/// Tries each option against the same starting cursor.
///
/// The first success wins and is wrapped in a node carrying this parser's
/// tag. A hard error from any option is propagated at once. If every option
/// fails, all of their failures are reported together.
#[derive(Clone, Debug)]
pub struct Alternative {
    options: Vec<Parser>,
}

impl Alternative {
    /// Creates a choice between `options`, tried in order.
    #[must_use]
    pub fn new(options: Vec<Parser>) -> Self {
        Self { options }
    }

    /// Returns the options in order.
    #[must_use]
    pub fn options(&self) -> &[Parser] {
        &self.options
    }
}

impl Combinator for Alternative {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        let mut failures: Option<Failure> = None;
        for option in &self.options {
            match option.parse(cursor) {
                ParseResult::Success { node: child, after } => {
                    let mut node = this.node_at(cursor);
                    node.children.extend(child);
                    return ParseResult::success(Some(node), after);
                }
                ParseResult::HardError(cause) => {
                    return this.error_because("Child produced hard error", cursor, cause);
                }
                ParseResult::Failure(cause) => {
                    failures = Some(match failures {
                        None => cause.into_compound(),
                        Some(acc) => Failure::compound(acc, cause),
                    });
                }
            }
        }
        match failures {
            Some(compound) => this.fail_because("No alternatives matched", cursor, compound),
            None => this.fail("No alternatives matched", cursor),
        }
    }

    fn describe(&self) -> String {
        format!("Alternative[{}]", self.options.len())
    }

    fn sub_parsers(&self) -> Vec<Parser> {
        self.options.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
