//! Operator tables and the longest-match operator scanner.

use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

use ancora_foundation::Cursor;

use crate::outcome::ParseResult;
use crate::parser::{Combinator, Parser};

// =============================================================================
// Operator Table
// =============================================================================

/// Operator spellings and their precedences.
///
/// Higher precedence binds tighter. Operators not in the table have
/// precedence 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OperatorTable {
    operators: BTreeMap<String, i32>,
}

impl OperatorTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add an operator.
    #[must_use]
    pub fn with(mut self, spelling: impl Into<String>, precedence: i32) -> Self {
        self.insert(spelling, precedence);
        self
    }

    /// Adds or replaces an operator.
    pub fn insert(&mut self, spelling: impl Into<String>, precedence: i32) {
        self.operators.insert(spelling.into(), precedence);
    }

    /// Returns the precedence of `spelling`, or 0 if it is not registered.
    #[must_use]
    pub fn precedence(&self, spelling: &str) -> i32 {
        self.operators.get(spelling).copied().unwrap_or(0)
    }

    /// Returns true if `spelling` is registered.
    #[must_use]
    pub fn contains(&self, spelling: &str) -> bool {
        self.operators.contains_key(spelling)
    }

    /// Counts registered operators that start with `prefix`.
    #[must_use]
    pub fn possible_matches(&self, prefix: &str) -> usize {
        self.operators
            .range::<str, _>((std::ops::Bound::Included(prefix), std::ops::Bound::Unbounded))
            .take_while(|(k, _)| k.starts_with(prefix))
            .count()
    }

    /// Counts registered operators spelled exactly `spelling` (0 or 1).
    #[must_use]
    pub fn exact_matches(&self, spelling: &str) -> usize {
        usize::from(self.contains(spelling))
    }

    /// Returns the number of operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Returns true if the table has no operators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Iterates operators in spelling order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.operators.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for OperatorTable {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (spelling, precedence) in iter {
            table.insert(spelling, precedence);
        }
        table
    }
}

// =============================================================================
// Operator
// =============================================================================

/// Scans the longest registered operator at the cursor.
///
/// Characters are consumed one at a time while some registered operator
/// still starts with the text so far. The scan stops early once exactly one
/// operator remains possible and the text is that operator. When no
/// operator can continue the text, the longest exact match seen is used.
///
/// Running out of input while longer operators are still possible is
/// treated the same way: `"<"` with `{"<", "<="}` scans as `"<"` rather
/// than failing. The scan fails only when no exact match was seen.
#[derive(Clone, Debug)]
pub struct Operator {
    table: Arc<OperatorTable>,
}

impl Operator {
    /// Creates a scanner over `table`.
    #[must_use]
    pub fn new(table: Arc<OperatorTable>) -> Self {
        Self { table }
    }

    /// Returns the table this scanner uses.
    #[must_use]
    pub fn table(&self) -> &Arc<OperatorTable> {
        &self.table
    }
}

impl Combinator for Operator {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        let mut op_so_far = String::new();
        let mut at = cursor.clone();
        let mut longest: Option<(String, Cursor)> = None;

        while let Some(c) = at.current() {
            op_so_far.push(c);
            at = at.advance();
            let possible = self.table.possible_matches(&op_so_far);
            if possible == 0 {
                break;
            }
            if self.table.exact_matches(&op_so_far) == 1 {
                if possible == 1 {
                    return ParseResult::success(
                        Some(this.node_at(cursor).with_value(op_so_far)),
                        at,
                    );
                }
                longest = Some((op_so_far.clone(), at.clone()));
            }
        }

        match longest {
            Some((op, after)) => {
                ParseResult::success(Some(this.node_at(cursor).with_value(op)), after)
            }
            None => this.fail("Expected operator", cursor),
        }
    }

    fn describe(&self) -> String {
        "Operator".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
