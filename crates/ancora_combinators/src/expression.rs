//! Binary expressions by precedence climbing.

use std::any::Any;
use std::sync::Arc;

use ancora_foundation::{AstNode, Cursor};

use crate::operator::OperatorTable;
use crate::outcome::ParseResult;
use crate::parser::{Combinator, Parser};

/// Parses `term (operator term)*` into a binary tree.
///
/// Each binary node carries this parser's tag, the operator spelling as its
/// value, and the left and right operands as children. Operators of equal
/// precedence associate to the left. A single term is returned as is.
///
/// Once an operator has been read, a missing right operand is a hard error.
#[derive(Clone, Debug)]
pub struct Expression {
    term: Parser,
    operator: Parser,
    table: Arc<OperatorTable>,
}

/// An operator waiting for its right operand to be complete.
struct Pending {
    spelling: String,
    precedence: i32,
}

impl Expression {
    /// Creates an expression parser.
    ///
    /// `operator` must produce a node whose first value is the operator
    /// spelling; precedences come from `table`.
    #[must_use]
    pub fn new(term: Parser, operator: Parser, table: Arc<OperatorTable>) -> Self {
        Self {
            term,
            operator,
            table,
        }
    }

    /// Folds the top operator and its two operands into one node.
    fn reduce(this: &Parser, operands: &mut Vec<AstNode>, operators: &mut Vec<Pending>) {
        let (Some(op), Some(rhs), Some(lhs)) = (operators.pop(), operands.pop(), operands.pop())
        else {
            return;
        };
        let node = this
            .node_at(&lhs.location)
            .with_value(op.spelling)
            .with_children(vec![lhs, rhs]);
        operands.push(node);
    }
}

impl Combinator for Expression {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        let (first, mut at) = match self.term.parse(cursor) {
            ParseResult::Success { node, after } => {
                (node.unwrap_or_else(|| AstNode::empty(cursor.clone())), after)
            }
            ParseResult::Failure(cause) => {
                return this.fail_because("Expected expression term", cursor, cause);
            }
            ParseResult::HardError(cause) => {
                return this.error_because("Child produced hard error", cursor, cause);
            }
        };

        let mut operands = vec![first];
        let mut operators: Vec<Pending> = Vec::new();

        loop {
            let (op_node, after_op) = match self.operator.parse(&at) {
                ParseResult::Success { node, after } => (node, after),
                ParseResult::Failure(_) => break,
                ParseResult::HardError(cause) => {
                    return this.error_because("Child produced hard error", &at, cause);
                }
            };
            let Some(spelling) = op_node
                .as_ref()
                .and_then(AstNode::first_value)
                .map(|v| v.as_text().into_owned())
            else {
                return this.error("Operator parser produced no operator text", &at);
            };

            let rhs = match self.term.parse(&after_op) {
                ParseResult::Success { node, after } => {
                    at = after;
                    node.unwrap_or_else(|| AstNode::empty(after_op.clone()))
                }
                ParseResult::Failure(cause) | ParseResult::HardError(cause) => {
                    return this.error_because(
                        format!("Expected term after operator '{spelling}'"),
                        &after_op,
                        cause,
                    );
                }
            };

            let precedence = self.table.precedence(&spelling);
            while operators
                .last()
                .is_some_and(|top| top.precedence >= precedence)
            {
                Self::reduce(this, &mut operands, &mut operators);
            }
            operators.push(Pending {
                spelling,
                precedence,
            });
            operands.push(rhs);
        }

        while !operators.is_empty() {
            Self::reduce(this, &mut operands, &mut operators);
        }
        ParseResult::success(operands.pop(), at)
    }

    fn describe(&self) -> String {
        format!("Expression({})", self.term.describe())
    }

    fn sub_parsers(&self) -> Vec<Parser> {
        vec![self.term.clone(), self.operator.clone()]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
