//! Factory functions for building grammars.
//!
//! These are thin constructors over the combinators in
//! [`ancora_combinators`], plus a few compositions that most grammars need
//! (delimited lists and whitespace handling).
//!
//! # Example
//!
//! ```
//! use ancora_grammar::factory::{character, identifier, maybe, sequence};
//! use ancora_foundation::Cursor;
//!
//! let pair = sequence(vec![identifier(), maybe(character('!'))]);
//! assert!(pair.parse(&Cursor::new("hello!")).is_success());
//! ```

use std::sync::Arc;

use ancora_combinators::{
    AllInput, Alternative, Character, DebugHook, Expression, HardError, Identifier, Keyword,
    LateBound, Maybe, NoneOrMany, OneOrMany, Operator, OperatorTable, Parser, Sequence,
    StringLiteral, Token,
};
use ancora_debug::SharedTracer;
use ancora_foundation::Cursor;

use crate::mutators;

// =============================================================================
// Structure
// =============================================================================

/// Matches every part in order.
#[must_use]
pub fn sequence(parts: Vec<Parser>) -> Parser {
    Parser::new(Sequence::new(parts))
}

/// Matches the first option that succeeds.
#[must_use]
pub fn alternative(options: Vec<Parser>) -> Parser {
    Parser::new(Alternative::new(options))
}

/// Matches `inner` zero or one times.
#[must_use]
pub fn maybe(inner: Parser) -> Parser {
    Parser::new(Maybe::new(inner))
}

/// Matches `inner` any number of times.
#[must_use]
pub fn none_or_many(inner: Parser) -> Parser {
    Parser::new(NoneOrMany::new(inner))
}

/// Matches `inner` at least once.
#[must_use]
pub fn one_or_many(inner: Parser) -> Parser {
    Parser::new(OneOrMany::new(inner))
}

/// Turns any failure of `inner` into a hard error.
#[must_use]
pub fn hard_error(inner: Parser) -> Parser {
    Parser::new(HardError::new(inner))
}

/// Creates an unbound forward reference.
///
/// Use [`LateBound::parser`] in the grammar and [`LateBound::bind`] once
/// the target exists.
#[must_use]
pub fn late_bound() -> LateBound {
    LateBound::new()
}

// =============================================================================
// Primitives
// =============================================================================

/// Matches one specific character.
#[must_use]
pub fn character(c: char) -> Parser {
    Parser::new(Character::new(c))
}

/// Matches an exact piece of text.
#[must_use]
pub fn token(text: impl Into<String>) -> Parser {
    Parser::new(Token::new(text))
}

/// Matches a word that is not followed by another word character.
#[must_use]
pub fn keyword(text: impl Into<String>) -> Parser {
    Parser::new(Keyword::new(text))
}

/// Matches `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn identifier() -> Parser {
    Parser::new(Identifier::conventional())
}

/// Matches an identifier with custom character classes.
#[must_use]
pub fn identifier_with(
    is_start: impl Fn(char) -> bool + Send + Sync + 'static,
    is_continue: impl Fn(char) -> bool + Send + Sync + 'static,
) -> Parser {
    Parser::new(Identifier::new(is_start, is_continue))
}

/// Matches a quoted string, keeping escapes raw.
#[must_use]
pub fn string_literal(quote: char) -> Parser {
    Parser::new(StringLiteral::new(quote))
}

/// Succeeds only at the end of input.
#[must_use]
pub fn all_input() -> Parser {
    Parser::new(AllInput)
}

/// Calls `callback` with the current cursor and always succeeds.
#[must_use]
pub fn debug(callback: impl Fn(&Cursor) + Send + Sync + 'static) -> Parser {
    Parser::new(DebugHook::new(callback))
}

/// Records a probe event on `tracer` each time the grammar reaches here.
#[must_use]
pub fn probe(tracer: &SharedTracer, label: impl Into<String>) -> Parser {
    let tracer = Arc::clone(tracer);
    let label = label.into();
    debug(move |cursor| {
        if let Ok(mut tracer) = tracer.lock() {
            tracer.probe(&label, cursor);
        }
    })
}

// =============================================================================
// Operators
// =============================================================================

/// Scans the longest operator in `table`.
#[must_use]
pub fn operator(table: &Arc<OperatorTable>) -> Parser {
    Parser::new(Operator::new(Arc::clone(table)))
}

/// Parses `term (operator term)*` by precedence.
#[must_use]
pub fn expression(term: Parser, operator: Parser, table: &Arc<OperatorTable>) -> Parser {
    Parser::new(Expression::new(term, operator, Arc::clone(table)))
}

// =============================================================================
// Compositions
// =============================================================================

const LIST_TAIL: &str = "DelimitedListTail";

/// Matches `item (delimiter item)*`.
///
/// The result has one child per item. Delimiters are dropped. At least one
/// item is required; wrap in [`maybe`] to allow an empty list.
#[must_use]
pub fn delimited_list(item: Parser, delimiter: Parser) -> Parser {
    let rest = sequence(vec![
        delimiter.with_mutator(mutators::discard()),
        item.clone(),
    ])
    .with_mutator(mutators::pass_child(0));
    sequence(vec![item, none_or_many(rest).ast(LIST_TAIL)])
        .with_mutator(mutators::flatten_type(LIST_TAIL))
}

/// Matches one or more whitespace characters and drops them.
#[must_use]
pub fn whitespace() -> Parser {
    identifier_with(char::is_whitespace, char::is_whitespace).with_mutator(mutators::discard())
}

/// Matches any amount of whitespace, including none, and drops it.
#[must_use]
pub fn optional_whitespace() -> Parser {
    maybe(whitespace()).with_mutator(mutators::discard())
}

/// Matches `inner` surrounded by optional whitespace and passes its node.
#[must_use]
pub fn padded(inner: Parser) -> Parser {
    sequence(vec![optional_whitespace(), inner, optional_whitespace()])
        .with_mutator(mutators::pass_child(0))
}
