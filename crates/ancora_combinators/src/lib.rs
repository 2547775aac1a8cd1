//! Parser abstraction, outcome model, and combinators for Ancora.
//!
//! This crate provides:
//! - [`Parser`] - A configured combinator (tag + AST mutator)
//! - [`Combinator`] - The trait every combinator implements
//! - [`ParseResult`] / [`Failure`] - The two-tier outcome model
//! - Primitive combinators ([`Character`], [`Token`], [`Keyword`],
//!   [`Identifier`], [`StringLiteral`], [`AllInput`], [`DebugHook`])
//! - Structural combinators ([`Sequence`], [`Alternative`], [`Maybe`],
//!   [`NoneOrMany`], [`OneOrMany`], [`HardError`])
//! - Operator precedence ([`OperatorTable`], [`Operator`], [`Expression`])
//! - Recursive grammars ([`LateBound`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod alternative;
pub mod expression;
pub mod graph;
pub mod hard_error;
pub mod late_bound;
pub mod operator;
pub mod outcome;
pub mod parser;
pub mod primitive;
pub mod repeat;
pub mod sequence;

pub use alternative::Alternative;
pub use expression::Expression;
pub use hard_error::HardError;
pub use late_bound::LateBound;
pub use operator::{Operator, OperatorTable};
pub use outcome::{Failure, FailureKind, ParseResult, ResultType};
pub use parser::{AstMutator, Combinator, Parser};
pub use primitive::{
    AllInput, CharPredicate, Character, DebugCallback, DebugHook, Identifier, Keyword,
    StringLiteral, Token, is_word_char,
};
pub use repeat::{Maybe, NoneOrMany, OneOrMany};
pub use sequence::Sequence;
