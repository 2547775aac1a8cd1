//! Grammar facade for Ancora.
//!
//! This crate provides:
//! - [`Grammar`] - A checked root parser with `parse_string` and `parse`
//! - [`GrammarConfig`] - Trailing-input policy, naming, and tracing settings
//! - [`factory`] - Constructor functions for every combinator
//! - [`mutators`] - AST-shaping mutators for [`Parser::with_mutator`]
//!
//! # Example
//!
//! A recursive grammar for colon-separated type names:
//!
//! ```
//! use ancora_grammar::Grammar;
//! use ancora_grammar::factory::{character, identifier, late_bound, maybe, sequence};
//! use ancora_grammar::mutators;
//!
//! let type_name = late_bound();
//! let rule = sequence(vec![
//!     identifier(),
//!     maybe(sequence(vec![
//!         character(':').with_mutator(mutators::discard()),
//!         type_name.parser(),
//!     ]))
//!     .with_mutator(mutators::collapse())
//!     .with_mutator(mutators::collapse()),
//! ])
//! .ast("TypeName")
//! .with_mutator(mutators::child_value(0))
//! .with_mutator(mutators::discard_child(0));
//! type_name.bind(rule.clone())?;
//!
//! let grammar = Grammar::new(rule)?;
//! let tree = grammar.parse("A:B")?;
//! assert_eq!(tree.to_string(), r#"(TypeName "A" (TypeName "B"))"#);
//! # Ok::<(), ancora_foundation::Error>(())
//! ```
//!
//! [`Parser::with_mutator`]: ancora_combinators::Parser::with_mutator

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod factory;
pub mod grammar;
pub mod mutators;

pub use config::GrammarConfig;
pub use grammar::Grammar;
