//! Ancora - Composable parser combinators
//!
//! This crate re-exports all layers of the Ancora engine for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: ancora_grammar     - Grammar facade, factory functions, AST mutators
//! Layer 2: ancora_debug       - Parse tracing, failure reports
//! Layer 1: ancora_combinators - Outcome model, Parser, every combinator
//! Layer 0: ancora_foundation  - Cursor, Location, AstNode, Error
//! ```

pub use ancora_combinators as combinators;
pub use ancora_debug as debug;
pub use ancora_foundation as foundation;
pub use ancora_grammar as grammar;

pub use ancora_combinators::{Failure, ParseResult, Parser, ResultType};
pub use ancora_foundation::{AstNode, Cursor, Error, Result};
pub use ancora_grammar::{Grammar, GrammarConfig};
