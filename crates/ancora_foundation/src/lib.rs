//! Core types for the Ancora parsing engine.
//!
//! This crate provides:
//! - [`Cursor`] - Immutable positional view over source text
//! - [`Location`] - Line/column description of a cursor position
//! - [`AstNode`] - The labeled tree produced by parsing
//! - [`Error`] - Rich error types with context
//! - [`collapse_escape_sequences`] - Escape decoding for raw string literals

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod cursor;
pub mod error;
pub mod escape;
pub mod location;

pub use ast::{AstNode, NodeValue, UNNAMED};
pub use cursor::Cursor;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use escape::collapse_escape_sequences;
pub use location::Location;
