//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Cursor, Location, AstNode, escapes, and Error.
