//! Immutable positional view over source text.
//!
//! A [`Cursor`] never changes once created. Every movement returns a new
//! cursor, so a single cursor can be handed to any number of parsers at once.

use std::fmt;
use std::sync::Arc;

use crate::location::Location;

/// A position in a shared source string.
///
/// Offsets are stored in bytes but every public movement counts characters,
/// so a cursor always sits on a `char` boundary.
#[derive(Clone)]
pub struct Cursor {
    /// The full source text, shared between all cursors derived from it.
    source: Arc<str>,
    /// Byte offset of the current position.
    offset: usize,
}

impl Cursor {
    /// Creates a cursor at the start of `source`.
    #[must_use]
    pub fn new(source: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
            offset: 0,
        }
    }

    /// Returns the whole source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the byte offset of this cursor.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the unconsumed remainder of the source.
    #[must_use]
    pub fn rest(&self) -> &str {
        &self.source[self.offset..]
    }

    /// Returns the current character, or `None` at the end of input.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns true when no input remains.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Returns the character `n` positions ahead (0 is the current character).
    #[must_use]
    pub fn peek(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Returns a cursor one character further on.
    #[must_use]
    pub fn advance(&self) -> Self {
        self.advance_by(1)
    }

    /// Returns a cursor `n` characters further on, clamped to the end of input.
    #[must_use]
    pub fn advance_by(&self, n: usize) -> Self {
        let delta = self
            .rest()
            .char_indices()
            .nth(n)
            .map_or(self.rest().len(), |(i, _)| i);
        Self {
            source: Arc::clone(&self.source),
            offset: self.offset + delta,
        }
    }

    /// Returns a cursor one character back.
    #[must_use]
    pub fn rewind(&self) -> Self {
        self.rewind_by(1)
    }

    /// Returns a cursor `n` characters back, clamped to the start of input.
    #[must_use]
    pub fn rewind_by(&self, n: usize) -> Self {
        let consumed = &self.source[..self.offset];
        let offset = if n == 0 {
            self.offset
        } else {
            consumed
                .char_indices()
                .rev()
                .nth(n - 1)
                .map_or(0, |(i, _)| i)
        };
        Self {
            source: Arc::clone(&self.source),
            offset,
        }
    }

    /// Returns the text between this cursor and a later one.
    ///
    /// Returns an empty string if `later` is not ahead of this cursor in the
    /// same source.
    #[must_use]
    pub fn text_until(&self, later: &Cursor) -> &str {
        if self.same_source(later) && later.offset >= self.offset {
            &self.source[self.offset..later.offset]
        } else {
            ""
        }
    }

    /// Returns true if both cursors view the same source text.
    #[must_use]
    pub fn same_source(&self, other: &Cursor) -> bool {
        Arc::ptr_eq(&self.source, &other.source) || self.source == other.source
    }

    /// Computes the line and column of this cursor.
    #[must_use]
    pub fn location(&self) -> Location {
        Location::of(&self.source, self.offset)
    }

    /// Describes this position as `line:column` for error messages.
    #[must_use]
    pub fn location_description(&self) -> String {
        self.location().to_string()
    }

    /// Returns the full source line containing this cursor.
    #[must_use]
    pub fn current_line(&self) -> &str {
        let start = self.source[..self.offset]
            .rfind('\n')
            .map_or(0, |i| i + 1);
        let end = self.source[self.offset..]
            .find('\n')
            .map_or(self.source.len(), |i| self.offset + i);
        self.source[start..end].trim_end_matches('\r')
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.same_source(other)
    }
}

impl Eq for Cursor {}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset)
            .field("location", &self.location())
            .finish()
    }
}

impl From<&str> for Cursor {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Cursor {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}
