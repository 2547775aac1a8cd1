//! Combinators that match literal or classified input.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use ancora_foundation::Cursor;

use crate::outcome::ParseResult;
use crate::parser::{Combinator, Parser};

/// A character class predicate.
pub type CharPredicate = Arc<dyn Fn(char) -> bool + Send + Sync>;

/// Callback invoked by [`DebugHook`].
pub type DebugCallback = Arc<dyn Fn(&Cursor) + Send + Sync>;

/// Returns true for characters that may continue a word.
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// =============================================================================
// Character
// =============================================================================

/// Matches exactly one given character.
#[derive(Clone, Copy, Debug)]
pub struct Character {
    expected: char,
}

impl Character {
    /// Creates a matcher for `expected`.
    #[must_use]
    pub const fn new(expected: char) -> Self {
        Self { expected }
    }
}

impl Combinator for Character {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        match cursor.current() {
            Some(c) if c == self.expected => ParseResult::success(
                Some(this.node_at(cursor).with_value(c)),
                cursor.advance(),
            ),
            Some(c) => this.fail(format!("Expected '{}', found '{c}'", self.expected), cursor),
            None => this.fail(
                format!("Expected '{}', found end of input", self.expected),
                cursor,
            ),
        }
    }

    fn describe(&self) -> String {
        format!("Character({:?})", self.expected)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Token / Keyword
// =============================================================================

/// Matches an exact piece of text.
#[derive(Clone, Debug)]
pub struct Token {
    text: String,
}

impl Token {
    /// Creates a matcher for `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the cursor after the text if it matches at `cursor`.
    fn match_at(&self, cursor: &Cursor) -> Option<Cursor> {
        cursor
            .rest()
            .starts_with(&self.text)
            .then(|| cursor.advance_by(self.text.chars().count()))
    }
}

impl Combinator for Token {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        match self.match_at(cursor) {
            Some(after) => ParseResult::success(
                Some(this.node_at(cursor).with_value(self.text.as_str())),
                after,
            ),
            None => this.fail(format!("Expected \"{}\"", self.text), cursor),
        }
    }

    fn describe(&self) -> String {
        format!("Token({:?})", self.text)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Matches a whole word: the text must not be followed by a word character.
#[derive(Clone, Debug)]
pub struct Keyword {
    token: Token,
}

impl Keyword {
    /// Creates a matcher for the keyword `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            token: Token::new(text),
        }
    }
}

impl Combinator for Keyword {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        match self.token.match_at(cursor) {
            Some(after) if !after.current().is_some_and(is_word_char) => ParseResult::success(
                Some(this.node_at(cursor).with_value(self.token.text.as_str())),
                after,
            ),
            _ => this.fail(format!("Expected keyword \"{}\"", self.token.text), cursor),
        }
    }

    fn describe(&self) -> String {
        format!("Keyword({:?})", self.token.text)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Identifier
// =============================================================================

/// Matches one start character followed by any number of continue characters.
#[derive(Clone)]
pub struct Identifier {
    is_start: CharPredicate,
    is_continue: CharPredicate,
}

impl Identifier {
    /// Creates an identifier matcher from two character classes.
    #[must_use]
    pub fn new(
        is_start: impl Fn(char) -> bool + Send + Sync + 'static,
        is_continue: impl Fn(char) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            is_start: Arc::new(is_start),
            is_continue: Arc::new(is_continue),
        }
    }

    /// Creates the conventional `[A-Za-z_][A-Za-z0-9_]*` matcher.
    #[must_use]
    pub fn conventional() -> Self {
        Self::new(|c| c.is_alphabetic() || c == '_', is_word_char)
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identifier")
    }
}

impl Combinator for Identifier {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        let Some(first) = cursor.current().filter(|c| (self.is_start)(*c)) else {
            return this.fail("Expected identifier", cursor);
        };
        let mut text = String::from(first);
        let mut after = cursor.advance();
        while let Some(c) = after.current().filter(|c| (self.is_continue)(*c)) {
            text.push(c);
            after = after.advance();
        }
        ParseResult::success(Some(this.node_at(cursor).with_value(text)), after)
    }

    fn describe(&self) -> String {
        "Identifier".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// String Literal
// =============================================================================

/// Matches a quoted string, capturing its raw contents.
///
/// Escapes are kept verbatim: a backslash and the character after it are
/// both copied into the value. Decode with
/// [`ancora_foundation::collapse_escape_sequences`].
#[derive(Clone, Copy, Debug)]
pub struct StringLiteral {
    quote: char,
}

impl StringLiteral {
    /// Creates a literal matcher delimited by `quote`.
    #[must_use]
    pub const fn new(quote: char) -> Self {
        Self { quote }
    }
}

impl Combinator for StringLiteral {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        if cursor.current() != Some(self.quote) {
            return this.fail(format!("Expected opening {}", self.quote), cursor);
        }
        let mut raw = String::new();
        let mut at = cursor.advance();
        loop {
            match at.current() {
                None => return this.fail("Unterminated string literal", &at),
                Some(c) if c == self.quote => {
                    return ParseResult::success(
                        Some(this.node_at(cursor).with_value(raw)),
                        at.advance(),
                    );
                }
                Some('\\') => {
                    let Some(escaped) = at.peek(1) else {
                        return this.fail("Unterminated string literal", &at);
                    };
                    raw.push('\\');
                    raw.push(escaped);
                    at = at.advance_by(2);
                }
                Some(c) => {
                    raw.push(c);
                    at = at.advance();
                }
            }
        }
    }

    fn describe(&self) -> String {
        format!("StringLiteral({:?})", self.quote)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// All Input
// =============================================================================

/// Succeeds, with no node, only at the end of input.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllInput;

impl Combinator for AllInput {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        if cursor.at_end() {
            ParseResult::success(None, cursor.clone())
        } else {
            this.fail("Expected end of input", cursor)
        }
    }

    fn describe(&self) -> String {
        "AllInput".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Debug Hook
// =============================================================================

/// Always succeeds without consuming input, after calling a callback with
/// the current cursor.
#[derive(Clone)]
pub struct DebugHook {
    callback: DebugCallback,
}

impl DebugHook {
    /// Creates a hook around `callback`.
    #[must_use]
    pub fn new(callback: impl Fn(&Cursor) + Send + Sync + 'static) -> Self {
        Self {
            callback: Arc::new(callback),
        }
    }
}

impl Combinator for DebugHook {
    fn parse_at(&self, _this: &Parser, cursor: &Cursor) -> ParseResult {
        (self.callback)(cursor);
        ParseResult::success(None, cursor.clone())
    }

    fn describe(&self) -> String {
        "Debug".to_string()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
