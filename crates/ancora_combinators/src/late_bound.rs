//! Forward references for recursive grammars.
//!
//! A [`LateBound`] is a slot that is filled after the parsers referring to it
//! have been built. Every copy of the late-bound parser shares the slot, so
//! binding it once binds all of them, including copies made before binding.

use std::any::Any;
use std::sync::{Arc, OnceLock};

use ancora_foundation::{Cursor, Error, Result};
use tracing::debug;

use crate::outcome::ParseResult;
use crate::parser::{Combinator, Parser};

/// A parser whose target is supplied later.
#[derive(Clone, Debug, Default)]
pub struct LateBound {
    slot: Arc<OnceLock<Parser>>,
}

impl LateBound {
    /// Creates an unbound late reference.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a parser that delegates to whatever this slot is bound to.
    #[must_use]
    pub fn parser(&self) -> Parser {
        Parser::new(self.clone())
    }

    /// Binds the slot to `target`.
    ///
    /// # Errors
    /// Returns an error of kind `LateBoundAlreadyBound` if the slot was
    /// already bound.
    pub fn bind(&self, target: Parser) -> Result<()> {
        let description = target.describe();
        self.slot
            .set(target)
            .map_err(|_| Error::late_bound_already_bound())?;
        debug!(parser = %description, "late-bound parser bound");
        Ok(())
    }

    /// Returns true once the slot has been bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Returns the bound target.
    #[must_use]
    pub fn target(&self) -> Option<&Parser> {
        self.slot.get()
    }
}

impl Combinator for LateBound {
    fn parse_at(&self, this: &Parser, cursor: &Cursor) -> ParseResult {
        match self.slot.get() {
            Some(target) => target.parse(cursor),
            None => this.fail("LateBound was never bound", cursor),
        }
    }

    fn describe(&self) -> String {
        if self.is_bound() {
            "LateBound".to_string()
        } else {
            "LateBound(unbound)".to_string()
        }
    }

    fn sub_parsers(&self) -> Vec<Parser> {
        self.slot.get().cloned().into_iter().collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
