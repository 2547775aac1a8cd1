//! Configuration for grammars.

use ancora_debug::TracerConfig;

/// Configuration for a [`Grammar`](crate::Grammar).
#[derive(Clone, Debug)]
pub struct GrammarConfig {
    /// Whether the root must consume the whole input.
    pub require_all_input: bool,

    /// Label used in log events and error context.
    pub name: Option<String>,

    /// Tracer settings used by [`Grammar::traced`](crate::Grammar::traced).
    pub trace: TracerConfig,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            require_all_input: true,
            name: None,
            trace: TracerConfig::default(),
        }
    }
}

impl GrammarConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that rejects trailing input.
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Creates a configuration that accepts a matching prefix of the input.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            require_all_input: false,
            ..Self::default()
        }
    }

    /// Builder method to set whether the whole input must be consumed.
    #[must_use]
    pub fn with_require_all_input(mut self, require: bool) -> Self {
        self.require_all_input = require;
        self
    }

    /// Builder method to set the grammar name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method to set tracer settings.
    #[must_use]
    pub fn with_trace(mut self, trace: TracerConfig) -> Self {
        self.trace = trace;
        self
    }
}
