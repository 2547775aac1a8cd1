//! The grammar facade.
//!
//! A [`Grammar`] owns a root parser, checks it once at construction, and is
//! then reused for any number of parses, from any number of threads.

use ancora_combinators::graph::unbound_late_bindings;
use ancora_combinators::{AllInput, Failure, ParseResult, Parser, ResultType, Sequence};
use ancora_debug::{SharedTracer, Tracer};
use ancora_foundation::{AstNode, Cursor, Error, ErrorContext, Result};
use tracing::debug;

use crate::config::GrammarConfig;
use crate::mutators;

/// A checked, reusable grammar.
///
/// # Example
///
/// ```
/// use ancora_grammar::Grammar;
/// use ancora_grammar::factory::{character, identifier, sequence};
///
/// let grammar = Grammar::new(sequence(vec![identifier(), character(';')]))?;
/// assert!(grammar.parse_string("name;").is_success());
/// assert!(!grammar.parse_string("name; extra").is_success());
/// # Ok::<(), ancora_foundation::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct Grammar {
    root: Parser,
    entry: Parser,
    config: GrammarConfig,
    tracer: Option<SharedTracer>,
}

impl Grammar {
    /// Creates a grammar with the default configuration.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnboundLateBound`](ancora_foundation::ErrorKind::UnboundLateBound)
    /// if any late-bound parser reachable from `root` has not been bound.
    pub fn new(root: Parser) -> Result<Self> {
        Self::with_config(root, GrammarConfig::default())
    }

    /// Creates a grammar with the given configuration.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnboundLateBound`](ancora_foundation::ErrorKind::UnboundLateBound)
    /// if any late-bound parser reachable from `root` has not been bound.
    pub fn with_config(root: Parser, config: GrammarConfig) -> Result<Self> {
        if let Some(unbound) = unbound_late_bindings(&root).first() {
            let mut err = Error::unbound_late_bound(unbound.describe());
            if let Some(name) = &config.name {
                err = err.with_context(ErrorContext::new().with_grammar(name));
            }
            return Err(err);
        }

        let entry = if config.require_all_input {
            Parser::new(Sequence::new(vec![root.clone(), Parser::new(AllInput)]))
                .with_mutator(mutators::pass_child(0))
        } else {
            root.clone()
        };

        debug!(
            grammar = config.name.as_deref().unwrap_or("<unnamed>"),
            root = %root.describe(),
            require_all_input = config.require_all_input,
            "grammar built"
        );

        Ok(Self {
            root,
            entry,
            config,
            tracer: None,
        })
    }

    /// Attaches a tracer that records every parse.
    #[must_use]
    pub fn with_tracer(mut self, tracer: SharedTracer) -> Self {
        self.tracer = Some(tracer);
        self
    }

    /// Attaches a new tracer built from the configuration's trace settings.
    #[must_use]
    pub fn traced(self) -> Self {
        let tracer = Tracer::new(self.config.trace.clone()).shared();
        self.with_tracer(tracer)
    }

    /// Returns the root parser as supplied.
    #[must_use]
    pub fn root(&self) -> &Parser {
        &self.root
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Returns the attached tracer, if any.
    #[must_use]
    pub fn tracer(&self) -> Option<&SharedTracer> {
        self.tracer.as_ref()
    }

    /// Parses `source` from its start.
    #[must_use]
    pub fn parse_string(&self, source: &str) -> ParseResult {
        let name = self.config.name.as_deref();
        if let Some(tracer) = &self.tracer {
            if let Ok(mut tracer) = tracer.lock() {
                tracer.begin_parse(name, source.len());
            }
        }

        let result = self.entry.parse(&Cursor::new(source));
        let consumed = result.after().map_or(0, Cursor::offset);

        debug!(
            grammar = name.unwrap_or("<unnamed>"),
            result = %result.result_type(),
            consumed,
            input_len = source.len(),
            "parse finished"
        );

        if let Some(tracer) = &self.tracer {
            if let Ok(mut tracer) = tracer.lock() {
                if let Some(failure) = result.fail_reason() {
                    tracer.failure(result.result_type(), failure);
                }
                tracer.end_parse(result.result_type(), consumed);
            }
        }

        result
    }

    /// Parses `source` and returns the tree or an error.
    ///
    /// A success with no node yields an empty unnamed node at the start of
    /// the input.
    ///
    /// # Errors
    /// Returns [`ErrorKind::ParseFailure`](ancora_foundation::ErrorKind::ParseFailure)
    /// or [`ErrorKind::HardError`](ancora_foundation::ErrorKind::HardError)
    /// located at the failure that got furthest into the input.
    pub fn parse(&self, source: &str) -> Result<AstNode> {
        match self.parse_string(source) {
            ParseResult::Success { node, .. } => {
                Ok(node.unwrap_or_else(|| AstNode::empty(Cursor::new(source))))
            }
            ParseResult::Failure(failure) => Err(self.to_error(ResultType::Failure, &failure)),
            ParseResult::HardError(failure) => Err(self.to_error(ResultType::HardError, &failure)),
        }
    }

    fn to_error(&self, tier: ResultType, failure: &Failure) -> Error {
        let furthest = failure.furthest();
        let position = furthest.position();
        let line = furthest.location.current_line();
        let err = match tier {
            ResultType::HardError => {
                Error::hard_error(&furthest.message, position.line, position.column, line)
            }
            _ => Error::parse_failure(&furthest.message, position.line, position.column, line),
        };

        let mut context = ErrorContext::new();
        if let Some(name) = &self.config.name {
            context = context.with_grammar(name);
        }
        for frame in failure.trail() {
            context = context.with_frame(frame);
        }
        err.with_context(context)
    }
}
