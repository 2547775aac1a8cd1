//! Human-readable rendering of failure trees.
//!
//! # Example
//!
//! ```
//! use ancora_combinators::{Character, Parser};
//! use ancora_debug::report::FailureReport;
//! use ancora_foundation::Cursor;
//!
//! let parser = Parser::new(Character::new('a')) + Parser::new(Character::new('b'));
//! let result = parser.parse(&Cursor::new("ac"));
//! let failure = result.fail_reason().unwrap();
//! let text = FailureReport::new(failure).render();
//! assert!(text.starts_with("1:2: Sequence failed"));
//! ```

use std::fmt::{self, Write};

use ancora_combinators::Failure;

/// Configuration for failure reports.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Number of spaces for each nesting level.
    pub indent_width: usize,
    /// Deepest nesting level rendered; deeper causes are summarized.
    pub max_depth: usize,
    /// Whether to append the source line of the furthest failure.
    pub show_source: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            max_depth: 32,
            show_source: true,
        }
    }
}

/// Renders a [`Failure`] and its causes as indented text.
///
/// Each line reads `line:column: message [parser]`. When enabled, the
/// report ends with the source line of the furthest leaf and a caret
/// under the failing column.
#[derive(Debug, Clone)]
pub struct FailureReport<'a> {
    failure: &'a Failure,
    config: ReportConfig,
}

impl<'a> FailureReport<'a> {
    /// Creates a report with the default configuration.
    #[must_use]
    pub fn new(failure: &'a Failure) -> Self {
        Self {
            failure,
            config: ReportConfig::default(),
        }
    }

    /// Replaces the report configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder method to omit the source excerpt.
    #[must_use]
    pub fn without_source(mut self) -> Self {
        self.config.show_source = false;
        self
    }

    /// Renders the report to a string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_node(&mut output, self.failure, 0);

        if self.config.show_source {
            let furthest = self.failure.furthest();
            let column = furthest.position().column as usize;
            let line = furthest.location.current_line();
            let _ = write!(
                output,
                "\n{line}\n{}^",
                " ".repeat(column.saturating_sub(1))
            );
        }
        output
    }

    fn render_node(&self, output: &mut String, failure: &Failure, depth: usize) {
        if !output.is_empty() {
            output.push('\n');
        }
        let indent = " ".repeat(depth * self.config.indent_width);
        let _ = write!(
            output,
            "{indent}{}: {} [{}]",
            failure.position(),
            failure.message,
            failure.failed_at
        );

        let causes = failure.causes();
        if causes.is_empty() {
            return;
        }
        if depth >= self.config.max_depth {
            let inner = " ".repeat((depth + 1) * self.config.indent_width);
            let _ = write!(output, "\n{inner}... {} more", causes.len());
            return;
        }
        for cause in causes {
            self.render_node(output, cause, depth + 1);
        }
    }
}

impl fmt::Display for FailureReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
