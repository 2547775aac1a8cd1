//! Integration tests for failure reports

use ancora_debug::{FailureReport, ReportConfig};
use ancora_grammar::Grammar;
use ancora_grammar::factory::{alternative, character, hard_error, keyword, padded, sequence, token};

fn statement() -> Grammar {
    let assign = sequence(vec![
        keyword("let"),
        padded(character('x')),
        hard_error(character('=')),
    ]);
    let call = sequence(vec![token("print"), character('(')]);
    Grammar::new(alternative(vec![assign, call])).unwrap()
}

#[test]
fn report_lists_every_alternative() {
    let grammar = statement();
    let result = grammar.parse_string("loop");
    let failure = result.fail_reason().unwrap();
    let report = FailureReport::new(failure).without_source().render();

    assert!(report.contains("No alternatives matched"));
    assert!(report.contains("Expected keyword \"let\""));
    assert!(report.contains("Expected \"print\""));
}

#[test]
fn report_points_at_committed_error() {
    let grammar = statement();
    let result = grammar.parse_string("let x + 1");
    assert!(result.is_hard_error());

    let report = FailureReport::new(result.fail_reason().unwrap()).to_string();
    assert!(report.contains("1:7: Expected '=', found '+'"));
    assert!(report.ends_with("let x + 1\n      ^"));
}

#[test]
fn report_config_controls_indent() {
    let grammar = statement();
    let result = grammar.parse_string("loop");
    let config = ReportConfig {
        indent_width: 4,
        show_source: false,
        ..ReportConfig::default()
    };
    let report = FailureReport::new(result.fail_reason().unwrap())
        .with_config(config)
        .render();
    assert!(report.lines().nth(1).unwrap().starts_with("    "));
}
