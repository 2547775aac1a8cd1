//! A small statement language built end to end.
//!
//! ```text
//! program   := statement*
//! statement := "let" name "=" expr ";" | expr ";"
//! expr      := atom (operator atom)*
//! atom      := call | number | string | name | "(" expr ")"
//! call      := name "(" (expr ("," expr)*)? ")"
//! ```

use std::sync::Arc;

use ancora::combinators::{OperatorTable, ResultType};
use ancora::debug::{FailureReport, TraceEvent, TracerConfig};
use ancora::foundation::ErrorKind;
use ancora::grammar::factory::{
    alternative, character, delimited_list, expression, hard_error, identifier, identifier_with,
    keyword, late_bound, maybe, none_or_many, operator, optional_whitespace, padded, sequence,
    string_literal,
};
use ancora::grammar::{Grammar, GrammarConfig, mutators};
use ancora::Parser;

// =============================================================================
// Grammar
// =============================================================================

fn operators() -> Arc<OperatorTable> {
    Arc::new(
        OperatorTable::new()
            .with("==", 0)
            .with("<", 0)
            .with("<=", 0)
            .with("+", 1)
            .with("-", 1)
            .with("*", 2)
            .with("/", 2),
    )
}

fn script_parser() -> Parser {
    let table = operators();
    let expr = late_bound();

    let name = identifier().ast("Name");
    let number = identifier_with(|c| c.is_ascii_digit(), |c| c.is_ascii_digit()).ast("Num");
    let string = string_literal('"')
        .ast("Str")
        .with_mutator(mutators::collapse_escapes());

    let args = maybe(delimited_list(padded(expr.parser()), character(',')))
        .with_mutator(mutators::collapse());
    let call = sequence(vec![
        name.clone(),
        character('(').with_mutator(mutators::discard()),
        args,
        character(')').with_mutator(mutators::discard()),
    ])
    .ast("Call")
    .with_mutator(mutators::child_value(0))
    .with_mutator(mutators::discard_child(0))
    .with_mutator(mutators::flatten_child(0));

    let group = sequence(vec![
        character('(').with_mutator(mutators::discard()),
        padded(expr.parser()),
        character(')').with_mutator(mutators::discard()),
    ])
    .with_mutator(mutators::pass_child(0));

    let atom = alternative(vec![call, number, string, name.clone(), group])
        .with_mutator(mutators::collapse());
    let rule = expression(padded(atom), padded(operator(&table)), &table).ast("Binary");
    if expr.bind(rule.clone()).is_err() {
        unreachable!("fresh late binding");
    }

    let let_statement = sequence(vec![
        keyword("let").with_mutator(mutators::discard()),
        padded(name),
        character('=').with_mutator(mutators::discard()),
        hard_error(padded(rule.clone())),
        hard_error(character(';')).with_mutator(mutators::discard()),
    ])
    .ast("Let");
    let expr_statement = sequence(vec![
        padded(rule),
        character(';').with_mutator(mutators::discard()),
    ])
    .with_mutator(mutators::pass_child(0));

    let statement = padded(
        alternative(vec![let_statement, expr_statement]).with_mutator(mutators::collapse()),
    );
    sequence(vec![none_or_many(statement).ast("Program"), optional_whitespace()])
        .with_mutator(mutators::pass_child(0))
}

fn script() -> Grammar {
    Grammar::with_config(script_parser(), GrammarConfig::new().with_name("script")).unwrap()
}

// =============================================================================
// Accepted Programs
// =============================================================================

#[test]
fn let_with_precedence() {
    let tree = script().parse("let total = 1 + 2 * 3;").unwrap();
    assert_eq!(
        tree.to_string(),
        r#"(Program (Let (Name "total") (Binary "+" (Num "1") (Binary "*" (Num "2") (Num "3")))))"#
    );
}

#[test]
fn grouping_overrides_precedence() {
    let tree = script().parse("(1 + 2) * 3;").unwrap();
    assert_eq!(
        tree.to_string(),
        r#"(Program (Binary "*" (Binary "+" (Num "1") (Num "2")) (Num "3")))"#
    );
}

#[test]
fn calls_with_and_without_arguments() {
    let tree = script().parse("reset();\nprint(x, 2 <= y);").unwrap();
    assert_eq!(tree.children.len(), 2);
    assert_eq!(tree.children[0].to_string(), r#"(Call "reset")"#);
    assert_eq!(
        tree.children[1].to_string(),
        r#"(Call "print" (Name "x") (Binary "<=" (Num "2") (Name "y")))"#
    );
}

#[test]
fn nested_calls() {
    let tree = script().parse("f(g(1), h());").unwrap();
    assert_eq!(
        tree.to_string(),
        r#"(Program (Call "f" (Call "g" (Num "1")) (Call "h")))"#
    );
}

#[test]
fn string_arguments_are_unescaped() {
    let tree = script().parse(r#"say("one\ttwo \"three\"");"#).unwrap();
    let text = tree.find("Str").and_then(|s| s.value_text()).unwrap();
    assert_eq!(text, "one\ttwo \"three\"");
}

#[test]
fn keyword_prefix_is_a_name() {
    let tree = script().parse("letter == 1;").unwrap();
    assert_eq!(
        tree.to_string(),
        r#"(Program (Binary "==" (Name "letter") (Num "1")))"#
    );
}

#[test]
fn empty_and_blank_programs() {
    for source in ["", "   \n\t "] {
        let tree = script().parse(source).unwrap();
        assert_eq!(tree.node_type, "Program");
        assert!(tree.children.is_empty());
    }
}

#[test]
fn node_locations_follow_lines() {
    let tree = script().parse("a;\n  let b = a;\nb;").unwrap();
    let positions: Vec<(u32, u32)> = tree
        .children
        .iter()
        .map(|c| {
            let p = c.position();
            (p.line, p.column)
        })
        .collect();
    assert_eq!(positions[0], (1, 1));
    assert_eq!(positions[1], (2, 3));
    assert_eq!(positions[2], (3, 1));
}

// =============================================================================
// Rejected Programs
// =============================================================================

#[test]
fn missing_value_is_a_hard_error() {
    let err = script().parse("let x = ;").unwrap_err();
    match err.kind {
        ErrorKind::HardError { line, column, .. } => assert_eq!((line, column), (1, 9)),
        other => panic!("unexpected error kind: {other}"),
    }
    let grammar = err.context.and_then(|c| c.grammar);
    assert_eq!(grammar.as_deref(), Some("script"));
}

#[test]
fn dangling_operator_is_reported_on_its_line() {
    let err = script().parse("a;\nlet y = 1 +;").unwrap_err();
    match err.kind {
        ErrorKind::HardError {
            line,
            column,
            context,
            ..
        } => {
            assert_eq!((line, column), (2, 12));
            assert_eq!(context, "let y = 1 +;");
        }
        other => panic!("unexpected error kind: {other}"),
    }
}

#[test]
fn missing_semicolon_after_let() {
    let result = script().parse_string("let x = 1");
    assert_eq!(result.result_type(), ResultType::HardError);
}

#[test]
fn unterminated_expression_statement_is_soft() {
    let result = script().parse_string("a; b");
    assert_eq!(result.result_type(), ResultType::Failure);
}

#[test]
fn report_points_at_failure() {
    let result = script().parse_string("let x = (1 + 2;");
    let failure = result.fail_reason().unwrap();
    let report = FailureReport::new(failure).render();
    let excerpt: Vec<&str> = report.lines().rev().take(2).collect();
    assert_eq!(excerpt[1], "let x = (1 + 2;");
    assert!(excerpt[0].ends_with('^'));
    assert!(excerpt[0].len() > 1);
}

// =============================================================================
// Tracing
// =============================================================================

#[test]
fn traced_script_records_each_run() {
    let config = GrammarConfig::new()
        .with_name("script")
        .with_trace(TracerConfig::new().enabled());
    let grammar = Grammar::with_config(script_parser(), config).unwrap().traced();

    assert!(grammar.parse_string("a;").is_success());
    assert!(!grammar.parse_string("let x = ;").is_success());

    let tracer = grammar.tracer().unwrap().lock().unwrap();
    assert_eq!(tracer.log().run_count(), 2);
    let events: Vec<&TraceEvent> = tracer.log().records().map(|r| &r.event).collect();
    assert_eq!(events.len(), 5);
    assert!(matches!(
        events[3],
        TraceEvent::Failure {
            tier: ResultType::HardError,
            ..
        }
    ));

    let text = tracer.render();
    assert!(text.contains("=== PARSE script START (2 bytes) ==="));
    assert!(text.contains("=== PARSE END (success, 2 bytes consumed) ==="));
}
