//! Integration tests for AST shaping with mutators

use std::sync::Arc;

use ancora_combinators::OperatorTable;
use ancora_grammar::factory::{
    alternative, character, expression, identifier, identifier_with, keyword, operator,
    optional_whitespace, padded, sequence, string_literal, whitespace,
};
use ancora_grammar::{Grammar, mutators};

fn parse(grammar: &Grammar, input: &str) -> String {
    grammar.parse(input).unwrap().to_string()
}

#[test]
fn keyword_statement_is_shaped() {
    // "let NAME = VALUE"
    let statement = sequence(vec![
        keyword("let"),
        whitespace(),
        identifier().ast("Name"),
        padded(character('=')),
        string_literal('"').ast("Str").with_mutator(mutators::collapse_escapes()),
    ])
    .ast("Let")
    .with_mutator(mutators::discard_child(0))
    .with_mutator(mutators::discard_child(1));
    let grammar = Grammar::new(statement).unwrap();

    assert_eq!(
        parse(&grammar, r#"let greeting = "hi\tthere""#),
        "(Let (Name \"greeting\") (Str \"hi\\tthere\"))"
    );
}

#[test]
fn child_value_hoists_and_discard_child_drops() {
    let call = sequence(vec![
        identifier(),
        character('(').with_mutator(mutators::discard()),
        optional_whitespace(),
        character(')').with_mutator(mutators::discard()),
    ])
    .ast("Call")
    .with_mutator(mutators::child_value(0))
    .with_mutator(mutators::discard_child(0));
    let grammar = Grammar::new(call).unwrap();
    assert_eq!(parse(&grammar, "run( )"), "(Call \"run\")");
}

#[test]
fn collapse_and_rename_clean_up_wrappers() {
    let digit = identifier_with(|c| c.is_ascii_digit(), |c| c.is_ascii_digit()).ast("Int");
    let value = alternative(vec![digit, identifier().ast("Ref")])
        .with_mutator(mutators::collapse())
        .with_mutator(mutators::rename("Value"));
    let grammar = Grammar::new(value).unwrap();
    assert_eq!(parse(&grammar, "42"), "(Value \"42\")");
    assert_eq!(parse(&grammar, "x"), "(Value \"x\")");
}

#[test]
fn discard_children_keeps_only_the_node() {
    let marker = sequence(vec![character('#'), identifier()])
        .ast("Marker")
        .with_mutator(mutators::discard_children());
    let grammar = Grammar::new(marker).unwrap();
    assert_eq!(parse(&grammar, "#tag"), "(Marker)");
}

#[test]
fn identity_and_without_mutators() {
    let shaped = identifier()
        .with_mutator(mutators::rename("Renamed"))
        .with_mutator(mutators::identity());
    let grammar = Grammar::new(shaped.clone()).unwrap();
    assert_eq!(parse(&grammar, "a"), "(Renamed \"a\")");

    let raw = Grammar::new(shaped.without_mutators()).unwrap();
    assert_eq!(parse(&raw, "a"), "(UNNAMED \"a\")");
}

#[test]
fn padded_expression_grammar() {
    let table = Arc::new(OperatorTable::new().with("+", 1).with("*", 2));
    let number = identifier_with(|c| c.is_ascii_digit(), |c| c.is_ascii_digit()).ast("Num");
    let expr = expression(padded(number), padded(operator(&table)), &table).ast("Bin");
    let grammar = Grammar::new(expr).unwrap();
    assert_eq!(
        parse(&grammar, " 1 + 2 * 3 "),
        r#"(Bin "+" (Num "1") (Bin "*" (Num "2") (Num "3")))"#
    );
}
