//! Integration tests for the Grammar facade

use std::sync::Arc;
use std::thread;

use ancora_combinators::ResultType;
use ancora_foundation::ErrorKind;
use ancora_grammar::factory::{
    character, delimited_list, identifier, late_bound, maybe, padded, sequence,
};
use ancora_grammar::{Grammar, GrammarConfig, mutators};

fn name_list() -> Grammar {
    let list = delimited_list(padded(identifier()), character(',')).ast("Names");
    Grammar::with_config(list, GrammarConfig::strict().with_name("names")).unwrap()
}

#[test]
fn grammar_is_reusable() {
    let grammar = name_list();
    for _ in 0..3 {
        let node = grammar.parse("a, b, c").unwrap();
        assert_eq!(node.node_type, "Names");
        assert_eq!(node.children.len(), 3);
    }
}

#[test]
fn grammar_is_shareable_across_threads() {
    let grammar = Arc::new(name_list());
    let handles: Vec<_> = (1..=4)
        .map(|n| {
            let grammar = Arc::clone(&grammar);
            thread::spawn(move || {
                let input = vec!["x"; n].join(",");
                grammar.parse(&input).map(|node| node.children.len())
            })
        })
        .collect();
    for (n, handle) in (1..=4).zip(handles) {
        assert_eq!(handle.join().unwrap().unwrap(), n);
    }
}

#[test]
fn trailing_input_policy() {
    let strict = name_list();
    let err = strict.parse("a, b;").unwrap_err();
    match err.kind {
        ErrorKind::ParseFailure { message, line, column, .. } => {
            assert_eq!(message, "Expected end of input");
            assert_eq!((line, column), (1, 5));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(
        err.context.and_then(|c| c.grammar).as_deref(),
        Some("names")
    );

    let lenient = Grammar::with_config(
        delimited_list(padded(identifier()), character(',')),
        GrammarConfig::lenient(),
    )
    .unwrap();
    assert!(lenient.parse_string("a, b;").is_success());
}

#[test]
fn hard_errors_become_hard_error_kind() {
    let grammar = Grammar::new(sequence(vec![
        character('('),
        ancora_grammar::factory::hard_error(identifier()),
        character(')'),
    ]))
    .unwrap();
    let err = grammar.parse("(1)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::HardError { column: 2, .. }));
    let trail = err.context.map(|c| c.trail).unwrap_or_default();
    assert_eq!(trail.last().map(String::as_str), Some("Expected identifier"));
}

#[test]
fn unbound_reference_is_caught_at_construction() {
    let forward = late_bound();
    let root = sequence(vec![identifier(), maybe(forward.parser())]);
    let err = Grammar::new(root.clone()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnboundLateBound { .. }));

    forward.bind(root.clone()).unwrap();
    let grammar = Grammar::new(root).unwrap();
    assert_eq!(grammar.parse_string("abc").result_type(), ResultType::Success);
}

#[test]
fn successful_empty_match_yields_empty_node() {
    let grammar = Grammar::new(maybe(identifier()).with_mutator(mutators::discard())).unwrap();
    let node = grammar.parse("").unwrap();
    assert!(node.is_unnamed());
    assert!(node.children.is_empty());
}
