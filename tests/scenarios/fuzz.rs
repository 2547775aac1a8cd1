//! Arbitrary input never panics and always yields a well-formed result.

use std::sync::Arc;

use ancora::combinators::OperatorTable;
use ancora::foundation::Cursor;
use ancora::grammar::factory::{
    alternative, character, delimited_list, expression, identifier, late_bound, maybe,
    none_or_many, operator, padded, sequence, string_literal,
};
use ancora::grammar::{Grammar, GrammarConfig, mutators};
use ancora::{Parser, ResultType};
use proptest::prelude::*;

fn nested() -> Parser {
    let table = Arc::new(OperatorTable::new().with("+", 1).with("*", 2).with("**", 3));
    let expr = late_bound();
    let group = sequence(vec![
        character('('),
        maybe(delimited_list(padded(expr.parser()), character(','))),
        character(')'),
    ]);
    let atom = alternative(vec![identifier(), string_literal('\''), group]);
    let rule = expression(padded(atom), padded(operator(&table)), &table)
        .with_mutator(mutators::identity());
    if expr.bind(rule.clone()).is_err() {
        unreachable!("fresh late binding");
    }
    none_or_many(sequence(vec![rule, maybe(character(';'))]))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn arbitrary_text_never_panics(source in "\\PC{0,64}") {
        let parser = nested();
        let result = parser.parse(&Cursor::new(source.as_str()));
        if let Some(after) = result.after() {
            prop_assert!(after.offset() <= source.len());
            prop_assert!(source.is_char_boundary(after.offset()));
        }
        if let Some(failure) = result.fail_reason() {
            let position = failure.furthest().position();
            prop_assert!(position.line >= 1);
            prop_assert!(position.column >= 1);
        }
    }

    #[test]
    fn grammar_symbols_never_panic(source in "[a-c()',;+* \\\\\n]{0,48}") {
        let grammar = Grammar::with_config(nested(), GrammarConfig::strict()).unwrap();
        match grammar.parse_string(&source).result_type() {
            ResultType::Success => prop_assert!(grammar.parse(&source).is_ok()),
            _ => prop_assert!(grammar.parse(&source).is_err()),
        }
    }
}
