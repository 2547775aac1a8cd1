//! Integration tests for primitive combinators

use ancora_combinators::{
    AllInput, Character, DebugHook, Identifier, Keyword, Parser, ResultType, StringLiteral, Token,
};
use ancora_foundation::{Cursor, NodeValue};

fn run(parser: &Parser, input: &str) -> ancora_combinators::ParseResult {
    parser.parse(&Cursor::new(input))
}

// =============================================================================
// Characters and Text
// =============================================================================

#[test]
fn character_consumes_one_char() {
    let a = Parser::new(Character::new('a'));
    let result = run(&a, "ab");
    assert_eq!(result.after().map(Cursor::offset), Some(1));
    assert_eq!(
        result.node().and_then(|n| n.value.clone()),
        Some(NodeValue::Char('a'))
    );
}

#[test]
fn character_failure_messages() {
    let a = Parser::new(Character::new('a'));
    let wrong = run(&a, "b");
    assert_eq!(
        wrong.fail_reason().map(|f| f.message.as_str()),
        Some("Expected 'a', found 'b'")
    );
    let empty = run(&a, "");
    assert_eq!(
        empty.fail_reason().map(|f| f.message.as_str()),
        Some("Expected 'a', found end of input")
    );
}

#[test]
fn token_and_keyword() {
    let token = Parser::new(Token::new("let"));
    let keyword = Parser::new(Keyword::new("let"));

    assert!(run(&token, "letter").is_success());
    assert!(!run(&keyword, "letter").is_success());
    assert!(run(&keyword, "let x").is_success());
    assert!(run(&keyword, "let").is_success());
    assert_eq!(run(&token, "le").result_type(), ResultType::Failure);
}

#[test]
fn identifier_classes() {
    let ident = Parser::new(Identifier::conventional());
    let result = run(&ident, "_name42 rest");
    assert_eq!(
        result.node().and_then(|n| n.value_text()).as_deref(),
        Some("_name42")
    );
    assert!(!run(&ident, "9lives").is_success());

    let single = Parser::new(Identifier::new(|c| c == '$', |_| false));
    assert_eq!(run(&single, "$$").after().map(Cursor::offset), Some(1));
}

// =============================================================================
// String Literals
// =============================================================================

#[test]
fn string_literal_keeps_escapes_raw() {
    let lit = Parser::new(StringLiteral::new('"'));
    let result = run(&lit, r#""a\"b" tail"#);
    assert_eq!(
        result.node().and_then(|n| n.value_text()).as_deref(),
        Some(r#"a\"b"#)
    );
    assert_eq!(result.after().map(Cursor::offset), Some(6));
}

#[test]
fn unterminated_string_is_plain_failure() {
    let lit = Parser::new(StringLiteral::new('\''));
    let result = run(&lit, "'open");
    assert_eq!(result.result_type(), ResultType::Failure);
    assert_eq!(
        result.fail_reason().map(|f| f.message.as_str()),
        Some("Unterminated string literal")
    );
}

// =============================================================================
// Position Checks
// =============================================================================

#[test]
fn all_input_only_at_end() {
    let end = Parser::new(AllInput);
    assert!(run(&end, "").is_success());
    assert!(run(&end, "").node().is_none());
    assert!(!run(&end, "x").is_success());
}

#[test]
fn debug_hook_sees_cursor_and_produces_nothing() {
    use std::sync::{Arc, Mutex};

    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    let hook = Parser::new(DebugHook::new(move |c: &Cursor| {
        log.lock().unwrap().push(c.offset());
    }));
    let parser = Parser::new(Character::new('a')) + hook + Parser::new(Character::new('b'));

    let result = run(&parser, "ab");
    assert!(result.is_success());
    assert_eq!(result.node().map(|n| n.children.len()), Some(2));
    assert_eq!(*seen.lock().unwrap(), vec![1]);
}
