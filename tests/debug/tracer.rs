//! Integration tests for the parse tracer

use ancora_combinators::ResultType;
use ancora_debug::{HumanFormatter, TraceEvent, TraceFormatter, Tracer, TracerConfig};
use ancora_grammar::factory::{character, identifier, probe, sequence};
use ancora_grammar::{Grammar, GrammarConfig};

fn traced_grammar(config: TracerConfig) -> (Grammar, ancora_debug::SharedTracer) {
    let tracer = Tracer::new(config).shared();
    let root = sequence(vec![
        identifier(),
        probe(&tracer, "after-name"),
        character(';'),
    ]);
    let grammar = Grammar::with_config(root, GrammarConfig::new().with_name("stmt"))
        .unwrap()
        .with_tracer(tracer.clone());
    (grammar, tracer)
}

#[test]
fn successful_parse_is_bracketed() {
    let (grammar, tracer) = traced_grammar(TracerConfig::new().enabled());
    assert!(grammar.parse_string("abc;").is_success());

    let tracer = tracer.lock().unwrap();
    let run = tracer.log().newest().unwrap();
    let events: Vec<&TraceEvent> = run.events().collect();
    assert_eq!(events.len(), 3);
    assert_eq!(
        events[0],
        &TraceEvent::ParseStart {
            grammar: Some("stmt".into()),
            input_len: 4,
        }
    );
    assert_eq!(events[1].event_type(), "probe");
    assert_eq!(
        events[2],
        &TraceEvent::ParseEnd {
            result: ResultType::Success,
            consumed: 4,
        }
    );
}

#[test]
fn failed_parse_records_failure_before_end() {
    let (grammar, tracer) = traced_grammar(TracerConfig::new().enabled());
    assert!(!grammar.parse_string("abc!").is_success());

    let tracer = tracer.lock().unwrap();
    let run = tracer.log().newest().unwrap();
    let types: Vec<&str> = run.events().map(TraceEvent::event_type).collect();
    assert_eq!(types, ["parse-start", "probe", "failure", "parse-end"]);
    assert_eq!(run.probes(), ["after-name"]);
    assert_eq!(
        run.failure(),
        Some(&TraceEvent::Failure {
            tier: ResultType::Failure,
            message: "Expected ';', found '!'".into(),
            line: 1,
            column: 4,
        })
    );
}

#[test]
fn each_parse_gets_its_own_number() {
    let (grammar, tracer) = traced_grammar(TracerConfig::new().enabled());
    let _ = grammar.parse_string("a;");
    let _ = grammar.parse_string("b;");

    let tracer = tracer.lock().unwrap();
    assert_eq!(tracer.runs_started(), 2);
    let sizes: Vec<(u64, usize)> = tracer
        .log()
        .runs()
        .map(|r| (r.number, r.records.len()))
        .collect();
    assert_eq!(sizes, [(1, 3), (2, 3)]);
}

#[test]
fn disabled_tracer_stays_empty() {
    let (grammar, tracer) = traced_grammar(TracerConfig::new());
    assert!(grammar.parse_string("abc;").is_success());
    let tracer = tracer.lock().unwrap();
    assert!(tracer.log().is_empty());
    assert_eq!(tracer.runs_started(), 1);
}

#[test]
fn failures_only_tracer_keeps_failed_runs() {
    let (grammar, tracer) = traced_grammar(TracerConfig::new().enabled().failures_only());
    let _ = grammar.parse_string("abc;");
    let _ = grammar.parse_string("1");

    let tracer = tracer.lock().unwrap();
    assert_eq!(tracer.log().run_count(), 1);
    let run = tracer.log().newest().unwrap();
    assert_eq!(run.number, 2);
    assert_eq!(run.outcome(), Some((ResultType::Failure, 0)));

    let failure = run
        .records
        .iter()
        .find(|r| r.event_type() == "failure")
        .unwrap();
    let line = HumanFormatter::new().format(failure);
    assert_eq!(line, "P0002   FAILURE at 1:1: Expected identifier");
}
