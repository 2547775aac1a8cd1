//! Walking the parser graph.
//!
//! Grammars built with late binding are cyclic, so every walk tracks the
//! combinators it has already seen.

use std::collections::HashSet;

use crate::late_bound::LateBound;
use crate::parser::Parser;

/// Calls `visit` once for every parser reachable from `root`.
///
/// Parsers sharing a combinator (clones, renamed copies) are visited once.
pub fn walk(root: &Parser, mut visit: impl FnMut(&Parser)) {
    let mut seen = HashSet::new();
    let mut stack = vec![root.clone()];
    while let Some(parser) = stack.pop() {
        if !seen.insert(parser.combinator_id()) {
            continue;
        }
        visit(&parser);
        stack.extend(parser.sub_parsers());
    }
}

/// Returns every late-bound parser reachable from `root` that is not bound.
#[must_use]
pub fn unbound_late_bindings(root: &Parser) -> Vec<Parser> {
    let mut unbound = Vec::new();
    walk(root, |parser| {
        if parser.downcast::<LateBound>().is_some_and(|late| !late.is_bound()) {
            unbound.push(parser.clone());
        }
    });
    unbound
}

/// Counts the distinct combinators reachable from `root`.
#[must_use]
pub fn combinator_count(root: &Parser) -> usize {
    let mut count = 0;
    walk(root, |_| count += 1);
    count
}
