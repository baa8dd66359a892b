//! Parse-tree inspection hook.
//!
//! [`maybe_debug_tree`] can be invoked from the pipeline; it is a no-op
//! unless the `SVO_DEBUG_TREE` environment variable is set to a truthy
//! value, in which case each processed tree is dumped in indented
//! bracketed form for human inspection. Pure passthrough, no core logic.

use crate::model::tree::{NodeId, ParseTree};
use std::fmt::Write;

/// Dump the tree to stdout if `SVO_DEBUG_TREE` is enabled.
pub fn maybe_debug_tree(tree: &ParseTree) {
    match std::env::var("SVO_DEBUG_TREE") {
        Ok(v) if v == "1" || v.eq_ignore_ascii_case("true") => {}
        _ => return,
    }
    println!("========== PARSE TREE ==========\n{}", pretty(tree));
}

/// Render the tree as indented bracketed text, one constituent per line,
/// pre-terminals inline with their word.
pub fn pretty(tree: &ParseTree) -> String {
    let mut out = String::new();
    if !tree.is_empty() {
        render(tree, tree.root(), 0, &mut out);
        out.push('\n');
    }
    out
}

fn render(tree: &ParseTree, id: NodeId, depth: usize, out: &mut String) {
    if let Some(word) = tree.word(id) {
        let _ = write!(out, "({} {})", tree.label(id), word);
        return;
    }
    if tree.is_leaf(id) {
        // Bare leaf outside a pre-terminal; only reachable on trees that
        // would fail validation, but render it rather than panic.
        out.push_str(tree.label(id));
        return;
    }
    let _ = write!(out, "({}", tree.label(id));
    for &child in tree.children(id) {
        out.push('\n');
        for _ in 0..=depth {
            out.push_str("  ");
        }
        render(tree, child, depth + 1, out);
    }
    out.push(')');
}
