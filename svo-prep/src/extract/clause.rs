//! Clause scan driver.
//!
//! Walks every sub-tree of the parse tree in pre-order, decomposes each
//! clause-tagged sub-tree into its immediate constituents, and runs the
//! subject/predicate/object extractors when both an NP and a VP child are
//! present. Predicate runs before object, since the object extractor
//! consumes the sibling set the predicate extractor computed; the set is
//! passed directly, so nothing leaks from one clause into the next.

use crate::config::model::SvoConfig;
use crate::core::index;
use crate::extract::{object, predicate, subject};
use crate::model::tree::{NodeId, ParseTree};
use crate::model::triple::SvoTriple;
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// Extract all triples from the tree, document order.
///
/// An empty tree yields an empty result; callers that want the
/// fail-fast [`crate::error::MalformedTreeError`] should go through
/// [`crate::run::process_tree`], which validates before scanning.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = tree.len()))]
pub fn scan(tree: &ParseTree, config: &SvoConfig) -> Vec<SvoTriple> {
    if tree.is_empty() {
        warn!("empty tree; nothing to scan");
        return Vec::new();
    }

    let mut out: Vec<SvoTriple> = Vec::new();

    for id in index::flatten(tree, tree.root()) {
        if !config.tags.is_clause(tree.label(id)) {
            continue;
        }

        // Immediate children keyed by category label. Duplicate labels keep
        // the rightmost child (last-one-wins).
        let mut by_label: HashMap<&str, NodeId> = HashMap::new();
        for &child in tree.children(id) {
            by_label.insert(tree.label(child), child);
        }

        let (Some(&np), Some(&vp)) = (by_label.get("NP"), by_label.get("VP")) else {
            trace!(clause = tree.label(id), "skipped: missing NP or VP child");
            continue;
        };

        let subject = subject::extract_subject(tree, np, &config.tags);
        let outcome = predicate::extract_predicate(tree, vp, id, config);
        let object = object::extract_object(tree, &outcome.siblings, &config.tags);

        if subject.head.is_some() && outcome.role.head.is_some() && object.head.is_some() {
            out.push(SvoTriple::new(
                tree.label(id),
                out.len(),
                subject,
                outcome.role,
                object,
            ));
        } else {
            debug!(clause = tree.label(id), "skipped: incomplete roles");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::bracketed::read_tree;

    fn scan_text(text: &str) -> Vec<SvoTriple> {
        let tree = read_tree(text).unwrap();
        scan(&tree, &SvoConfig::default())
    }

    fn heads(t: &SvoTriple) -> (Option<&str>, Option<&str>, Option<&str>) {
        (
            t.subject.head.as_deref(),
            t.predicate.head.as_deref(),
            t.object.head.as_deref(),
        )
    }

    #[test]
    fn no_clause_means_no_triples() {
        assert!(scan_text("(NP (DT the) (NN dog))").is_empty());
    }

    #[test]
    fn empty_tree_scans_to_nothing() {
        // Direct callers bypassing run::process_tree's validation must not
        // hit an out-of-bounds root access.
        assert!(scan(&ParseTree::new(), &SvoConfig::default()).is_empty());
    }

    #[test]
    fn clause_without_np_yields_nothing() {
        // Imperative: VP but no NP child under the clause.
        assert!(scan_text("(S (VP (VB run) (NP (NN home))))").is_empty());
    }

    #[test]
    fn clause_without_vp_yields_nothing() {
        assert!(scan_text("(FRAG (NP (NN dog)))").is_empty());
    }

    #[test]
    fn simple_transitive_clause() {
        let triples = scan_text("(S (NP (NN dog)) (VP (VBZ chases) (NP (DT a) (NN cat))))");
        assert_eq!(triples.len(), 1);
        assert_eq!(heads(&triples[0]), (Some("dog"), Some("chases"), Some("cat")));
        assert_eq!(triples[0].clause, "S");
    }

    #[test]
    fn coordinate_clauses_in_document_order() {
        let triples = scan_text(
            "(S (S (NP (NNS cats)) (VP (VBP meow) (NP (NNS tunes)))) \
             (CC and) \
             (S (NP (NNS dogs)) (VP (VBP bark) (NP (NNS orders)))))",
        );
        assert_eq!(triples.len(), 2);
        assert_eq!(heads(&triples[0]), (Some("cats"), Some("meow"), Some("tunes")));
        assert_eq!(heads(&triples[1]), (Some("dogs"), Some("bark"), Some("orders")));
    }

    #[test]
    fn triples_never_exceed_clause_count() {
        let tree = read_tree(
            "(S (NP (NN dog)) (VP (VBZ says) (SBAR (S (NP (PRP it)) (VP (VBZ hates) (NP (NN rain)))))))",
        )
        .unwrap();
        let clause_count = index::flatten(&tree, tree.root())
            .into_iter()
            .filter(|&id| SvoConfig::default().tags.is_clause(tree.label(id)))
            .count();
        let triples = scan(&tree, &SvoConfig::default());
        assert!(triples.len() <= clause_count);
        // Outer S, SBAR, inner S are all clauses; the SBAR itself has no
        // NP/VP children and contributes nothing.
        assert_eq!(clause_count, 3);
        assert_eq!(triples.len(), 2);
    }

    #[test]
    fn duplicate_child_labels_keep_the_rightmost() {
        // Two NP children under the clause: the second one supplies the
        // subject (last-one-wins in the child map).
        let triples = scan_text(
            "(S (NP (NN cat)) (NP (NN dog)) (VP (VBZ eats) (NP (NN bone))))",
        );
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].subject.head.as_deref(), Some("dog"));
    }

    #[test]
    fn no_sibling_state_leaks_between_clauses() {
        // First clause has a rich sibling set; the second clause's VP has
        // no object-bearing sibling, so its object must come out absent and
        // the clause must emit nothing.
        let triples = scan_text(
            "(S (S (NP (NN dog)) (VP (VBZ eats) (NP (NN bone)))) \
             (CC and) \
             (S (NP (NN cat)) (VP (VBZ sleeps))))",
        );
        assert_eq!(triples.len(), 1);
        assert_eq!(heads(&triples[0]), (Some("dog"), Some("eats"), Some("bone")));
    }

    #[test]
    fn scan_is_idempotent() {
        let tree = read_tree("(S (NP (NN dog)) (VP (VBZ chases) (NP (NN cat))))").unwrap();
        let first = scan(&tree, &SvoConfig::default());
        let second = scan(&tree, &SvoConfig::default());
        assert_eq!(first, second);
    }
}
