//! Tree-walking utilities shared by all extractors.
//!
//! All walks are iterative (explicit stack) and visit nodes in pre-order,
//! i.e. document order: children are pushed reversed so the leftmost child
//! is popped first. Document order is what breaks ties everywhere in the
//! extraction heuristics, so every helper here must preserve it.

use crate::model::tree::{NodeId, ParseTree};

/// All descendants of `root` (the sub-tree root included), pre-order.
pub fn flatten(tree: &ParseTree, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        out.push(id);
        for &child in tree.children(id).iter().rev() {
            stack.push(child);
        }
    }
    out
}

/// Pre-terminal descendants of `root`, pre-order.
pub fn preterminals(tree: &ParseTree, root: NodeId) -> Vec<NodeId> {
    flatten(tree, root)
        .into_iter()
        .filter(|&id| tree.is_preterminal(id))
        .collect()
}

/// Word under the first pre-terminal below `root` whose tag is in `tags`.
pub fn first_head(tree: &ParseTree, root: NodeId, tags: &[String]) -> Option<String> {
    preterminals(tree, root).into_iter().find_map(|id| {
        if tags.iter().any(|t| t == tree.label(id)) {
            tree.word(id).map(str::to_string)
        } else {
            None
        }
    })
}

/// The other children of `anchor`'s immediate parent, document order.
///
/// `ancestor` scopes the lookup: if `anchor` does not sit below `ancestor`
/// the parent pointer belongs to some other part of the tree and the result
/// is empty rather than a cross-clause sibling list.
pub fn siblings_under(tree: &ParseTree, anchor: NodeId, ancestor: NodeId) -> Vec<NodeId> {
    let Some(parent) = tree.parent(anchor) else {
        return Vec::new();
    };

    let mut cur = anchor;
    let mut inside = false;
    while let Some(p) = tree.parent(cur) {
        if p == ancestor {
            inside = true;
            break;
        }
        cur = p;
    }
    if !inside {
        return Vec::new();
    }

    tree.children(parent)
        .iter()
        .copied()
        .filter(|&c| c != anchor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::bracketed::read_tree;

    /// First node with the given label, pre-order.
    fn find(tree: &ParseTree, label: &str) -> NodeId {
        flatten(tree, tree.root())
            .into_iter()
            .find(|&id| tree.label(id) == label)
            .unwrap()
    }

    #[test]
    fn flatten_is_preorder() {
        let t = read_tree("(S (NP (NN dog)) (VP (VBZ runs)))").unwrap();
        let labels: Vec<&str> = flatten(&t, t.root())
            .into_iter()
            .map(|id| t.label(id))
            .collect();
        assert_eq!(
            labels,
            vec!["S", "NP", "NN", "dog", "VP", "VBZ", "runs"]
        );
    }

    #[test]
    fn preterminals_in_document_order() {
        let t = read_tree("(S (NP (DT the) (NN dog)) (VP (VBZ runs)))").unwrap();
        let words: Vec<Option<&str>> = preterminals(&t, t.root())
            .into_iter()
            .map(|id| t.word(id))
            .collect();
        assert_eq!(words, vec![Some("the"), Some("dog"), Some("runs")]);
    }

    #[test]
    fn first_head_takes_leftmost_match() {
        let t = read_tree("(NP (NN cat) (NN dog))").unwrap();
        let tags = vec!["NN".to_string()];
        assert_eq!(first_head(&t, t.root(), &tags), Some("cat".to_string()));
    }

    #[test]
    fn siblings_exclude_anchor_and_keep_order() {
        let t = read_tree("(S (NP (NN dog)) (VP (VBZ eats) (NP (NN bone)) (PP (TO to))))")
            .unwrap();
        let anchor = find(&t, "VBZ");
        let clause = find(&t, "S");
        let labels: Vec<&str> = siblings_under(&t, anchor, clause)
            .into_iter()
            .map(|id| t.label(id))
            .collect();
        assert_eq!(labels, vec!["NP", "PP"]);
    }

    #[test]
    fn siblings_empty_outside_ancestor() {
        let t = read_tree("(S (NP (NN dog)) (VP (VBZ eats) (NP (NN bone))))").unwrap();
        let anchor = find(&t, "VBZ");
        let np = find(&t, "NP"); // subject NP, not an ancestor of the verb
        assert!(siblings_under(&t, anchor, np).is_empty());
    }
}
