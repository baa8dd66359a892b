//! Subject head extraction from a noun-phrase sub-tree.

use crate::core::index;
use crate::model::tagset::Tagset;
use crate::model::tree::{NodeId, ParseTree};
use crate::model::triple::RoleResult;

/// First-match policy: the first noun-tagged pre-terminal in document order
/// supplies the head. Ties break purely on position, not on any
/// head-of-phrase grammar rule.
pub fn extract_subject(tree: &ParseTree, np: NodeId, tags: &Tagset) -> RoleResult {
    RoleResult::with_head(index::first_head(tree, np, &tags.noun))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::bracketed::read_tree;

    fn subject_of(text: &str) -> Option<String> {
        let tree = read_tree(text).unwrap();
        extract_subject(&tree, tree.root(), &Tagset::default()).head
    }

    #[test]
    fn first_noun_wins() {
        // Two noun pre-terminals: the first in document order is the head.
        assert_eq!(
            subject_of("(NP (NN cat) (NN dog))").as_deref(),
            Some("cat")
        );
    }

    #[test]
    fn skips_non_noun_tags() {
        assert_eq!(
            subject_of("(NP (DT a) (JJ rare) (JJ black) (NN squirrel))").as_deref(),
            Some("squirrel")
        );
    }

    #[test]
    fn pronoun_counts_as_noun() {
        assert_eq!(subject_of("(NP (PRP it))").as_deref(), Some("it"));
    }

    #[test]
    fn absent_when_no_noun() {
        let role = {
            let tree = read_tree("(NP (DT the) (JJ red))").unwrap();
            extract_subject(&tree, tree.root(), &Tagset::default())
        };
        assert_eq!(role.head, None);
        assert_eq!(role.attributes, None);
    }
}
