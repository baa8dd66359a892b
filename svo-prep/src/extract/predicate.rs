//! Predicate head extraction from a verb-phrase sub-tree.
//!
//! Besides the head word, this computes the ordered set of object-bearing
//! siblings of the chosen verb's parent, which is the sole channel from
//! predicate extraction to object extraction. The set travels by value in
//! [`PredicateOutcome`]; no state is carried between clauses or scans.

use crate::config::model::{HeadPolicy, SvoConfig};
use crate::core::index;
use crate::model::tree::{NodeId, ParseTree};
use crate::model::triple::RoleResult;
use tracing::debug;

/// Predicate head plus the sibling constituents the object extractor scans.
#[derive(Debug, Clone)]
pub struct PredicateOutcome {
    pub role: RoleResult,
    /// Object-bearing siblings of the verb anchor's parent, document order.
    /// Empty when no verb was found.
    pub siblings: Vec<NodeId>,
}

/// Scan the verb-phrase sub-tree for a verb-tagged pre-terminal.
///
/// Under the default [`HeadPolicy::Last`] the scan keeps overwriting, so
/// the rightmost verb wins and becomes the anchor for sibling lookup; under
/// `First` the scan stops at the leftmost verb. `clause` scopes the sibling
/// lookup to the clause currently being decomposed.
pub fn extract_predicate(
    tree: &ParseTree,
    vp: NodeId,
    clause: NodeId,
    config: &SvoConfig,
) -> PredicateOutcome {
    let mut anchor: Option<NodeId> = None;
    for id in index::preterminals(tree, vp) {
        if config.tags.is_verb(tree.label(id)) {
            anchor = Some(id);
            if config.heads.predicate_policy == HeadPolicy::First {
                break;
            }
        }
    }

    let Some(anchor) = anchor else {
        return PredicateOutcome {
            role: RoleResult::absent(),
            siblings: Vec::new(),
        };
    };

    let head = tree.word(anchor).map(str::to_string);
    let siblings: Vec<NodeId> = index::siblings_under(tree, anchor, clause)
        .into_iter()
        .filter(|&sib| config.tags.is_object_phrase(tree.label(sib)))
        .collect();
    debug!(
        verb = head.as_deref().unwrap_or(""),
        tag = tree.label(anchor),
        siblings = siblings.len(),
        "predicate anchor chosen"
    );

    PredicateOutcome {
        role: RoleResult::with_head(head),
        siblings,
    }
}
