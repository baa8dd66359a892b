//! Object head extraction from the predicate's sibling set.
//!
//! The sibling set is consumed exactly once per clause, in document order.
//! Two rules:
//! - the first nominal sibling (NP/PP by default) always terminates the
//!   scan, whether or not a noun head was found inside it;
//! - any other sibling (ADJP, per the default filter) contributes its first
//!   adjective-tagged word as a candidate that later adjectival siblings
//!   may overwrite; a later miss leaves an earlier candidate in place.

use crate::core::index;
use crate::model::tagset::Tagset;
use crate::model::tree::{NodeId, ParseTree};
use crate::model::triple::RoleResult;

pub fn extract_object(tree: &ParseTree, siblings: &[NodeId], tags: &Tagset) -> RoleResult {
    let mut head: Option<String> = None;
    for &sib in siblings {
        if tags.is_nominal_phrase(tree.label(sib)) {
            if let Some(word) = index::first_head(tree, sib, &tags.noun) {
                head = Some(word);
            }
            // First nominal sibling ends the search, found or not.
            break;
        }
        if let Some(word) = index::first_head(tree, sib, &tags.adjective) {
            head = Some(word);
        }
    }
    RoleResult::with_head(head)
}
