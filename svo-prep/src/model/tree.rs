//! Constituency parse tree model.
//!
//! The tree is an arena of nodes addressed by `usize` ids, with parent
//! back-references wired once at construction time so sibling lookup never
//! has to recompute a path from the root. Extractors only ever read the
//! arena; nothing in this crate mutates a tree after it has been handed to
//! the pipeline.
//!
//! Labels are overloaded the way bracketed trees overload them: internal
//! nodes carry phrase tags ("S", "NP"), pre-terminals carry part-of-speech
//! tags ("NN", "VBZ"), and leaves carry the literal word.

use crate::error::MalformedTreeError;
use serde::{Deserialize, Serialize};

/// Index of a node inside a [`ParseTree`] arena.
pub type NodeId = usize;

/// A single node: category tag (or literal word, for leaves), ordered
/// children, and a back-reference to the parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseNode {
    pub label: String,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

/// Arena-backed parse tree. The first node pushed is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseTree {
    nodes: Vec<ParseNode>,
}

impl ParseTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Append a node and wire it under `parent` (if any). Returns its id.
    pub fn push_node(&mut self, label: impl Into<String>, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(ParseNode {
            label: label.into(),
            children: Vec::new(),
            parent,
        });
        if let Some(p) = parent {
            self.nodes[p].children.push(id);
        }
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root id. Only meaningful on a non-empty tree.
    pub fn root(&self) -> NodeId {
        0
    }

    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id].label
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Leaf nodes carry the literal word as their label.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.nodes[id].children.is_empty()
    }

    /// A pre-terminal has exactly one child and that child is a leaf.
    pub fn is_preterminal(&self, id: NodeId) -> bool {
        let children = &self.nodes[id].children;
        children.len() == 1 && self.is_leaf(children[0])
    }

    /// The word under `id`, if `id` is a pre-terminal.
    pub fn word(&self, id: NodeId) -> Option<&str> {
        if self.is_preterminal(id) {
            Some(self.label(self.nodes[id].children[0]))
        } else {
            None
        }
    }

    /// Structural validation, run once before extraction.
    ///
    /// The minimal tree contract leaves malformed input undefined; here it
    /// fails fast instead. Rejected shapes: an empty arena, a bare word at
    /// the root, and a node mixing a word child with other constituents
    /// (a pre-terminal must have exactly one child, the word).
    pub fn validate(&self) -> Result<(), MalformedTreeError> {
        if self.nodes.is_empty() {
            return Err(MalformedTreeError::Empty);
        }
        if self.is_leaf(self.root()) {
            return Err(MalformedTreeError::BareRoot {
                word: self.label(self.root()).to_string(),
            });
        }
        for (id, node) in self.nodes.iter().enumerate() {
            if node.children.len() > 1 && node.children.iter().any(|&c| self.is_leaf(c)) {
                return Err(MalformedTreeError::MixedChildren {
                    label: self.label(id).to_string(),
                });
            }
        }
        Ok(())
    }
}
