use thiserror::Error;

pub type Result<T> = std::result::Result<T, SvoPrepError>;

/// Crate-level error for the extraction pipeline.
///
/// The algorithm itself degrades gracefully (a clause with no usable heads
/// simply yields no triple); errors only arise from structurally broken
/// input trees or unreadable bracketed text.
#[derive(Debug, Error)]
pub enum SvoPrepError {
    #[error("malformed parse tree: {0}")]
    Malformed(#[from] MalformedTreeError),

    #[error("bracketed tree: {0}")]
    Read(#[from] TreeReadError),
}

/// Structural violations of the parse-tree contract.
///
/// The minimal contract leaves these undefined; we fail fast instead of
/// silently extracting from a tree the heuristics were never written for.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedTreeError {
    #[error("tree has no nodes")]
    Empty,

    #[error("root is a bare word `{word}` with no category above it")]
    BareRoot { word: String },

    #[error("node `{label}` mixes a word child with sibling constituents")]
    MixedChildren { label: String },
}

/// Syntax errors while reading bracketed (Penn-style) tree text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeReadError {
    #[error("input contains no tree")]
    Empty,

    #[error("unbalanced bracket at byte {pos}")]
    Unbalanced { pos: usize },

    #[error("empty constituent at byte {pos}")]
    EmptyConstituent { pos: usize },

    #[error("expected a category label at byte {pos}")]
    MissingLabel { pos: usize },

    #[error("bare word outside any constituent at byte {pos}")]
    BareWord { pos: usize },

    #[error("trailing input after the tree at byte {pos}")]
    TrailingInput { pos: usize },
}
