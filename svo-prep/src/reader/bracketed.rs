//! Reader for bracketed (Penn-style) tree text.
//!
//! Grammar: `tree := "(" LABEL (tree | WORD)* ")"`. A constituent whose only
//! content is a single word becomes a pre-terminal; a constituent with no
//! content at all is rejected, so the category/word ambiguity of the arena
//! model cannot arise from this reader.
//!
//! [`read_trees`] handles batches, one tree per non-blank line.

use crate::error::TreeReadError;
use crate::model::tree::{NodeId, ParseTree};
use regex::Regex;
use std::sync::OnceLock;

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn token_re() -> &'static Regex {
    TOKEN_RE.get_or_init(|| Regex::new(r"[()]|[^()\s]+").expect("token regex compiles"))
}

#[derive(Debug, Clone, Copy)]
enum Token<'a> {
    Open(usize),
    Close(usize),
    Word(usize, &'a str),
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    token_re()
        .find_iter(input)
        .map(|m| match m.as_str() {
            "(" => Token::Open(m.start()),
            ")" => Token::Close(m.start()),
            w => Token::Word(m.start(), w),
        })
        .collect()
}

/// Read exactly one tree from `input`. Trailing non-whitespace is an error.
pub fn read_tree(input: &str) -> Result<ParseTree, TreeReadError> {
    let mut tree = ParseTree::new();
    // Currently open constituents, innermost last.
    let mut open: Vec<NodeId> = Vec::new();
    let mut root: Option<NodeId> = None;
    // Set right after `(`: the next token must be the constituent label.
    let mut expect_label = false;

    for token in tokenize(input) {
        match token {
            Token::Open(pos) => {
                if expect_label {
                    return Err(TreeReadError::MissingLabel { pos });
                }
                if root.is_some() && open.is_empty() {
                    return Err(TreeReadError::TrailingInput { pos });
                }
                expect_label = true;
            }
            Token::Word(pos, word) => {
                if expect_label {
                    let parent = open.last().copied();
                    let id = tree.push_node(word, parent);
                    if parent.is_none() {
                        root = Some(id);
                    }
                    open.push(id);
                    expect_label = false;
                } else if let Some(&parent) = open.last() {
                    tree.push_node(word, Some(parent));
                } else if root.is_some() {
                    return Err(TreeReadError::TrailingInput { pos });
                } else {
                    return Err(TreeReadError::BareWord { pos });
                }
            }
            Token::Close(pos) => {
                if expect_label {
                    return Err(TreeReadError::EmptyConstituent { pos });
                }
                let Some(id) = open.pop() else {
                    return Err(TreeReadError::Unbalanced { pos });
                };
                if tree.children(id).is_empty() {
                    return Err(TreeReadError::EmptyConstituent { pos });
                }
            }
        }
    }

    if expect_label || !open.is_empty() {
        return Err(TreeReadError::Unbalanced { pos: input.len() });
    }
    match root {
        Some(_) => Ok(tree),
        None => Err(TreeReadError::Empty),
    }
}

/// Read a batch: one tree per non-blank line. An empty input yields an
/// empty batch, not an error.
pub fn read_trees(input: &str) -> Result<Vec<ParseTree>, TreeReadError> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(read_tree)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_simple_tree() {
        let t = read_tree("(S (NP (NN dog)) (VP (VBZ runs)))").unwrap();
        assert_eq!(t.len(), 7);
        assert_eq!(t.label(t.root()), "S");
        assert!(t.validate().is_ok());
    }

    #[test]
    fn preterminal_word_is_a_leaf() {
        let t = read_tree("(NP (DT the) (NN dog))").unwrap();
        let preterms: Vec<&str> = (0..t.len())
            .filter(|&id| t.is_preterminal(id))
            .map(|id| t.word(id).unwrap())
            .collect();
        assert_eq!(preterms, vec!["the", "dog"]);
    }

    #[test]
    fn rejects_unbalanced() {
        assert_eq!(
            read_tree("(S (NP (NN dog)"),
            Err(TreeReadError::Unbalanced { pos: 15 })
        );
        assert!(matches!(
            read_tree("(S (NN dog)))"),
            Err(TreeReadError::Unbalanced { .. })
        ));
    }

    #[test]
    fn rejects_empty_constituent() {
        assert!(matches!(
            read_tree("()"),
            Err(TreeReadError::EmptyConstituent { .. })
        ));
        assert!(matches!(
            read_tree("(NP)"),
            Err(TreeReadError::EmptyConstituent { .. })
        ));
        assert!(matches!(
            read_tree("(NP (DT))"),
            Err(TreeReadError::EmptyConstituent { .. })
        ));
    }

    #[test]
    fn rejects_label_in_bracket_position() {
        assert!(matches!(
            read_tree("((NP (NN dog)))"),
            Err(TreeReadError::MissingLabel { .. })
        ));
    }

    #[test]
    fn rejects_bare_word_and_trailing_input() {
        assert!(matches!(read_tree("dog"), Err(TreeReadError::BareWord { .. })));
        assert!(matches!(
            read_tree("(NN dog) extra"),
            Err(TreeReadError::TrailingInput { .. })
        ));
        assert!(matches!(
            read_tree("(NN dog) (NN cat)"),
            Err(TreeReadError::TrailingInput { .. })
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(read_tree("   "), Err(TreeReadError::Empty));
    }

    #[test]
    fn batch_reads_per_line() {
        let trees = read_trees("(NN dog)\n\n(NN cat)\n").unwrap();
        assert_eq!(trees.len(), 2);
        assert!(read_trees("").unwrap().is_empty());
    }
}
