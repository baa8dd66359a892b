//! Input boundary for the pipeline.
//!
//! The constituency parser itself is an external collaborator. Anything
//! that can turn a sentence into a [`ParseTree`] plugs in through
//! [`ConstituencyParser`]; pre-parsed trees in bracketed text come in
//! through [`bracketed`].

pub mod bracketed;

use crate::model::tree::ParseTree;
use anyhow::Result;

/// External parsing service: sentence text in, parse tree out.
///
/// The core never tokenizes or parses raw text; parser failures propagate
/// to the caller unchanged, with no recovery or retry on this side.
pub trait ConstituencyParser {
    fn parse(&self, sentence: &str) -> Result<ParseTree>;
}
