//! Part-of-speech and phrase category sets.
//!
//! Defaults follow the Penn Treebank tagset the extraction heuristics were
//! written against. The sets are plain string lists so a config file can
//! override them; keep overrides conservative, the extractors assume an
//! English-style tagset.

use serde::{Deserialize, Serialize};

/// Category sets that drive head selection and clause detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tagset {
    /// Pre-terminal tags that can supply a subject/object head.
    #[serde(default = "default_noun")]
    pub noun: Vec<String>,
    /// Pre-terminal tags that can supply a predicate head.
    #[serde(default = "default_verb")]
    pub verb: Vec<String>,
    /// Pre-terminal tags that can supply an adjectival object head.
    #[serde(default = "default_adjective")]
    pub adjective: Vec<String>,
    /// Sub-tree roots treated as clauses by the scanner.
    #[serde(default = "default_clause")]
    pub clause: Vec<String>,
    /// Sibling constituents considered object-bearing.
    #[serde(default = "default_object_phrase")]
    pub object_phrase: Vec<String>,
    /// Subset of `object_phrase` that carries a noun head and terminates
    /// the object scan; the rest are treated as adjectival. Keep the two
    /// sets in sync when overriding.
    #[serde(default = "default_nominal_phrase")]
    pub nominal_phrase: Vec<String>,
}

impl Default for Tagset {
    fn default() -> Self {
        Self {
            noun: default_noun(),
            verb: default_verb(),
            adjective: default_adjective(),
            clause: default_clause(),
            object_phrase: default_object_phrase(),
            nominal_phrase: default_nominal_phrase(),
        }
    }
}

impl Tagset {
    pub fn is_noun(&self, tag: &str) -> bool {
        self.noun.iter().any(|t| t == tag)
    }

    pub fn is_verb(&self, tag: &str) -> bool {
        self.verb.iter().any(|t| t == tag)
    }

    pub fn is_adjective(&self, tag: &str) -> bool {
        self.adjective.iter().any(|t| t == tag)
    }

    pub fn is_clause(&self, tag: &str) -> bool {
        self.clause.iter().any(|t| t == tag)
    }

    pub fn is_object_phrase(&self, tag: &str) -> bool {
        self.object_phrase.iter().any(|t| t == tag)
    }

    pub fn is_nominal_phrase(&self, tag: &str) -> bool {
        self.nominal_phrase.iter().any(|t| t == tag)
    }
}

fn split(tags: &str) -> Vec<String> {
    tags.split_whitespace().map(str::to_string).collect()
}

fn default_noun() -> Vec<String> {
    split("NN NNP NNPS NNS PRP")
}

fn default_verb() -> Vec<String> {
    split("VB VBD VBG VBN VBP VBZ")
}

fn default_adjective() -> Vec<String> {
    split("JJ JJR")
}

fn default_clause() -> Vec<String> {
    split("S SQ SBAR SBARQ SINV FRAG")
}

fn default_object_phrase() -> Vec<String> {
    split("NP PP ADJP")
}

fn default_nominal_phrase() -> Vec<String> {
    split("NP PP")
}
