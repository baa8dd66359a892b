//! Configuration data structures for the SVO extraction pipeline.
//!
//! Groups:
//! - [`SvoConfig`]  — top-level container for all config groups
//! - [`HeadRules`]  — head-selection policies
//! - [`Limits`]     — size guards for pathological parser output
//!
//! All structs are `serde`-friendly so they can be loaded from YAML/JSON.

use crate::model::tagset::Tagset;
use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the pipeline.
///
/// Wraps all sub-configs and provides validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SvoConfig {
    /// Category sets driving head selection and clause detection.
    #[serde(default)]
    pub tags: Tagset,
    /// Head-selection policies.
    #[serde(default)]
    pub heads: HeadRules,
    /// Size guards.
    #[serde(default)]
    pub limits: Limits,
}

impl SvoConfig {
    /// Validate config sanity (no degenerate or absurd values).
    pub fn validate(&self) -> Result<()> {
        if self.tags.noun.is_empty() {
            return Err(anyhow!("`tags.noun` must not be empty"));
        }
        if self.tags.verb.is_empty() {
            return Err(anyhow!("`tags.verb` must not be empty"));
        }
        if self.tags.adjective.is_empty() {
            return Err(anyhow!("`tags.adjective` must not be empty"));
        }
        if self.tags.clause.is_empty() {
            return Err(anyhow!("`tags.clause` must not be empty"));
        }
        if self.tags.object_phrase.is_empty() {
            return Err(anyhow!("`tags.object_phrase` must not be empty"));
        }
        if self.tags.nominal_phrase.is_empty() {
            return Err(anyhow!("`tags.nominal_phrase` must not be empty"));
        }
        Ok(())
    }
}

/// Which match wins when several pre-terminals carry a qualifying tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadPolicy {
    /// Leftmost match in document order.
    First,
    /// Rightmost match in document order.
    #[default]
    Last,
}

/// Head-selection policies.
///
/// Subject and object heads are always first-match. The predicate scan is
/// the odd one out: it keeps overwriting, so the last verb-tagged
/// pre-terminal wins, which in a copular construction picks the main verb
/// over the auxiliary ("has become" -> "become"). That is the default;
/// `first` is available for callers that want one uniform policy.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HeadRules {
    #[serde(default)]
    pub predicate_policy: HeadPolicy,
}

/// Size guards for scanning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum number of tree nodes to scan (0 = unlimited). Trees over the
    /// limit are skipped with a warning instead of being scanned.
    #[serde(default)]
    pub max_tree_nodes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_tree_nodes: 0 }
    }
}
