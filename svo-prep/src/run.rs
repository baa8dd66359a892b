//! High-level orchestration for extracting SVO triples from parse trees.
//!
//! Entry points:
//! - [`process_tree`]     — validate a tree and scan it for triples
//! - [`process_sentence`] — parse a raw sentence through an external
//!   [`ConstituencyParser`], then scan the result
//! - [`persist_triples`]  — write triples + summary into a timestamped
//!   folder under `<out_root>/svo_data/`

use crate::{
    config::model::SvoConfig,
    core::debug_tree,
    error::Result,
    extract::clause,
    export::jsonl,
    model::{tree::ParseTree, triple::SvoTriple},
    reader::ConstituencyParser,
};
use anyhow::Context;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Scan one parse tree for subject–verb–object triples.
///
/// The tree is validated first and a [`crate::error::MalformedTreeError`]
/// surfaces before any extraction runs. One scan runs to completion and
/// returns the whole result sequence; there is no streaming output.
#[tracing::instrument(level = "info", skip_all, fields(nodes = tree.len()))]
pub fn process_tree(tree: &ParseTree, config: &SvoConfig) -> Result<Vec<SvoTriple>> {
    tree.validate()?;

    let limit = config.limits.max_tree_nodes;
    if limit > 0 && tree.len() > limit {
        warn!(nodes = tree.len(), limit, "tree exceeds node limit; skipping");
        return Ok(Vec::new());
    }

    debug_tree::maybe_debug_tree(tree);

    let triples = clause::scan(tree, config);
    info!(count = triples.len(), "extracted triples");
    Ok(triples)
}

/// Parse a raw sentence with the supplied external parser, then scan the
/// resulting tree. Parser failures propagate to the caller unchanged.
pub fn process_sentence(
    parser: &dyn ConstituencyParser,
    sentence: &str,
    config: &SvoConfig,
) -> anyhow::Result<Vec<SvoTriple>> {
    let tree = parser.parse(sentence)?;
    Ok(process_tree(&tree, config)?)
}

/// Persist triples into `<out_root>/svo_data/<timestamp>/`.
///
/// Writes `triples.jsonl` plus a small `summary.json` with counts, and
/// returns the created directory.
#[tracing::instrument(level = "info", skip_all, fields(out_root = %out_root.display()))]
pub fn persist_triples(out_root: &Path, triples: &[SvoTriple]) -> anyhow::Result<PathBuf> {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let out_dir: PathBuf = out_root.join("svo_data").join(timestamp);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create {}", out_dir.display()))?;

    jsonl::write_triples_jsonl(&out_dir.join("triples.jsonl"), triples)?;

    let summary = serde_json::json!({
        "triples": triples.len(),
        "generated_at": Utc::now().to_rfc3339(),
    });
    std::fs::write(
        out_dir.join("summary.json"),
        serde_json::to_vec_pretty(&summary)?,
    )
    .with_context(|| format!("write summary in {}", out_dir.display()))?;

    info!(out_dir = %out_dir.display(), "artifacts saved");
    Ok(out_dir)
}
