//! JSONL writer for extracted triples.
//!
//! One compact JSON object per line, grep-friendly and easy to stream. The
//! format is stable across runs; avoid breaking changes unless versioned
//! explicitly.

use crate::model::triple::SvoTriple;
use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::info;

/// Write [`SvoTriple`]s as JSON Lines.
///
/// Triples are serialized directly via [`serde`], one per line.
pub fn write_triples_jsonl(path: &Path, triples: &[SvoTriple]) -> Result<()> {
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(f);

    for t in triples {
        serde_json::to_writer(&mut w, t)?;
        w.write_all(b"\n")?;
    }

    w.flush()?;
    info!("jsonl: wrote triples -> {}", path.display());
    Ok(())
}
