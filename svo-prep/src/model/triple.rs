//! Extraction result records.
//!
//! A triple is assembled once per qualifying clause and is immutable from
//! then on; it carries no reference back into the source tree. Records are
//! serde-friendly so they can go straight to JSON/JSONL consumers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The chosen lexical head for one syntactic role.
///
/// `attributes` is reserved for future enrichment (modifiers of the head,
/// e.g. adjectives of a subject). The core never populates it; the field is
/// kept so downstream consumers see a stable shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleResult {
    pub head: Option<String>,
    #[serde(default)]
    pub attributes: Option<Vec<String>>,
}

impl RoleResult {
    /// A role with the given head (or none) and empty attributes.
    pub fn with_head(head: Option<String>) -> Self {
        Self {
            head,
            attributes: None,
        }
    }

    /// A role with no head found.
    pub fn absent() -> Self {
        Self::with_head(None)
    }
}

/// One subject–predicate–object triple extracted from a clause sub-tree.
///
/// Emitted only when all three heads are present; no partial triples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvoTriple {
    /// Deterministic UUIDv5 over the stable key, reproducible across runs.
    pub triple_id: String,
    /// Category label of the clause sub-tree this triple came from.
    pub clause: String,
    pub subject: RoleResult,
    pub predicate: RoleResult,
    pub object: RoleResult,
}

impl SvoTriple {
    /// Assemble a triple for the `ordinal`-th emitted clause of a scan.
    pub fn new(
        clause: &str,
        ordinal: usize,
        subject: RoleResult,
        predicate: RoleResult,
        object: RoleResult,
    ) -> Self {
        let key = stable_key(clause, ordinal, &subject, &predicate, &object);
        let triple_id = Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()).to_string();
        Self {
            triple_id,
            clause: clause.to_string(),
            subject,
            predicate,
            object,
        }
    }
}

/// Reproducible composite key: `{clause}|{ordinal}|{subject}|{predicate}|{object}`.
fn stable_key(
    clause: &str,
    ordinal: usize,
    subject: &RoleResult,
    predicate: &RoleResult,
    object: &RoleResult,
) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        clause,
        ordinal,
        subject.head.as_deref().unwrap_or(""),
        predicate.head.as_deref().unwrap_or(""),
        object.head.as_deref().unwrap_or("")
    )
}
