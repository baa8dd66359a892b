//! svo-prep: Subject–Verb–Object triple extraction from constituency
//! parse trees.
//!
//! # Architecture
//!
//! - `model/`   — parse-tree arena, category tag sets, triple records
//! - `core/`    — tree-walking utilities and the debug pretty-printer
//! - `extract/` — subject / predicate / object extractors and the clause
//!   scan driver
//! - `config/`  — extraction policy configuration (YAML/env loadable)
//! - `reader/`  — external-parser seam and the bracketed-tree reader
//! - `export/`  — JSONL artifact writers
//! - `run.rs`   — pipeline orchestration
//!
//! The constituency parser itself is an external collaborator: anything
//! that can produce a [`ParseTree`] (a [`ConstituencyParser`]
//! implementation, or pre-parsed bracketed text through
//! [`reader::bracketed`]) can feed the pipeline in [`run`].
//!
//! # Example
//! ```
//! use svo_prep::{SvoConfig, reader::bracketed, run};
//!
//! let tree = bracketed::read_tree(
//!     "(S (NP (NN squirrel)) (VP (VBZ eats) (NP (DT an) (NN acorn))))",
//! )
//! .unwrap();
//! let triples = run::process_tree(&tree, &SvoConfig::default()).unwrap();
//! assert_eq!(triples[0].subject.head.as_deref(), Some("squirrel"));
//! assert_eq!(triples[0].predicate.head.as_deref(), Some("eats"));
//! assert_eq!(triples[0].object.head.as_deref(), Some("acorn"));
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod extract;
pub mod model;
pub mod reader;
pub mod run;

pub use config::model::SvoConfig;
pub use error::{MalformedTreeError, SvoPrepError, TreeReadError};
pub use model::tree::ParseTree;
pub use model::triple::{RoleResult, SvoTriple};
pub use reader::ConstituencyParser;
