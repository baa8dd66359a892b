//! Configuration loader and validator.
//!
//! Responsibilities:
//! - Read an optional YAML config file pointed to by `SVO_CONFIG`
//! - Apply defaults when the variable or any field is missing
//! - Validate constraints (tag sets must not be empty)

pub mod model;

use crate::config::model::SvoConfig;
use anyhow::{Context, Result};

/// Environment variable naming the YAML config file.
pub const CONFIG_ENV: &str = "SVO_CONFIG";

/// Load [`SvoConfig`] from `SVO_CONFIG`, falling back to defaults if unset.
/// This is the main entry for callers to obtain their configuration.
pub fn load_from_env_or_default() -> Result<SvoConfig> {
    let cfg = match std::env::var(CONFIG_ENV) {
        Ok(path) if !path.trim().is_empty() => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("read config file {path}"))?;
            serde_yml::from_str(&text).with_context(|| format!("parse config file {path}"))?
        }
        _ => SvoConfig::default(),
    };

    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::HeadPolicy;

    #[test]
    fn partial_yaml_overrides_merge_with_defaults() {
        let cfg: SvoConfig = serde_yml::from_str("heads:\n  predicate_policy: first\n").unwrap();
        assert_eq!(cfg.heads.predicate_policy, HeadPolicy::First);
        // Untouched groups keep their defaults.
        assert!(cfg.tags.is_verb("VBZ"));
        assert_eq!(cfg.limits.max_tree_nodes, 0);
    }
}
