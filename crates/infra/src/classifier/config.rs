// crates/infra/src/classifier/config.rs
use std::{collections::BTreeMap, path::Path};

use filedesc_shared_kernel::{InfraResult, InfrastructureError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::table::DEFAULT_FALLBACK;

/// User supplied overrides for the extension table.
///
/// ```json
/// { "fallback": "File", "use_builtin": true, "mappings": { "md": "Markdown Document" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    pub fallback: String,
    pub use_builtin: bool,
    /// Keys may carry a leading dot and are matched case-insensitively.
    pub mappings: BTreeMap<String, String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { fallback: DEFAULT_FALLBACK.to_string(), use_builtin: true, mappings: BTreeMap::new() }
    }
}

impl ClassifierConfig {
    pub fn from_json_str(input: &str) -> InfraResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> InfraResult<Self> {
        let config: Self = serde_yaml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file; `.yaml`/`.yml` select YAML, everything else JSON.
    pub fn load(path: &Path) -> InfraResult<Self> {
        let input = std::fs::read_to_string(path)
            .map_err(|source| InfrastructureError::ConfigRead { path: path.to_path_buf(), source })?;

        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        let config = if is_yaml { Self::parse_yaml(&input)? } else { Self::from_json_str(&input)? };
        debug!(path = %path.display(), mappings = config.mappings.len(), "loaded classifier config");
        Ok(config)
    }

    #[cfg(feature = "yaml")]
    fn parse_yaml(input: &str) -> InfraResult<Self> {
        Self::from_yaml_str(input)
    }

    #[cfg(not(feature = "yaml"))]
    fn parse_yaml(_input: &str) -> InfraResult<Self> {
        Err(InfrastructureError::SerializationError {
            format: "YAML".to_string(),
            details: "YAML support requires the `yaml` feature".to_string(),
        })
    }

    pub fn validate(&self) -> InfraResult<()> {
        if self.fallback.trim().is_empty() {
            return Err(InfrastructureError::InvalidMapping {
                key: "fallback".to_string(),
                reason: "label must not be empty".to_string(),
            });
        }
        for (key, label) in &self.mappings {
            normalize_key(key)?;
            if label.trim().is_empty() {
                return Err(InfrastructureError::InvalidMapping {
                    key: key.clone(),
                    reason: "label must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// `".MD"` → `"md"`. Rejects keys that are empty or look like paths.
pub(crate) fn normalize_key(key: &str) -> InfraResult<String> {
    let trimmed = key.strip_prefix('.').unwrap_or(key);
    if trimmed.is_empty() {
        return Err(InfrastructureError::InvalidMapping {
            key: key.to_string(),
            reason: "extension must not be empty".to_string(),
        });
    }
    if trimmed.contains(['/', '\\']) {
        return Err(InfrastructureError::InvalidMapping {
            key: key.to_string(),
            reason: "extension must not contain path separators".to_string(),
        });
    }
    Ok(trimmed.to_ascii_lowercase())
}
