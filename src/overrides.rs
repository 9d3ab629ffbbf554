//! Per-project field overrides
//!
//! User edits are kept apart from the seed data as patches keyed by project
//! id. The engine never reads them directly; callers apply them through
//! [`PlanData::effective_projects`](crate::PlanData::effective_projects).

use crate::planning::ProjectPatch;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value store of project patches
pub trait OverrideStore {
    /// Stored patch for a project id
    fn get(&self, key: &str) -> Option<ProjectPatch>;

    /// Merge a patch into the stored one for a project id
    fn set(&mut self, key: &str, patch: ProjectPatch) -> Result<()>;
}

/// Override store that lives only as long as the process
#[derive(Debug, Default)]
pub struct MemoryOverrideStore {
    patches: BTreeMap<String, ProjectPatch>,
}

impl MemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverrideStore for MemoryOverrideStore {
    fn get(&self, key: &str) -> Option<ProjectPatch> {
        self.patches.get(key).cloned()
    }

    fn set(&mut self, key: &str, patch: ProjectPatch) -> Result<()> {
        self.patches.entry(key.to_string()).or_default().merge(patch);
        Ok(())
    }
}

/// Override store persisted as a TOML table per project id
pub struct FileOverrideStore {
    file_path: PathBuf,
    patches: BTreeMap<String, ProjectPatch>,
}

impl FileOverrideStore {
    /// Open the store, reading existing overrides if the file exists
    pub fn open(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref().to_path_buf();
        let patches = if file_path.exists() {
            let content = fs::read_to_string(&file_path)
                .with_context(|| format!("Failed to read overrides {}", file_path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse overrides {}", file_path.display()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { file_path, patches })
    }

    fn save(&self) -> Result<()> {
        let content = toml::to_string_pretty(&self.patches)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write overrides {}", self.file_path.display()))?;
        tracing::info!(path = %self.file_path.display(), "saved overrides");
        Ok(())
    }
}

impl OverrideStore for FileOverrideStore {
    fn get(&self, key: &str) -> Option<ProjectPatch> {
        self.patches.get(key).cloned()
    }

    fn set(&mut self, key: &str, patch: ProjectPatch) -> Result<()> {
        self.patches.entry(key.to_string()).or_default().merge(patch);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_merges_patches() {
        let mut store = MemoryOverrideStore::new();
        assert!(store.get("atlas").is_none());

        store
            .set(
                "atlas",
                ProjectPatch {
                    target_words: Some(60_000),
                    ..Default::default()
                },
            )
            .unwrap();
        store
            .set(
                "atlas",
                ProjectPatch {
                    status: Some("drafting".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        let patch = store.get("atlas").unwrap();
        assert_eq!(patch.target_words, Some(60_000));
        assert_eq!(patch.status.as_deref(), Some("drafting"));
    }
}
