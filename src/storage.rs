use crate::planning::PlanData;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes the plan TOML file
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn load(&self) -> Result<PlanData> {
        if !self.file_path.exists() {
            tracing::debug!(path = %self.file_path.display(), "plan file missing, starting empty");
            return Ok(PlanData::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read plan {}", self.file_path.display()))?;
        let data: PlanData = toml::from_str(&content)
            .with_context(|| format!("Failed to parse plan {}", self.file_path.display()))?;
        tracing::debug!(
            team = data.team.len(),
            projects = data.projects.len(),
            "loaded plan"
        );
        Ok(data)
    }

    pub fn save(&self, data: &PlanData) -> Result<()> {
        let content = toml::to_string_pretty(data)?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write plan {}", self.file_path.display()))?;
        tracing::info!(path = %self.file_path.display(), "saved plan");
        Ok(())
    }
}
