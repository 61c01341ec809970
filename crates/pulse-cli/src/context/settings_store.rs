use std::path::{Path, PathBuf};

use anyhow::Context;
use pulse_core::settings::LiveInsightsSettings;

/// The persisted settings JSON. A missing file reads as the defaults.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> anyhow::Result<LiveInsightsSettings> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no settings file; using defaults");
            return Ok(LiveInsightsSettings::default());
        }
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read settings file {}", self.path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("invalid settings file {}", self.path.display()))
    }

    pub fn save(&self, settings: &LiveInsightsSettings) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, format!("{text}\n"))
            .with_context(|| format!("failed to write settings file {}", self.path.display()))
    }
}
