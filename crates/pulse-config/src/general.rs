//! General application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_settings_path() -> PathBuf {
    PathBuf::from(".pulse/settings.json")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Where the live-insights settings JSON is persisted.
    #[serde(default = "default_settings_path")]
    pub settings_path: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            settings_path: default_settings_path(),
        }
    }
}
