mod settings_store;

use std::path::PathBuf;

use anyhow::Context;
use pulse_config::PulseConfig;
use pulse_core::settings::LiveInsightsSettings;
use pulse_engine::{
    DisplayModeClassifier, FeedbackDispatcher, JsonlFeedbackSink, SettingsFilter, TierAggregator,
};

use crate::cli::GlobalFlags;

pub use settings_store::SettingsStore;

/// Resources shared by every command: validated config and the settings file.
pub struct AppContext {
    pub config: PulseConfig,
    pub settings: SettingsStore,
}

impl AppContext {
    /// Load config (with `.env`), validate thresholds, and resolve the settings path.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let config = PulseConfig::load_with_dotenv().context("failed to load pulse config")?;
        config.validate()?;

        let settings_path: PathBuf = flags
            .settings
            .clone()
            .unwrap_or_else(|| config.general.settings_path.clone());
        tracing::debug!(settings_path = %settings_path.display(), "resolved settings file");

        Ok(Self {
            config,
            settings: SettingsStore::new(settings_path),
        })
    }

    pub fn load_settings(&self) -> anyhow::Result<LiveInsightsSettings> {
        self.settings.load()
    }

    #[must_use]
    pub const fn classifier(&self) -> DisplayModeClassifier {
        DisplayModeClassifier::new(self.config.display)
    }

    #[must_use]
    pub const fn filter(&self) -> SettingsFilter {
        SettingsFilter::new(self.classifier())
    }

    #[must_use]
    pub const fn aggregator(&self) -> TierAggregator {
        TierAggregator::new(self.config.tiers)
    }

    /// Dispatcher writing to `feedback.log_path`, or one without a sink.
    #[must_use]
    pub fn feedback(&self) -> FeedbackDispatcher {
        self.config.feedback.log_path().map_or_else(FeedbackDispatcher::without_sink, |path| {
            FeedbackDispatcher::new(Box::new(JsonlFeedbackSink::new(path)))
        })
    }
}
