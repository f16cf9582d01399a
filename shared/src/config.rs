use std::time::Duration;

use serde::Deserialize;

use crate::error::AppError;

fn default_window_fragments() -> usize {
    10
}

fn default_window_slack() -> usize {
    50
}

fn default_fuzzy_min_token_len() -> usize {
    4
}

fn default_settle_delay_ms() -> u64 {
    300
}

fn default_decay_delay_ms() -> u64 {
    3_000
}

/// Tunables for locating quoted passages. None of the values is load-bearing;
/// they are heuristics exposed so deployments can adjust them.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Maximum number of fragments a single match window may span.
    #[serde(default = "default_window_fragments")]
    pub window_fragments: usize,
    /// Extra characters a window may grow past the query length before giving up.
    #[serde(default = "default_window_slack")]
    pub window_slack: usize,
    /// Shortest token the fuzzy fallback will search for.
    #[serde(default = "default_fuzzy_min_token_len")]
    pub fuzzy_min_token_len: usize,
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    #[serde(default = "default_decay_delay_ms")]
    pub decay_delay_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_fragments: default_window_fragments(),
            window_slack: default_window_slack(),
            fuzzy_min_token_len: default_fuzzy_min_token_len(),
            settle_delay_ms: default_settle_delay_ms(),
            decay_delay_ms: default_decay_delay_ms(),
        }
    }
}

impl Settings {
    /// Load settings from `LOCATOR_*` environment variables.
    pub fn new() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("LOCATOR").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Load from the environment and reject unusable values.
    pub fn load() -> crate::error::Result<Self> {
        let settings = Self::new()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        if self.window_fragments == 0 {
            return Err(AppError::Config("window_fragments must be at least 1".into()));
        }
        if self.fuzzy_min_token_len == 0 {
            return Err(AppError::Config("fuzzy_min_token_len must be at least 1".into()));
        }
        Ok(())
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn decay_delay(&self) -> Duration {
        Duration::from_millis(self.decay_delay_ms)
    }
}
