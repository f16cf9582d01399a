use std::time::Duration;

use shared::config::Settings;

/// Runtime configuration read by the matchers and controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatorConfig {
    pub window_fragments: usize,
    pub window_slack: usize,
    pub fuzzy_min_token_len: usize,
    /// Wait after asking for a page render before reading its fragments.
    pub settle_delay: Duration,
    /// Time until an applied highlight is softened.
    pub decay_delay: Duration,
}

impl From<&Settings> for LocatorConfig {
    fn from(s: &Settings) -> Self {
        Self {
            window_fragments: s.window_fragments,
            window_slack: s.window_slack,
            fuzzy_min_token_len: s.fuzzy_min_token_len,
            settle_delay: s.settle_delay(),
            decay_delay: s.decay_delay(),
        }
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}
