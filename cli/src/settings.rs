//! Persisted user defaults
//!
//! The core never touches disk; whatever the user last started with is
//! remembered here and offered as the defaults for the next `start`.

use serde::{Deserialize, Serialize};

use turnclock_core::{DEFAULT_TICK_INTERVAL, GameConfig};

const APP_NAME: &str = "turnclock";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Clock tick period in milliseconds
    pub tick_interval_ms: u64,
    /// Defaults for the next game
    pub game: GameConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            game: GameConfig::default(),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        confy::load(APP_NAME, "config").unwrap_or_default()
    }

    pub fn save(&self) {
        if let Err(err) = confy::store(APP_NAME, "config", self) {
            tracing::warn!(%err, "failed to save settings");
        }
    }
}
