//! Game setup configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 6;

/// Errors rejected at session setup
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("player count {count} out of range (2-6)")]
    PlayerCountOutOfRange { count: usize },

    #[error("initial time must be positive, got {secs}s")]
    NonPositiveTime { secs: f64 },

    #[error("starting index {index} out of bounds for {count} players")]
    StartingIndexOutOfBounds { index: usize, count: usize },
}

/// Parameters for one game session.
///
/// Defaults mirror the setup screen: four players, fifteen minutes each,
/// seat 0 starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub player_count: usize,
    /// Starting time per player, in seconds
    pub initial_secs: f64,
    /// Optional display names by seat; blank entries become "Player N"
    #[serde(default)]
    pub player_names: Vec<String>,
    /// Seat that takes the first turn
    #[serde(default)]
    pub starting_index: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            initial_secs: 15.0 * 60.0,
            player_names: Vec::new(),
            starting_index: 0,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(SetupError::PlayerCountOutOfRange {
                count: self.player_count,
            });
        }
        if self.initial_secs <= 0.0 {
            return Err(SetupError::NonPositiveTime {
                secs: self.initial_secs,
            });
        }
        if self.starting_index >= self.player_count {
            return Err(SetupError::StartingIndexOutOfBounds {
                index: self.starting_index,
                count: self.player_count,
            });
        }
        Ok(())
    }
}
