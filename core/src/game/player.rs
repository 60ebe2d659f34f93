//! Player state and uptime categories

use serde::{Deserialize, Serialize};

/// Fraction of the initial time at or below which a player counts as low on time.
const LOW_TIME_FRACTION: f64 = 0.1;

/// Per-player uptime category.
///
/// While one is selected, elapsed time accrues to that player's matching
/// accumulator instead of their countdown. The turn still belongs to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalCategory {
    Search,
    Shuffling,
}

impl LocalCategory {
    pub const ALL: [LocalCategory; 2] = [LocalCategory::Search, LocalCategory::Shuffling];

    pub fn label(self) -> &'static str {
        match self {
            LocalCategory::Search => "Search",
            LocalCategory::Shuffling => "Shuffling",
        }
    }
}

/// Session-scope uptime category.
///
/// While one is selected, elapsed time accrues session-wide and consumes no
/// player's countdown. Whoever holds the turn keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalCategory {
    Politics,
    Rules,
}

impl GlobalCategory {
    pub const ALL: [GlobalCategory; 2] = [GlobalCategory::Politics, GlobalCategory::Rules];

    pub fn label(self) -> &'static str {
        match self {
            GlobalCategory::Politics => "Politics",
            GlobalCategory::Rules => "Rules",
        }
    }
}

/// A participant's clock and accumulators.
#[derive(Debug, Clone)]
pub struct Player {
    /// Stable identity, preserved across restarts
    pub id: u64,
    pub name: String,
    /// Remaining time in seconds (fractional)
    pub countdown_secs: f64,
    /// Starting time, kept for threshold and percentage display
    pub initial_secs: f64,
    pub is_active: bool,
    pub is_eliminated: bool,
    /// 1-based order in which the player was eliminated this epoch
    pub elimination_order: Option<u32>,

    // Uptime accumulators
    pub search_secs: f64,
    pub shuffling_secs: f64,
    /// Local category currently receiving elapsed time (None = countdown runs)
    pub active_local_category: Option<LocalCategory>,
}

impl Player {
    pub fn new(id: u64, name: String, initial_secs: f64) -> Self {
        Self {
            id,
            name,
            countdown_secs: initial_secs,
            initial_secs,
            is_active: false,
            is_eliminated: false,
            elimination_order: None,
            search_secs: 0.0,
            shuffling_secs: 0.0,
            active_local_category: None,
        }
    }

    pub fn uptime_for(&self, category: LocalCategory) -> f64 {
        match category {
            LocalCategory::Search => self.search_secs,
            LocalCategory::Shuffling => self.shuffling_secs,
        }
    }

    pub fn add_uptime(&mut self, secs: f64, category: LocalCategory) {
        match category {
            LocalCategory::Search => self.search_secs += secs,
            LocalCategory::Shuffling => self.shuffling_secs += secs,
        }
    }

    pub fn is_low_time(&self) -> bool {
        self.countdown_secs <= self.initial_secs * LOW_TIME_FRACTION
    }

    pub fn has_time_remaining(&self) -> bool {
        self.countdown_secs > 0.0
    }

    pub fn time_used(&self) -> f64 {
        self.initial_secs - self.countdown_secs
    }

    /// What a player tile shows: the running category accumulator while
    /// tracking, otherwise the countdown.
    pub fn display_secs(&self) -> f64 {
        match self.active_local_category {
            Some(category) => self.uptime_for(category),
            None => self.countdown_secs.max(0.0),
        }
    }

    /// Reset for a new epoch; identity, name and initial time are kept.
    pub(crate) fn reset(&mut self) {
        self.countdown_secs = self.initial_secs;
        self.is_active = false;
        self.is_eliminated = false;
        self.elimination_order = None;
        self.search_secs = 0.0;
        self.shuffling_secs = 0.0;
        self.active_local_category = None;
    }
}
