pub mod clock;
pub mod config;
pub mod format;
pub mod game;
pub mod stats;

// Re-exports for convenience
pub use clock::{ClockDriver, DEFAULT_TICK_INTERVAL};
pub use config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS, SetupError};
pub use format::format_clock;
pub use game::{GameSession, GameSignal, GlobalCategory, LocalCategory, Player, SignalHandler};
pub use stats::{GameStats, PlayerOutcome, PlayerStats};
