//! Change notifications emitted by session operations

use super::player::{GlobalCategory, LocalCategory};
use super::session::GameSession;

/// Signals emitted by session operations for cross-cutting concerns.
/// These represent "interesting things that happened" at a higher level
/// than individual field changes. An empty signal list from an operation
/// means the call was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSignal {
    /// A player's clock started running (pass, activation, restart)
    TurnStarted { player_index: usize },
    /// The active player's countdown was driven to zero this tick
    TimeExpired { player_index: usize },
    PlayerEliminated {
        player_index: usize,
        /// Non-eliminated players left after this elimination
        remaining: usize,
    },
    /// Terminal for the epoch; `winner_index` is None when nobody is left
    GameEnded { winner_index: Option<usize> },
    GamePaused,
    GameResumed,
    LocalUptimeToggled {
        player_index: usize,
        category: LocalCategory,
        active: bool,
    },
    GlobalUptimeToggled { category: GlobalCategory, active: bool },
    GameRestarted { starting_index: usize },
}

/// Trait for systems that react to game signals.
/// Implement this for printers, renderers, loggers, etc.
pub trait SignalHandler {
    /// Handle a single signal with read access to the session that emitted it.
    fn handle_signal(&mut self, signal: &GameSignal, session: &GameSession);

    /// Handle multiple signals (default implementation calls handle_signal for each)
    fn handle_signals(&mut self, signals: &[GameSignal], session: &GameSession) {
        for signal in signals {
            self.handle_signal(signal, session);
        }
    }
}
