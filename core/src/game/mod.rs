//! Game session state machine
//!
//! This module provides:
//! - **Player**: per-player countdown clock and uptime accumulators
//! - **Session**: turn rotation, pause, elimination, category time routing
//! - **Signals**: change notifications emitted by every mutating operation
//!
//! # Lifecycle
//!
//! 1. `GameSession::new` builds the roster and activates the starting player
//! 2. The clock driver feeds elapsed wall-time into `apply_elapsed`
//! 3. A countdown reaching zero eliminates its player
//! 4. One player left (or none) → game over; `restart` begins a new epoch

mod player;
mod session;
mod signal;


pub use player::{GlobalCategory, LocalCategory, Player};
pub use session::GameSession;
pub use signal::{GameSignal, SignalHandler};
