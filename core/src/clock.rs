//! Clock driver
//!
//! The driver is the only component that advances game time. It keeps the
//! reference instant of the previous tick, computes the real elapsed delta,
//! and feeds it to the session. The reference is refreshed on every tick
//! even while the session is paused or over, so resuming never applies a
//! backlog of unaccounted time.
//!
//! Periodic scheduling lives with the caller (the CLI spawns a tokio task
//! that sleeps the tick interval and calls [`ClockDriver::tick`]); the
//! driver itself has no opinion about how often it fires.

use std::time::{Duration, Instant};

use crate::game::{GameSession, GameSignal};

/// Default period between ticks. The granularity is a tunable, not a
/// contract; accounting is driven by measured deltas, not by the period.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Default)]
pub struct ClockDriver {
    /// Reference instant of the previous tick. None while stopped.
    last_tick: Option<Instant>,
}

impl ClockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh delta window. No-op while already running.
    pub fn start(&mut self) {
        if self.last_tick.is_none() {
            self.last_tick = Some(Instant::now());
        }
    }

    /// Clear the reference instant. Idempotent; a later `start` (or the
    /// next `tick`) begins a fresh delta window.
    pub fn stop(&mut self) {
        self.last_tick = None;
    }

    pub fn is_running(&self) -> bool {
        self.last_tick.is_some()
    }

    /// Apply the wall-time elapsed since the previous tick to the session.
    ///
    /// The first tick after `start`/`stop` only records the reference and
    /// applies nothing. The reference always moves to now, whatever the
    /// session did with the delta.
    pub fn tick(&mut self, session: &mut GameSession) -> Vec<GameSignal> {
        let now = Instant::now();
        let Some(last) = self.last_tick.replace(now) else {
            return Vec::new();
        };
        session.apply_elapsed(now.duration_since(last).as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use std::thread::sleep;

    use super::*;
    use crate::config::GameConfig;

    const INITIAL_SECS: f64 = 300.0;

    fn session() -> GameSession {
        let config = GameConfig {
            player_count: 2,
            initial_secs: INITIAL_SECS,
            ..GameConfig::default()
        };
        GameSession::new(&config).unwrap()
    }

    fn used(session: &GameSession) -> f64 {
        INITIAL_SECS - session.player(0).countdown_secs
    }

    #[test]
    fn test_first_tick_only_records_reference() {
        let mut driver = ClockDriver::new();
        let mut game = session();

        sleep(Duration::from_millis(20));
        assert!(driver.tick(&mut game).is_empty());
        assert_eq!(used(&game), 0.0);

        sleep(Duration::from_millis(10));
        driver.tick(&mut game);
        assert!(used(&game) > 0.0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut driver = ClockDriver::new();
        let mut game = session();

        driver.start();
        sleep(Duration::from_millis(20));
        // A second start must not reset the delta window
        driver.start();
        driver.tick(&mut game);
        assert!(used(&game) >= 0.015);
    }

    #[test]
    fn test_stop_clears_reference() {
        let mut driver = ClockDriver::new();
        let mut game = session();

        driver.start();
        assert!(driver.is_running());
        sleep(Duration::from_millis(20));
        driver.stop();
        driver.stop();
        assert!(!driver.is_running());

        // The tick after a stop starts a fresh window: nothing applied
        driver.tick(&mut game);
        assert_eq!(used(&game), 0.0);
    }

    #[test]
    fn test_paused_ticks_advance_reference_without_deducting() {
        let mut driver = ClockDriver::new();
        let mut game = session();

        driver.start();
        game.toggle_pause();
        sleep(Duration::from_millis(50));
        driver.tick(&mut game);
        assert_eq!(used(&game), 0.0);

        game.toggle_pause();
        sleep(Duration::from_millis(10));
        driver.tick(&mut game);
        // Only the unpaused stretch is deducted, never the 50ms gap
        let deducted = used(&game);
        assert!(deducted > 0.0);
        assert!(deducted < 0.045);
    }
}
