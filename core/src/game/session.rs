//! Turn/timer state machine
//!
//! The session owns the player roster, the active-player index, pause and
//! game-over flags, and the session-wide uptime accumulators. All mutation
//! goes through the operations below; each returns the signals it produced
//! so a rendering layer observes every change before the call returns. The
//! clock driver is the only caller of `apply_elapsed`.
//!
//! Invalid calls (eliminated target, wrong toggler, anything after game
//! over) are ignored and return no signals. The surrounding UI is expected
//! to disable those controls; the session just refuses quietly.

use std::time::Instant;

use crate::config::{GameConfig, SetupError};

use super::player::{GlobalCategory, LocalCategory, Player};
use super::signal::GameSignal;

#[derive(Debug, Clone)]
pub struct GameSession {
    players: Vec<Player>,
    /// Always a non-eliminated player unless the game is over
    current_player_index: usize,
    is_paused: bool,
    is_game_over: bool,
    /// Wall-clock anchor for total-elapsed statistics
    started_at: Instant,

    // Session-wide uptime (downtime that consumes nobody's countdown)
    politics_secs: f64,
    rules_secs: f64,
    active_global_category: Option<GlobalCategory>,

    /// Source of `elimination_order` stamps, reset on restart
    eliminated_count: u32,
}

impl GameSession {
    /// Build a session from a validated configuration.
    ///
    /// Blank names become "Player N" (1-based). The starting player is
    /// active immediately; the clock begins consuming time on the first
    /// driver tick.
    pub fn new(config: &GameConfig) -> Result<Self, SetupError> {
        config.validate()?;

        let players = (0..config.player_count)
            .map(|index| {
                let name = config
                    .player_names
                    .get(index)
                    .map(|name| name.trim())
                    .filter(|name| !name.is_empty())
                    .map_or_else(|| format!("Player {}", index + 1), String::from);
                Player::new(index as u64, name, config.initial_secs)
            })
            .collect::<Vec<_>>();

        let mut session = Self {
            players,
            current_player_index: config.starting_index,
            is_paused: false,
            is_game_over: false,
            started_at: Instant::now(),
            politics_secs: 0.0,
            rules_secs: 0.0,
            active_global_category: None,
            eliminated_count: 0,
        };
        session.players[config.starting_index].is_active = true;

        tracing::info!(
            players = session.players.len(),
            starting_index = config.starting_index,
            "session created"
        );
        Ok(session)
    }

    // ─── Time Accounting ────────────────────────────────────────────────────

    /// Route one tick's elapsed wall-time to exactly one accumulator.
    ///
    /// Priority: the active player's local category, then the session's
    /// global category, then the active player's countdown. Routing is the
    /// sole arbiter between local and global tracking; selecting one never
    /// clears the other. Paused or finished sessions accumulate nothing.
    pub fn apply_elapsed(&mut self, elapsed_secs: f64) -> Vec<GameSignal> {
        if self.is_paused || self.is_game_over || elapsed_secs <= 0.0 {
            return Vec::new();
        }

        let index = self.current_player_index;
        if let Some(category) = self.players[index].active_local_category {
            self.players[index].add_uptime(elapsed_secs, category);
            return Vec::new();
        }
        if let Some(category) = self.active_global_category {
            match category {
                GlobalCategory::Politics => self.politics_secs += elapsed_secs,
                GlobalCategory::Rules => self.rules_secs += elapsed_secs,
            }
            return Vec::new();
        }

        let player = &mut self.players[index];
        player.countdown_secs -= elapsed_secs;
        if player.countdown_secs > 0.0 {
            return Vec::new();
        }

        // Out of time: clamp and eliminate within the same tick
        player.countdown_secs = 0.0;
        tracing::info!(player = %player.name, "countdown expired");
        let mut signals = vec![GameSignal::TimeExpired { player_index: index }];
        signals.extend(self.eliminate_player(index));
        signals
    }

    // ─── Turn Control ───────────────────────────────────────────────────────

    /// Hand the turn to `index`. Ignored if the game is over or the target
    /// is eliminated. The outgoing player loses their local category; the
    /// global category is untouched.
    pub fn activate_player(&mut self, index: usize) -> Vec<GameSignal> {
        if self.is_game_over || self.players[index].is_eliminated {
            return Vec::new();
        }

        let current = self.current_player_index;
        self.players[current].is_active = false;
        self.players[current].active_local_category = None;

        self.current_player_index = index;
        self.players[index].is_active = true;
        tracing::debug!(player = %self.players[index].name, "turn started");
        vec![GameSignal::TurnStarted { player_index: index }]
    }

    /// Pass the turn to the next non-eliminated player in seating order,
    /// wrapping at most once. With nobody left to take the turn the game
    /// ends instead.
    pub fn pass_to_next_player(&mut self) -> Vec<GameSignal> {
        if self.is_game_over {
            return Vec::new();
        }

        let count = self.players.len();
        let mut next = (self.current_player_index + 1) % count;
        let mut attempts = 0;
        while self.players[next].is_eliminated && attempts < count {
            next = (next + 1) % count;
            attempts += 1;
        }

        if self.players[next].is_eliminated {
            return self.end_game();
        }
        self.activate_player(next)
    }

    // ─── Uptime Tracking ────────────────────────────────────────────────────

    /// Toggle a local uptime category for `player_index`. Only the player
    /// holding the turn can track, and not while paused. Selecting a second
    /// category replaces the first; re-selecting clears it.
    pub fn toggle_local_uptime(
        &mut self,
        category: LocalCategory,
        player_index: usize,
    ) -> Vec<GameSignal> {
        if self.is_game_over || self.is_paused || player_index != self.current_player_index {
            return Vec::new();
        }

        let player = &mut self.players[player_index];
        let active = if player.active_local_category == Some(category) {
            player.active_local_category = None;
            false
        } else {
            player.active_local_category = Some(category);
            true
        };
        tracing::debug!(player = %player.name, category = category.label(), active, "local uptime toggled");
        vec![GameSignal::LocalUptimeToggled {
            player_index,
            category,
            active,
        }]
    }

    /// Toggle a session-wide uptime category. Any seat may do this, but not
    /// while paused. The two global categories displace each other.
    pub fn toggle_global_uptime(&mut self, category: GlobalCategory) -> Vec<GameSignal> {
        if self.is_game_over || self.is_paused {
            return Vec::new();
        }

        let active = if self.active_global_category == Some(category) {
            self.active_global_category = None;
            false
        } else {
            self.active_global_category = Some(category);
            true
        };
        tracing::debug!(category = category.label(), active, "global uptime toggled");
        vec![GameSignal::GlobalUptimeToggled { category, active }]
    }

    // ─── Elimination ────────────────────────────────────────────────────────

    /// Remove a player from the rotation, by timeout or by direct action on
    /// any seat. Ends the game when at most one player is left; otherwise
    /// passes the turn if the eliminated player was holding it.
    pub fn eliminate_player(&mut self, index: usize) -> Vec<GameSignal> {
        if self.is_game_over || self.players[index].is_eliminated {
            return Vec::new();
        }

        self.eliminated_count += 1;
        let player = &mut self.players[index];
        player.is_eliminated = true;
        player.is_active = false;
        player.active_local_category = None;
        player.elimination_order = Some(self.eliminated_count);
        tracing::info!(player = %player.name, "player eliminated");

        let remaining = self.remaining_player_count();
        let mut signals = vec![GameSignal::PlayerEliminated {
            player_index: index,
            remaining,
        }];
        if remaining <= 1 {
            signals.extend(self.end_game());
        } else if index == self.current_player_index {
            signals.extend(self.pass_to_next_player());
        }
        signals
    }

    // ─── Pause / Restart ────────────────────────────────────────────────────

    /// Flip the pause flag. Accumulators are untouched; the clock driver's
    /// delta suppression during pause is what keeps paused time out of the
    /// books.
    pub fn toggle_pause(&mut self) -> Vec<GameSignal> {
        if self.is_game_over {
            return Vec::new();
        }
        self.is_paused = !self.is_paused;
        vec![if self.is_paused {
            GameSignal::GamePaused
        } else {
            GameSignal::GameResumed
        }]
    }

    /// Begin a new epoch with the same roster: every countdown back to its
    /// own initial time, eliminations and accumulators cleared, a fresh
    /// elapsed-time anchor. Callable mid-game as well as after game over.
    pub fn restart(&mut self, starting_index: usize) -> Vec<GameSignal> {
        for player in &mut self.players {
            player.reset();
        }
        self.politics_secs = 0.0;
        self.rules_secs = 0.0;
        self.active_global_category = None;
        self.eliminated_count = 0;

        self.current_player_index = starting_index;
        self.players[starting_index].is_active = true;
        self.is_paused = false;
        self.is_game_over = false;
        self.started_at = Instant::now();

        tracing::info!(starting_index, "session restarted");
        vec![
            GameSignal::GameRestarted { starting_index },
            GameSignal::TurnStarted {
                player_index: starting_index,
            },
        ]
    }

    fn end_game(&mut self) -> Vec<GameSignal> {
        self.is_game_over = true;
        for player in &mut self.players {
            player.is_active = false;
            player.active_local_category = None;
        }
        let winner_index = self.winner();
        tracing::info!(?winner_index, "game over");
        vec![GameSignal::GameEnded { winner_index }]
    }

    // ─── Queries ────────────────────────────────────────────────────────────

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// The player whose clock is running. None once the game is over.
    pub fn active_player(&self) -> Option<&Player> {
        if self.is_game_over {
            return None;
        }
        Some(&self.players[self.current_player_index])
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Total wall-time since the session (or current epoch) started.
    pub fn elapsed_secs(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }

    pub fn remaining_player_count(&self) -> usize {
        self.players.iter().filter(|p| !p.is_eliminated).count()
    }

    /// Index of the sole surviving player, once the game is over.
    pub fn winner(&self) -> Option<usize> {
        if !self.is_game_over {
            return None;
        }
        self.players.iter().position(|p| !p.is_eliminated)
    }

    pub fn active_global_category(&self) -> Option<GlobalCategory> {
        self.active_global_category
    }

    pub fn global_uptime_for(&self, category: GlobalCategory) -> f64 {
        match category {
            GlobalCategory::Politics => self.politics_secs,
            GlobalCategory::Rules => self.rules_secs,
        }
    }
}
