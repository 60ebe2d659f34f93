//! Derived session statistics
//!
//! Pure reads of the session; nothing here mutates state. The CLI's status
//! board and the end-of-game summary both render from one collected
//! snapshot so they cannot disagree.

use crate::game::{GameSession, GlobalCategory, LocalCategory};

/// How a player's game ended (or hasn't yet)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOutcome {
    Winner,
    /// 1-based order of elimination
    Eliminated(u32),
    Playing,
}

#[derive(Debug, Clone)]
pub struct PlayerStats {
    pub name: String,
    pub time_used_secs: f64,
    pub time_remaining_secs: f64,
    pub search_secs: f64,
    pub shuffling_secs: f64,
    pub outcome: PlayerOutcome,
}

/// Aggregate statistics at one instant
#[derive(Debug, Clone)]
pub struct GameStats {
    /// Wall-time since the epoch started, pauses included
    pub total_game_secs: f64,
    pub total_search_secs: f64,
    pub total_shuffling_secs: f64,
    pub politics_secs: f64,
    pub rules_secs: f64,
    pub players: Vec<PlayerStats>,
}

impl GameStats {
    pub fn collect(session: &GameSession) -> Self {
        let players = session
            .players()
            .iter()
            .map(|player| {
                let outcome = match player.elimination_order {
                    Some(order) => PlayerOutcome::Eliminated(order),
                    None if session.is_game_over() => PlayerOutcome::Winner,
                    None => PlayerOutcome::Playing,
                };
                PlayerStats {
                    name: player.name.clone(),
                    time_used_secs: player.time_used(),
                    time_remaining_secs: player.countdown_secs,
                    search_secs: player.uptime_for(LocalCategory::Search),
                    shuffling_secs: player.uptime_for(LocalCategory::Shuffling),
                    outcome,
                }
            })
            .collect::<Vec<_>>();

        Self {
            total_game_secs: session.elapsed_secs(),
            total_search_secs: players.iter().map(|p| p.search_secs).sum(),
            total_shuffling_secs: players.iter().map(|p| p.shuffling_secs).sum(),
            politics_secs: session.global_uptime_for(GlobalCategory::Politics),
            rules_secs: session.global_uptime_for(GlobalCategory::Rules),
            players,
        }
    }

    /// Everything tracked outside the countdowns
    pub fn total_downtime_secs(&self) -> f64 {
        self.total_search_secs + self.total_shuffling_secs + self.politics_secs + self.rules_secs
    }

    /// Integer percentage of total game time; 0 when nothing has elapsed
    pub fn percent_of_game(&self, secs: f64) -> u32 {
        if self.total_game_secs <= 0.0 {
            return 0;
        }
        ((secs / self.total_game_secs) * 100.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn session_of(count: usize, secs: f64) -> GameSession {
        let config = GameConfig {
            player_count: count,
            initial_secs: secs,
            ..GameConfig::default()
        };
        GameSession::new(&config).unwrap()
    }

    #[test]
    fn test_collect_sums_local_uptime_across_players() {
        let mut game = session_of(3, 600.0);
        game.toggle_local_uptime(LocalCategory::Search, 0);
        game.apply_elapsed(12.0);
        game.toggle_local_uptime(LocalCategory::Search, 0);
        game.pass_to_next_player();
        game.toggle_local_uptime(LocalCategory::Search, 1);
        game.apply_elapsed(8.0);
        game.toggle_local_uptime(LocalCategory::Shuffling, 1);
        game.apply_elapsed(5.0);

        let stats = GameStats::collect(&game);
        assert_eq!(stats.total_search_secs, 20.0);
        assert_eq!(stats.total_shuffling_secs, 5.0);
        assert_eq!(stats.total_downtime_secs(), 25.0);
    }

    #[test]
    fn test_collect_reads_global_accumulators() {
        let mut game = session_of(4, 600.0);
        game.toggle_global_uptime(GlobalCategory::Rules);
        game.apply_elapsed(60.0);
        game.toggle_global_uptime(GlobalCategory::Politics);
        game.apply_elapsed(15.0);

        let stats = GameStats::collect(&game);
        assert_eq!(stats.rules_secs, 60.0);
        assert_eq!(stats.politics_secs, 15.0);
    }

    #[test]
    fn test_outcomes() {
        let mut game = session_of(3, 300.0);
        game.eliminate_player(2);
        assert_eq!(
            GameStats::collect(&game).players[2].outcome,
            PlayerOutcome::Eliminated(1)
        );
        assert_eq!(
            GameStats::collect(&game).players[0].outcome,
            PlayerOutcome::Playing
        );

        game.eliminate_player(1);
        let stats = GameStats::collect(&game);
        assert_eq!(stats.players[1].outcome, PlayerOutcome::Eliminated(2));
        assert_eq!(stats.players[0].outcome, PlayerOutcome::Winner);
    }

    #[test]
    fn test_percent_of_game_handles_zero_total() {
        let stats = GameStats {
            total_game_secs: 0.0,
            total_search_secs: 0.0,
            total_shuffling_secs: 0.0,
            politics_secs: 0.0,
            rules_secs: 0.0,
            players: Vec::new(),
        };
        assert_eq!(stats.percent_of_game(30.0), 0);
    }

    #[test]
    fn test_percent_of_game() {
        let stats = GameStats {
            total_game_secs: 1800.0,
            total_search_secs: 0.0,
            total_shuffling_secs: 0.0,
            politics_secs: 120.0,
            rules_secs: 180.0,
            players: Vec::new(),
        };
        assert_eq!(stats.percent_of_game(stats.politics_secs), 6);
        assert_eq!(stats.percent_of_game(900.0), 50);
    }
}
