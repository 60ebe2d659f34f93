use std::io::Write;
use std::sync::Arc;

use turnclock_core::{
    GameSession, GameSignal, GameStats, GlobalCategory, LocalCategory, PlayerOutcome,
    SignalHandler, format_clock,
};

use crate::clock_task;
use crate::context::CliContext;

/// Prints session signals as one-line messages. Used both for direct
/// commands and for signals surfacing from the clock task (timeouts).
pub struct SignalPrinter;

impl SignalHandler for SignalPrinter {
    fn handle_signal(&mut self, signal: &GameSignal, session: &GameSession) {
        match signal {
            GameSignal::TurnStarted { player_index } => {
                println!("{} is on the clock", session.player(*player_index).name);
            }
            GameSignal::TimeExpired { player_index } => {
                println!("{} ran out of time", session.player(*player_index).name);
            }
            GameSignal::PlayerEliminated {
                player_index,
                remaining,
            } => {
                println!(
                    "{} eliminated ({} remaining)",
                    session.player(*player_index).name,
                    remaining
                );
            }
            GameSignal::GameEnded { winner_index } => match winner_index {
                Some(index) => println!("Game over - {} wins!", session.player(*index).name),
                None => println!("Game over - nobody left standing"),
            },
            GameSignal::GamePaused => println!("Paused"),
            GameSignal::GameResumed => println!("Resumed"),
            GameSignal::LocalUptimeToggled {
                player_index,
                category,
                active,
            } => {
                let name = &session.player(*player_index).name;
                if *active {
                    println!("{} tracking {}", name, category.label());
                } else {
                    println!("{} back on the clock", name);
                }
            }
            GameSignal::GlobalUptimeToggled { category, active } => {
                if *active {
                    println!("Global {} time running", category.label());
                } else {
                    println!("Global {} time stopped", category.label());
                }
            }
            GameSignal::GameRestarted { starting_index } => {
                println!(
                    "Game restarted, {} goes first",
                    session.player(*starting_index).name
                );
            }
        }
    }
}

fn print_signals(signals: &[GameSignal], session: &GameSession) {
    SignalPrinter.handle_signals(signals, session);
}

// ─── Game Setup ─────────────────────────────────────────────────────────────

pub async fn start_game(
    ctx: &CliContext,
    players: Option<usize>,
    minutes: Option<u64>,
    names: Option<&str>,
    first: Option<usize>,
) {
    let mut config = { ctx.settings.read().await.game.clone() };
    if let Some(count) = players {
        config.player_count = count;
    }
    if let Some(minutes) = minutes {
        config.initial_secs = minutes as f64 * 60.0;
    }
    if let Some(names) = names {
        config.player_names = names.split(',').map(|n| n.trim().to_string()).collect();
    }
    if let Some(index) = first {
        config.starting_index = index;
    }

    let session = match GameSession::new(&config) {
        Ok(session) => session,
        Err(err) => {
            println!("Cannot start game: {err}");
            return;
        }
    };

    // Remember what worked as the defaults for next time
    {
        let mut settings = ctx.settings.write().await;
        settings.game = config.clone();
        settings.save();
    }

    ctx.stop_clock().await;
    let handle = ctx.start_session(session).await;
    let task = clock_task::start_clock(ctx, Arc::clone(&handle)).await;
    *ctx.clock_task.lock().await = Some(task);

    println!(
        "Game started: {} players, {} each",
        config.player_count,
        format_clock(config.initial_secs)
    );
    status(ctx).await;
}

// ─── Turn Control ───────────────────────────────────────────────────────────

/// The player-tile tap: the active seat passes the turn, any other living
/// seat takes it directly.
pub async fn tap(ctx: &CliContext, index: usize) {
    let Some(session) = ctx.session().await else {
        return no_game();
    };
    let mut game = session.write().await;
    if index >= game.player_count() {
        println!("No such player: {index}");
        return;
    }
    let signals = if index == game.current_player_index() {
        game.pass_to_next_player()
    } else {
        game.activate_player(index)
    };
    print_signals(&signals, &game);
}

pub async fn pass(ctx: &CliContext) {
    let Some(session) = ctx.session().await else {
        return no_game();
    };
    let mut game = session.write().await;
    let signals = game.pass_to_next_player();
    print_signals(&signals, &game);
}

pub async fn eliminate(ctx: &CliContext, index: usize) {
    let Some(session) = ctx.session().await else {
        return no_game();
    };
    let mut game = session.write().await;
    if index >= game.player_count() {
        println!("No such player: {index}");
        return;
    }
    let signals = game.eliminate_player(index);
    print_signals(&signals, &game);
}

pub async fn pause(ctx: &CliContext) {
    let Some(session) = ctx.session().await else {
        return no_game();
    };
    let mut game = session.write().await;
    let signals = game.toggle_pause();
    print_signals(&signals, &game);
}

pub async fn restart(ctx: &CliContext, first: usize) {
    let Some(session) = ctx.session().await else {
        return no_game();
    };
    let mut game = session.write().await;
    if first >= game.player_count() {
        println!("No such player: {first}");
        return;
    }
    let signals = game.restart(first);
    print_signals(&signals, &game);
    *ctx.game_started_at.write().await = Some(chrono::Local::now());
}

// ─── Uptime Tracking ────────────────────────────────────────────────────────

pub async fn toggle_local(ctx: &CliContext, category: &str, player: Option<usize>) {
    let Some(category) = parse_local_category(category) else {
        println!("Unknown category (expected: search, shuffling)");
        return;
    };
    let Some(session) = ctx.session().await else {
        return no_game();
    };
    let mut game = session.write().await;
    let index = player.unwrap_or_else(|| game.current_player_index());
    if index >= game.player_count() {
        println!("No such player: {index}");
        return;
    }
    let signals = game.toggle_local_uptime(category, index);
    print_signals(&signals, &game);
}

pub async fn toggle_global(ctx: &CliContext, category: &str) {
    let Some(category) = parse_global_category(category) else {
        println!("Unknown category (expected: politics, rules)");
        return;
    };
    let Some(session) = ctx.session().await else {
        return no_game();
    };
    let mut game = session.write().await;
    let signals = game.toggle_global_uptime(category);
    print_signals(&signals, &game);
}

fn parse_local_category(input: &str) -> Option<LocalCategory> {
    match input.to_ascii_lowercase().as_str() {
        "search" => Some(LocalCategory::Search),
        "shuffling" | "shuffle" => Some(LocalCategory::Shuffling),
        _ => None,
    }
}

fn parse_global_category(input: &str) -> Option<GlobalCategory> {
    match input.to_ascii_lowercase().as_str() {
        "politics" => Some(GlobalCategory::Politics),
        "rules" => Some(GlobalCategory::Rules),
        _ => None,
    }
}

// ─── Display ────────────────────────────────────────────────────────────────

pub async fn status(ctx: &CliContext) {
    let Some(session) = ctx.session().await else {
        return no_game();
    };
    let game = session.read().await;

    if let Some(started) = *ctx.game_started_at.read().await {
        println!(
            "Game time {} (started {})",
            format_clock(game.elapsed_secs()),
            started.format("%H:%M:%S")
        );
    }
    println!("{}", "-".repeat(52));
    for (index, player) in game.players().iter().enumerate() {
        let marker = if player.is_active { ">" } else { " " };
        let clock = if player.is_eliminated {
            "--".to_string()
        } else {
            format_clock(player.display_secs())
        };
        let note = if player.is_eliminated {
            "eliminated".to_string()
        } else if let Some(category) = player.active_local_category {
            format!("tracking {}", category.label())
        } else if player.is_low_time() {
            "low time".to_string()
        } else {
            String::new()
        };
        println!("{marker} {index}  {:<16} {clock:>8}   {note}", player.name);
    }
    println!("{}", "-".repeat(52));
    if game.is_paused() {
        println!("Paused");
    }
    if let Some(category) = game.active_global_category() {
        println!(
            "Global {} time running ({})",
            category.label(),
            format_clock(game.global_uptime_for(category))
        );
    }
    if game.is_game_over() {
        match game.winner() {
            Some(index) => println!("Game over - {} wins", game.player(index).name),
            None => println!("Game over"),
        }
    }
}

pub async fn stats(ctx: &CliContext) {
    let Some(session) = ctx.session().await else {
        return no_game();
    };
    let game = session.read().await;
    let stats = GameStats::collect(&game);

    println!("Total game time {}", format_clock(stats.total_game_secs));
    println!();
    println!("{:<16} {:>8}   % of game", "Category", "Time");
    println!("{}", "-".repeat(40));
    for (label, secs) in [
        ("Politics", stats.politics_secs),
        ("Rules", stats.rules_secs),
        ("Search", stats.total_search_secs),
        ("Shuffling", stats.total_shuffling_secs),
    ] {
        println!(
            "{label:<16} {:>8}   {}%",
            format_clock(secs),
            stats.percent_of_game(secs)
        );
    }
    let downtime = stats.total_downtime_secs();
    println!(
        "{:<16} {:>8}   {}%",
        "Non-gameplay",
        format_clock(downtime),
        stats.percent_of_game(downtime)
    );
    println!();
    println!(
        "{:<16} {:>8} {:>8} {:>8} {:>9}   Result",
        "Player", "Used", "Left", "Search", "Shuffling"
    );
    println!("{}", "-".repeat(64));
    for player in &stats.players {
        let result = match player.outcome {
            PlayerOutcome::Winner => "winner".to_string(),
            PlayerOutcome::Eliminated(order) => format!("out #{order}"),
            PlayerOutcome::Playing => "playing".to_string(),
        };
        println!(
            "{:<16} {:>8} {:>8} {:>8} {:>9}   {result}",
            player.name,
            format_clock(player.time_used_secs),
            format_clock(player.time_remaining_secs),
            format_clock(player.search_secs),
            format_clock(player.shuffling_secs),
        );
    }
}

pub async fn show_settings(ctx: &CliContext) {
    let settings = ctx.settings.read().await;
    println!("Tick interval: {}ms", settings.tick_interval_ms);
    println!("Default players: {}", settings.game.player_count);
    println!(
        "Default time: {}",
        format_clock(settings.game.initial_secs)
    );
    println!("Default starting seat: {}", settings.game.starting_index);
}

pub fn exit() {
    write!(std::io::stdout(), "quitting...").expect("error exiting");
    std::io::stdout().flush().expect("error flushing stdout");
}

fn no_game() {
    println!("No game running (try 'start')");
}
