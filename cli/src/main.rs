use clap::{Parser, Subcommand};
use std::io::Write;

use turnclock_cli::CliContext;
use turnclock_cli::commands;
use turnclock_cli::readline;

#[tokio::main]
async fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let ctx = CliContext::new();
    println!("turnclock - shared turn timer for 2-6 players ('start' to begin, 'help' for commands)");

    loop {
        let line = readline()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    ctx.stop_clock().await;
    Ok(())
}

#[derive(Parser)]
#[command(version, about = "turnclock")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new game (defaults come from saved settings)
    Start {
        #[arg(short, long)]
        players: Option<usize>,
        #[arg(short, long)]
        minutes: Option<u64>,
        /// Comma-separated seat names, e.g. "Alice,Bob"
        #[arg(short, long)]
        names: Option<String>,
        /// Seat that takes the first turn
        #[arg(short, long)]
        first: Option<usize>,
    },
    /// Tap a player tile: the active seat passes, another seat takes over
    Tap { index: usize },
    /// Pass the turn to the next living player
    Pass,
    /// Toggle a per-player uptime category (search, shuffling)
    Local {
        category: String,
        #[arg(short, long)]
        player: Option<usize>,
    },
    /// Toggle a session-wide uptime category (politics, rules)
    Global { category: String },
    /// Remove a player from the rotation
    Eliminate { index: usize },
    /// Pause or resume the whole session
    Pause,
    /// Reset the same roster for a new game
    Restart {
        #[arg(short, long, default_value_t = 0)]
        first: usize,
    },
    /// Show the player board
    Status,
    /// Show session statistics
    Stats,
    /// Show persisted defaults
    Settings,
    Exit,
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "turnclock".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Start {
            players,
            minutes,
            names,
            first,
        }) => commands::start_game(ctx, *players, *minutes, names.as_deref(), *first).await,
        Some(Commands::Tap { index }) => commands::tap(ctx, *index).await,
        Some(Commands::Pass) => commands::pass(ctx).await,
        Some(Commands::Local { category, player }) => {
            commands::toggle_local(ctx, category, *player).await
        }
        Some(Commands::Global { category }) => commands::toggle_global(ctx, category).await,
        Some(Commands::Eliminate { index }) => commands::eliminate(ctx, *index).await,
        Some(Commands::Pause) => commands::pause(ctx).await,
        Some(Commands::Restart { first }) => commands::restart(ctx, *first).await,
        Some(Commands::Status) => commands::status(ctx).await,
        Some(Commands::Stats) => commands::stats(ctx).await,
        Some(Commands::Settings) => commands::show_settings(ctx).await,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
