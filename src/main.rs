//! Cuordle - CLI
//!
//! Four-board Spanish word puzzle with TUI and line-based modes.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use cuordle::{
    commands::{Challenge, run_simple, saved_summary, verify_pool},
    game::{GameConfig, MAX_GUESSES},
    output::{print_info, print_verify_report},
    storage::{FileStore, MemoryStore, StateStore},
    wordlists::{Dictionary, WordPool, loader::load_resources, today},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cuordle",
    about = "Daily Spanish word puzzle: four boards, one keyboard, ten guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle pool JSON (default: embedded pool)
    #[arg(long, global = true)]
    pool: Option<PathBuf>,

    /// Accepted-guess list, one word per line (default: embedded dictionary)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Directory holding saved progress
    #[arg(long, global = true, default_value = ".")]
    state_dir: PathBuf,

    /// Keep progress in memory only
    #[arg(long, global = true)]
    no_save: bool,

    /// Play the puzzle of another day (YYYY-MM-DD); progress is not saved
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Practice on a random puzzle; progress is never saved
    #[arg(long, global = true)]
    random: bool,

    /// Turns allowed before the game is lost
    #[arg(long, global = true, default_value_t = MAX_GUESSES)]
    max_guesses: usize,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without TUI
    Simple,

    /// Print the share summary for the saved game
    Share,

    /// Show the challenge number and loaded resources
    Info,

    /// Check every puzzle in the pool against the dictionary
    Verify,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.max_guesses == 0 {
        bail!("--max-guesses must be at least 1");
    }

    let (pool, dictionary) = load_resources(cli.pool.as_deref(), cli.dictionary.as_deref());
    tracing::info!(
        puzzles = pool.len(),
        words = dictionary.len(),
        "resources loaded"
    );

    let config = GameConfig {
        max_guesses: cli.max_guesses,
        ..GameConfig::default()
    };
    let today = today();
    let date = cli.date.unwrap_or(today);
    let challenge = if cli.random {
        Challenge::practice(&pool, date)
    } else {
        Challenge::daily(&pool, &config, date)
    };

    // Practice games and other days are played in memory so today's record survives
    let mut store: Box<dyn StateStore> = if cli.no_save || !challenge.persists(today) {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(&cli.state_dir))
    };

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&challenge, &dictionary, config, store, today),
        Commands::Simple => {
            let mut session = challenge.start(&dictionary, config, store.as_mut(), today);
            run_simple(&mut session, &challenge, store.as_mut(), io::stdin().lock())
        }
        Commands::Share => {
            // Sharing only reads the saved record, so --no-save does not apply
            let mut saved = FileStore::new(&cli.state_dir);
            let text = saved_summary(&challenge, &dictionary, config, &mut saved, today)?;
            println!("{text}");
            Ok(())
        }
        Commands::Info => {
            print_info(&challenge, &pool, &dictionary);
            Ok(())
        }
        Commands::Verify => run_verify_command(&pool, &dictionary),
    }
}

fn run_play_command(
    challenge: &Challenge,
    dictionary: &Dictionary,
    config: GameConfig,
    mut store: Box<dyn StateStore>,
    today: NaiveDate,
) -> Result<()> {
    use cuordle::interactive::{App, run_tui};

    let session = challenge.start(dictionary, config, store.as_mut(), today);
    let app = App::new(session, challenge.clone(), store);
    run_tui(app)
}

fn run_verify_command(pool: &WordPool, dictionary: &Dictionary) -> Result<()> {
    let report = verify_pool(pool, dictionary);
    print_verify_report(&report);
    if report.is_clean() {
        Ok(())
    } else {
        bail!("{} invalid targets in pool", report.problems.len())
    }
}
