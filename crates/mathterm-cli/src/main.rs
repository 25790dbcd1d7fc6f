mod card;
mod config;
mod console;
#[cfg(feature = "web")]
mod share;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::cursor::MoveTo;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use rand::rngs::StdRng;
use rand::SeedableRng;

use mathterm_core::{
    ExpressionGenerator, GameMode, Profile, ProfileStore, QuizError, SessionResult, SessionRules,
    SessionRunner, SystemClock,
};
use mathterm_store::JsonProfileStore;

use crate::config::Config;
use crate::console::{group_thousands, print_header, read_line, ConsoleObserver, LineAnswers};

#[derive(Parser)]
#[command(
    name = "mathterm",
    version,
    about = "A math game for terminal lovers"
)]
struct Cli {
    /// Directory holding the saved profile
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Opens the interactive menu when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one session
    Play {
        /// Game mode
        mode: CliMode,
    },

    /// Show recent sessions, newest first
    History {
        /// Number of sessions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show player statistics
    Stats,

    /// Write a shareable status card (SVG)
    Status {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Serve saved statistics over HTTP
    Share {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show current configuration
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliMode {
    Easy,
    Medium,
    Hard,
    Extreme,
    Matrix,
    /// 60-second challenge, faster answers score more
    Timed,
    /// One mistake ends the run
    Survival,
}

impl From<CliMode> for GameMode {
    fn from(val: CliMode) -> Self {
        match val {
            CliMode::Easy => GameMode::Easy,
            CliMode::Medium => GameMode::Medium,
            CliMode::Hard => GameMode::Hard,
            CliMode::Extreme => GameMode::Extreme,
            CliMode::Matrix => GameMode::Matrix,
            CliMode::Timed => GameMode::Timed,
            CliMode::Survival => GameMode::Survival,
        }
    }
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("dev", "mathterm", "mathterm")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".mathterm"))
}

fn open_store(data_dir: Option<PathBuf>, cfg: &Config) -> JsonProfileStore {
    let dir = data_dir
        .or_else(|| cfg.store.path.as_ref().map(PathBuf::from))
        .unwrap_or_else(default_data_dir);
    JsonProfileStore::new(dir, cfg.username())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config()?;
    let store = open_store(cli.data_dir, &cfg);

    match cli.command {
        None => cmd_menu(&store, &cfg),
        Some(Commands::Play { mode }) => cmd_play(&store, &cfg, mode.into()).map(|_| ()),
        Some(Commands::History { limit }) => {
            cmd_history(&store.load(), limit.unwrap_or(cfg.history.limit));
            Ok(())
        }
        Some(Commands::Stats) => {
            cmd_stats(&store.load());
            Ok(())
        }
        Some(Commands::Status { output }) => {
            let path = output.unwrap_or_else(|| PathBuf::from(&cfg.card.output));
            cmd_status(&store.load(), &path)
        }
        Some(Commands::Share { host, port }) => {
            let host = host.unwrap_or_else(|| cfg.share.host.clone());
            let port = port.unwrap_or(cfg.share.port);
            cmd_share(&store, &host, port)
        }
        Some(Commands::Config) => cmd_config(&store),
    }
}

// ---------------------------------------------------------------------------
// Game commands
// ---------------------------------------------------------------------------

/// Play one session, then merge and save. Returns `false` when the session
/// was abandoned and nothing was recorded.
fn cmd_play(store: &JsonProfileStore, cfg: &Config, mode: GameMode) -> Result<bool> {
    let mut profile = store.load();
    let result = match run_session(cfg, mode) {
        Ok(result) => result,
        Err(QuizError::InputClosed) => {
            println!("\n{}", "Session abandoned, nothing saved.".yellow());
            return Ok(false);
        }
        Err(e) => return Err(e).context("session failed"),
    };

    let previous_rank = profile.rank;
    profile.record(result);
    store.save(&profile).context("failed to save profile")?;

    if profile.rank != previous_rank {
        println!(
            "{} You are now a {}!",
            "RANK UP!".magenta().bold(),
            profile.rank.to_string().bold()
        );
    }
    println!(
        "Total score: {} | Rank: {}",
        group_thousands(profile.total_score),
        profile.rank
    );
    Ok(true)
}

fn run_session(cfg: &Config, mode: GameMode) -> Result<SessionResult, QuizError> {
    let mut generator = ExpressionGenerator::new(StdRng::from_entropy());
    let clock = SystemClock::new();
    let rules = SessionRules {
        timed_duration: cfg.timed.duration(),
    };
    let mut answers = LineAnswers::new(io::stdin().lock(), io::stdout());
    let mut observer = ConsoleObserver::new(io::stdout());

    SessionRunner::new(&mut generator, &clock)
        .with_rules(rules)
        .run(mode, &mut answers, &mut observer)
}

const MENU: [(&str, &str); 9] = [
    ("1", "Easy"),
    ("2", "Medium"),
    ("3", "Hard"),
    ("4", "Extreme"),
    ("5", "Matrix"),
    ("6", "Timed Challenge"),
    ("7", "Survival Mode"),
    ("8", "View History"),
    ("9", "Exit"),
];

enum MenuChoice {
    Play(GameMode),
    History,
    Exit,
}

fn parse_menu_choice(input: &str) -> Option<MenuChoice> {
    let choice = match input.trim() {
        "1" => MenuChoice::Play(GameMode::Easy),
        "2" => MenuChoice::Play(GameMode::Medium),
        "3" => MenuChoice::Play(GameMode::Hard),
        "4" => MenuChoice::Play(GameMode::Extreme),
        "5" => MenuChoice::Play(GameMode::Matrix),
        "6" => MenuChoice::Play(GameMode::Timed),
        "7" => MenuChoice::Play(GameMode::Survival),
        "8" => MenuChoice::History,
        "9" => MenuChoice::Exit,
        _ => return None,
    };
    Some(choice)
}

fn cmd_menu(store: &JsonProfileStore, cfg: &Config) -> Result<()> {
    loop {
        let profile = store.load();
        clear_screen();
        println!("{}", "mathterm: A Math Game for Terminal Lovers".magenta().bold());
        println!();
        print_header(&profile);
        println!();
        println!("{}", "Select a Mode".bold());
        for (key, label) in MENU {
            println!("  [{key}] {label}");
        }

        let choice = loop {
            let Some(line) = prompt_line("Enter your choice: ")? else {
                return Ok(());
            };
            match parse_menu_choice(&line) {
                Some(choice) => break choice,
                None => println!("{}", "Please pick a number from 1 to 9.".red()),
            }
        };

        match choice {
            MenuChoice::Play(mode) => {
                if !cmd_play(store, cfg, mode)? {
                    return Ok(());
                }
            }
            MenuChoice::History => cmd_history(&profile, cfg.history.limit),
            MenuChoice::Exit => {
                println!("{}", "Thanks for playing mathterm!".cyan().bold());
                return Ok(());
            }
        }

        if prompt_line("\nPress Enter to return to the menu...")?.is_none() {
            return Ok(());
        }
    }
}

fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    Ok(read_line(&mut io::stdin().lock())?)
}

fn clear_screen() {
    let _ = crossterm::execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

// ---------------------------------------------------------------------------
// Profile views
// ---------------------------------------------------------------------------

fn cmd_history(profile: &Profile, limit: usize) {
    if profile.history.is_empty() {
        println!("{}", "No history yet. Go play a game!".yellow());
        return;
    }

    println!("{}", history_title(profile, limit).cyan().bold());
    println!(
        "{:<17} {:<10} {:>7} {:>8} {:>10}",
        "Date", "Mode", "Score", "Correct", "Incorrect"
    );
    println!("{}", "-".repeat(56));
    for session in profile.recent(limit) {
        println!(
            "{:<17} {:<10} {:>7} {:>8} {:>10}",
            session
                .played_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            session.mode.label(),
            session.score,
            session.correct,
            session.incorrect
        );
    }
}

fn history_title(profile: &Profile, limit: usize) -> String {
    match limit.min(profile.history.len()) {
        1 => "Last Game Session".into(),
        n => format!("Last {n} Game Sessions"),
    }
}

fn cmd_stats(profile: &Profile) {
    print_header(profile);
    println!();
    println!("{:<10} Played", "Mode");
    println!("{}", "-".repeat(20));
    for mode in GameMode::ALL {
        println!("{:<10} {}", mode.label(), profile.stats.played(mode));
    }
    println!("{:<10} {}", "Total", profile.stats.total_played);
    println!();
    match profile.min_session_score {
        Some(min) => {
            println!("Lowest session:  {min}");
            println!("Highest session: {}", profile.max_session_score);
        }
        None => println!("No sessions played yet."),
    }
    if let Some(best) = profile.best_survival() {
        println!("Survival best:   {best}");
    }
}

fn cmd_status(profile: &Profile, path: &Path) -> Result<()> {
    println!("Generating status card...");
    card::write_card(profile, path)?;
    println!("{} Card saved as {}", "Success!".green(), path.display().to_string().cyan());
    Ok(())
}

#[cfg(feature = "web")]
fn cmd_share(store: &JsonProfileStore, host: &str, port: u16) -> Result<()> {
    let profile = store.load();
    let key = share::load_or_create_key(store.dir())?;
    println!("{}", "Share server running!".green().bold());
    println!("Key: {}", key.as_str().yellow());
    println!(
        "URL: {}",
        format!("http://{host}:{port}/api?key={key}").cyan()
    );
    println!("\nPress CTRL+C to stop.");
    share::serve(profile, &key, host, port)
}

#[cfg(not(feature = "web"))]
fn cmd_share(_store: &JsonProfileStore, _host: &str, _port: u16) -> Result<()> {
    anyhow::bail!("web feature not enabled, rebuild with `--features web`")
}

fn cmd_config(store: &JsonProfileStore) -> Result<()> {
    let cfg = config::load_config()?;
    println!("Config: {}", config::show_config_path());
    println!();
    println!("[store]");
    println!("  path = {}", store.dir().display());
    println!("  profile = {}", store.path().display());
    println!();
    println!("[player]");
    println!("  name = {}", cfg.username());
    println!();
    println!("[timed]");
    println!("  duration_secs = {}", cfg.timed.duration_secs);
    println!();
    println!("[history]");
    println!("  limit = {}", cfg.history.limit);
    println!();
    println!("[card]");
    println!("  output = {}", cfg.card.output);
    println!();
    println!("[share]");
    println!("  host = {}", cfg.share.host);
    println!("  port = {}", cfg.share.port);
    Ok(())
}
