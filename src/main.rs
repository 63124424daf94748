use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use minimax_connect_four::ai::MoveSelector;
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::game::Player;
use minimax_connect_four::ui::{console, App};

/// Play Connect Four against a minimax AI.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<u8>,

    /// Seed the AI's random choices for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Let the AI play Red and move first
    #[arg(long)]
    ai_first: bool,

    /// Use the plain line-oriented console instead of the TUI
    #[arg(long)]
    plain: bool,

    /// Write logs to this file (the TUI discards logs otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    init_logging(&cli)?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.engine.depth = depth;
    }
    if let Some(seed) = cli.seed {
        config.engine.seed = Some(seed);
    }
    if cli.ai_first {
        config.game.ai_player = Player::Red;
    }
    config.validate().context("invalid configuration")?;

    tracing::info!(
        depth = config.engine.depth,
        seed = ?config.engine.seed,
        ai = config.game.ai_player.name(),
        "starting game"
    );

    let mut selector = MoveSelector::new(config.engine, config.game.ai_player);

    if cli.plain {
        run_plain(&mut selector)
    } else {
        run_tui(selector).context("terminal UI failed")
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if cli.plain {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(io::stderr)
            .init();
    }
    // The TUI owns the screen, so without a log file nothing is installed.
    Ok(())
}

fn run_plain(selector: &mut MoveSelector) -> Result<()> {
    let stdin = io::stdin();
    match console::play(selector, stdin.lock(), io::stdout()) {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            tracing::info!("input closed, exiting");
            Ok(())
        }
        Err(err) => Err(err).context("console game failed"),
    }
}

fn run_tui(selector: MoveSelector) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(selector);
    let res = app.run(&mut terminal);

    // Restore terminal even if the app loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
