//! Play Silver Dollar in the terminal.
//!
//! Two players share the keyboard and enter moves as `coin spaces`.
//! Set `RUST_LOG=debug` to trace every move on stderr.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use silver_dollar::console::{ConsoleInput, ConsoleOutput};
use silver_dollar::core::DEFAULT_COIN_COUNT;
use silver_dollar::{GameConfig, GameRng, GameState, TurnController, DEFAULT_MAX_GAP};

/// Two-player Silver Dollar coin-strip game.
#[derive(Parser, Debug)]
#[command(name = "silver-dollar", version, about)]
struct Args {
    /// Number of coins on the strip.
    #[arg(short, long, default_value_t = DEFAULT_COIN_COUNT)]
    coins: usize,

    /// Largest extra gap between neighbouring coins at setup.
    #[arg(long, default_value_t = DEFAULT_MAX_GAP)]
    max_gap: u32,

    /// Seed for the starting layout; drawn from entropy when omitted.
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), "starting game");

    let config = GameConfig::new(args.coins).with_max_gap(args.max_gap);
    let state = GameState::generate(&config, &mut rng).context("invalid game setup")?;

    let mut controller = TurnController::new(state, ConsoleOutput::stdout());
    let winner = controller
        .run(ConsoleInput::stdio())
        .context("game ended without a winner")?;

    info!(%winner, "finished");
    Ok(())
}
