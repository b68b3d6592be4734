use std::io::{self, IsTerminal};

use anyhow::Result;
use numguess::config::DEFAULT_LOG_FILTER;
use numguess::games::guess_number::{self, RandomSecrets};
use numguess::TerminalContext;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never mix with the game on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let colored = stdout.is_terminal();
    let mut ctx = TerminalContext::new(stdout.lock(), colored);

    let engine = guess_number::engine(RandomSecrets::thread_local());
    let game = engine.run(io::stdin().lock(), &mut ctx)?;

    let stats = game.stats();
    info!(
        rounds = stats.rounds,
        correct = stats.correct,
        too_low = stats.too_low,
        too_high = stats.too_high,
        rejected = stats.rejected,
        "session finished"
    );
    Ok(())
}
