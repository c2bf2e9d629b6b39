use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use guessterm::core::{GameEngine, SeededSource, TargetSource, ThreadRngSource};
use guessterm::{logging, App, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    if let Some(path) = &config.log_file {
        logging::init_file_logging(path)?;
    }
    info!(seed = ?config.seed, "starting guessterm");

    let source: Box<dyn TargetSource> = match config.seed {
        Some(seed) => Box::new(SeededSource::new(seed)),
        None => Box::new(ThreadRngSource),
    };
    let mut app = App::new(GameEngine::new(source));

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);

    // Always try to restore terminal state.
    ratatui::restore();

    if let Err(e) = &result {
        error!(error = ?e, "game loop failed");
    }
    result
}
