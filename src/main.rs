mod board;      // match-3 pieces and board helpers
mod graphics;   // macroquad window, drawing and input
mod settings;   // configuration loading
mod view;       // world <-> screen projection

use anyhow::Context;
use graphics::window_conf;
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Match board started.");

    match run().await {
        Ok(()) => info!("Match board finished."),
        Err(e) => error!("Match board failed: {:?}", e),
    }
}

async fn run() -> anyhow::Result<()> {
    let settings = settings::load_config().context("Failed to load configuration")?;
    let mut board = board::new_board(&settings.board).context("Failed to create board")?;
    board::fill_random(&mut board, &mut rand::rng());

    graphics::run_board_loop(board, &settings).await;
    Ok(())
}
