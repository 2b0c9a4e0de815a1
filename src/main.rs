//! Pong entry point
//!
//! Opens the terminal window and plays one session. Logs go to stderr;
//! redirect them (`RUST_LOG=info pong 2> pong.log`) to keep the screen clean.

use anyhow::Context;

use pong::renderer::TerminalBackend;
use pong::{Game, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Pong starting...");

    let settings = Settings::default();
    let seed: u64 = rand::random();
    let mut game = Game::new(settings, seed).context("invalid game settings")?;

    let mut backend =
        TerminalBackend::open(game.settings()).context("failed to open terminal window")?;
    game.play(&mut backend);

    Ok(())
}
