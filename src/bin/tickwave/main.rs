//! tickwave - terminal scope for the per-tick generators
//!
//! Run with: cargo run

mod app;
mod engine;
mod ui;

use app::Tickwave;
use tickwave::EngineConfig;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    Tickwave::new()
        .config(EngineConfig::default())
        .tempo(120.0)
        .frequency(110.0)
        .run()
}
