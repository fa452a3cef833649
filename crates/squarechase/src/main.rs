//! Square Chase: click the square before it moves.

mod app;
mod assets;
mod chase;
mod config;
mod context;
mod game_view;

use std::process::ExitCode;

use squarechase_engine::device::GpuInit;
use squarechase_engine::logging::{LoggingConfig, init_logging};
use squarechase_engine::window::Runtime;

use crate::app::SquareChase;
use crate::config::GameConfig;

fn main() -> ExitCode {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "squarechase".to_owned());
    if args.next().is_some() {
        println!("{program} takes no arguments.");
        return ExitCode::FAILURE;
    }

    init_logging(LoggingConfig::default());

    match run(GameConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: GameConfig) -> anyhow::Result<()> {
    log::info!("starting {}", config.window.title);

    let window = config.window.clone();
    Runtime::run(window, GpuInit::default(), SquareChase::new(config))
}
