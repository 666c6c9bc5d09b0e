mod render;

use anyhow::Context;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use flagged::arena::{ARENA_HEIGHT, ARENA_WIDTH};
use flagged::{input, Driver, Flow, Settings, TICK_RATE};

fn window_conf() -> Conf {
    Conf {
        window_title: "Flagged".to_owned(),
        window_width: ARENA_WIDTH,
        window_height: ARENA_HEIGHT,
        window_resizable: false,
        fullscreen: false,
        ..Default::default()
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

async fn run() -> anyhow::Result<()> {
    let settings = Settings::from_env().context("reading FLAGGED_* settings")?;
    info!(
        level = %settings.level,
        speed = settings.player_speed.pixels(),
        dark_mode = settings.dark_mode,
        tick_rate = TICK_RATE,
        "starting Flagged v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Window close goes through the driver like any other quit
    prevent_quit();

    let mut driver = Driver::new(settings);

    loop {
        let frame = input::poll();

        if driver.update(&frame, get_frame_time()) == Flow::Quit {
            break;
        }

        render::draw(&driver.view());

        next_frame().await
    }

    info!("shutting down");
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(2);
    }
}
