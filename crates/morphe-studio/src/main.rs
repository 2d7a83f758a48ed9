mod app;
mod cloud;
mod config;
mod motion;

use anyhow::Result;
use winit::dpi::LogicalSize;

use morphe_engine::logging::{init_logging, LoggingConfig};
use morphe_engine::paint::Theme;
use morphe_engine::window::{Runtime, RuntimeConfig};

use crate::app::Studio;
use crate::config::StudioConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_env();
    log::info!(
        "starting morphe studio: {} at detail {}",
        config.shape,
        config.detail
    );
    log::info!("keys: 1-4 shape, space cycle, up/down detail, r reset, esc quit");

    let theme = Theme::default();
    let studio = Studio::new(config, &theme);

    Runtime::run(
        RuntimeConfig {
            title: "morphe".to_string(),
            initial_size: LogicalSize::new(1280.0, 800.0),
            ..Default::default()
        },
        None,
        studio,
    )
}
