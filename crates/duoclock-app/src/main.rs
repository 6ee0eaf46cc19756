mod app;
mod device;
mod logging;
mod paint;
mod render;
mod runtime;
mod text;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use crate::app::{ClockApp, WINDOW_TITLE};
use crate::runtime::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    logging::init_logging();

    let font = load_font().context(
        "no usable TTF font found in the standard system font directories",
    )?;
    let app = ClockApp::new(&font)?;

    let config = RuntimeConfig {
        title: WINDOW_TITLE.to_string(),
        initial_size: LogicalSize::new(640.0, 420.0),
    };

    log::info!("opening clock window");
    Runtime::run(config, app)
}

fn load_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}
