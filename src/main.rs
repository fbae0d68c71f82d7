use clap::{ArgAction, Parser};
use pixel_studio::{
    Config,
    backend::{self, LaunchOptions},
    draw::Color,
    input::Mode,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PIXEL_STUDIO_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "pixel-studio")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Pixel-art drawing surface for Wayland compositors"
)]
struct Cli {
    /// Cells per side of the starting grid
    #[arg(long, short = 's', value_name = "N")]
    size: Option<u32>,

    /// Starting base color (#rrggbb, #rgb, rgb(r, g, b) or a color name)
    #[arg(long, short = 'c', value_name = "COLOR", value_parser = parse_color_arg)]
    color: Option<Color>,

    /// Starting mode (color, rainbow, shader, eraser or picker)
    #[arg(long, short = 'm', value_name = "MODE", value_parser = parse_mode_arg)]
    mode: Option<Mode>,

    /// Start with hover painting paused
    #[arg(long, action = ArgAction::SetTrue)]
    paused: bool,

    /// Write the default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn parse_color_arg(value: &str) -> Result<Color, String> {
    value.parse::<Color>().map_err(|e| e.to_string())
}

fn parse_mode_arg(value: &str) -> Result<Mode, String> {
    value.parse::<Mode>()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    if std::env::var_os("WAYLAND_DISPLAY").is_none() {
        log::error!("WAYLAND_DISPLAY not set - this application requires Wayland.");
        log::error!("Please run on a Wayland compositor with wlr-layer-shell (Hyprland, Sway, etc.).");
        return Err(anyhow::anyhow!("WAYLAND_DISPLAY not set"));
    }

    let options = LaunchOptions {
        grid_size: cli.size,
        base_color: cli.color,
        mode: cli.mode,
        paused: cli.paused,
    };

    log::info!("Starting Pixel Studio...");
    log::info!("Controls: hover to paint, 1-5 switch modes, Space pauses drawing, F1 for help, Escape to exit");
    backend::run_wayland(options)?;
    log::info!("Pixel Studio closed.");

    Ok(())
}
