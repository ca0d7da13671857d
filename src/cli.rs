use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use spherecast::camera::{IMAGE_HEIGHT, IMAGE_WIDTH};

/// Field of view in degrees, strictly between 0 and 180.
fn parse_fov(s: &str) -> Result<f32, String> {
    let degrees: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if degrees > 0.0 && degrees < 180.0 {
        Ok(degrees)
    } else {
        Err(format!("{degrees} is outside (0, 180) degrees"))
    }
}

/// Command line arguments. Every default reproduces the reference render.
#[derive(Parser, Debug)]
#[command(name = "spherecast")]
#[command(about = "Cast one ray per pixel at a single sphere and write the image")]
pub struct Args {
    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value_t = LevelFilter::Warn)]
    pub debug_level: LevelFilter,

    /// Image width in pixels
    #[arg(long, default_value_t = IMAGE_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = IMAGE_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Vertical field of view in degrees [default: 60]
    #[arg(long, value_parser = parse_fov)]
    pub fov: Option<f32>,

    /// Output file path (.ppm, .png for 8-bit, .exr for linear f32)
    #[arg(short, long, default_value = "output.ppm")]
    pub output: PathBuf,

    /// Worker threads for rendering (0 = one per CPU core)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,

    /// Show a progress bar on stderr while rendering
    #[arg(long)]
    pub progress: bool,
}
