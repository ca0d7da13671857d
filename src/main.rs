use anyhow::Context;
use clap::Parser;
use log::{debug, info};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;
use spherecast::camera::{Camera, FOV};
use spherecast::output::save_image;
use spherecast::sphere::Sphere;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level);

    println!("Render the output");
    info!("spherecast - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    debug!("{:?}", args);

    let world = Sphere::reference();
    let camera = Camera {
        image_width: args.width,
        image_height: args.height,
        fov: args.fov.map_or(FOV, f32::to_radians),
        threads: args.threads,
        show_progress: args.progress,
    };
    info!(
        "Sphere at {} with radius {}, fov {:.4} rad",
        world.center, world.radius, camera.fov
    );

    let image = camera.render(&world).context("could not start rendering")?;

    save_image(&image, &args.output)
        .with_context(|| format!("could not save image to {}", args.output.display()))?;

    Ok(())
}
