//! Pinhole camera and rasterizer.
//!
//! The eye sits at the world origin looking down -z with +y up. There is no
//! camera transform, only a vertical field of view and the image size.

use std::f32::consts::{FRAC_PI_3, PI};
use std::time::Instant;

use image::{ImageBuffer, Rgb};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPoolBuildError, ThreadPoolBuilder};
use thiserror::Error;

use crate::caster::cast_ray;
use crate::hittable::Hittable;
use crate::ray::Ray;
use crate::vector::{unit_vector, Vec3};

/// Row-major f32 RGB framebuffer; pixel (x, y) lives at index x + y * width.
pub type Framebuffer = ImageBuffer<Rgb<f32>, Vec<f32>>;

/// Reference image width in pixels.
pub const IMAGE_WIDTH: u32 = 1024;

/// Reference image height in pixels.
pub const IMAGE_HEIGHT: u32 = 786;

/// Reference vertical field of view, in radians.
pub const FOV: f32 = FRAC_PI_3;

/// Failure to set up a render.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The dedicated rayon pool could not be built.
    #[error("failed to create worker thread pool")]
    ThreadPool(#[from] ThreadPoolBuildError),

    /// Field of view must lie strictly between 0 and pi radians.
    #[error("field of view {0} rad is outside (0, pi)")]
    InvalidFov(f32),

    /// The progress bar style was rejected by indicatif.
    #[error("invalid progress bar template")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),
}

/// Camera for ray generation and scene rendering.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Worker threads for rendering; 0 uses rayon's global pool
    pub threads: usize,
    /// Draw a progress bar on stderr while rendering
    pub show_progress: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera with the reference 1024x786 resolution and 60 degree field of view.
    pub fn new() -> Self {
        Self {
            image_width: IMAGE_WIDTH,
            image_height: IMAGE_HEIGHT,
            fov: FOV,
            threads: 0,
            show_progress: false,
        }
    }

    /// Primary ray through the centre of pixel (i, j).
    ///
    /// Projection math runs in f64 and is narrowed once per component.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let width = f64::from(self.image_width);
        let height = f64::from(self.image_height);
        let half_fov = (f64::from(self.fov) / 2.0).tan();

        let x = (2.0 * (f64::from(i) + 0.5) / width - 1.0) * half_fov * width / height;
        // Image rows grow downward, camera y grows upward.
        let y = -(2.0 * (f64::from(j) + 0.5) / height - 1.0) * half_fov;

        Ray::new(Vec3::ZERO, unit_vector(Vec3::new(x as f32, y as f32, -1.0)))
    }

    /// Render `world` into a fresh framebuffer.
    ///
    /// Pixels are shaded in parallel. Every worker owns the pixels it is
    /// handed, and the buffer is only returned after all of them finish.
    pub fn render(&self, world: &dyn Hittable) -> Result<Framebuffer, RenderError> {
        if !(self.fov > 0.0 && self.fov < PI) {
            return Err(RenderError::InvalidFov(self.fov));
        }

        if self.threads == 0 {
            return self.render_pixels(world);
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|id| format!("spherecast-worker-{id}"))
            .build()?;
        debug!("Built dedicated pool with {} threads", self.threads);

        pool.install(|| self.render_pixels(world))
    }

    fn render_pixels(&self, world: &dyn Hittable) -> Result<Framebuffer, RenderError> {
        let mut image = Framebuffer::new(self.image_width, self.image_height);

        info!(
            "Rendering {}x{} using {} CPU threads...",
            self.image_width,
            self.image_height,
            rayon::current_num_threads()
        );
        let generation_start = Instant::now();

        let pb = if self.show_progress {
            let pb = ProgressBar::new(u64::from(self.image_width) * u64::from(self.image_height));
            pb.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}")?);
            pb
        } else {
            ProgressBar::hidden()
        };

        image.enumerate_pixels_mut().par_bridge().for_each(|(i, j, pixel)| {
            let color = cast_ray(&self.get_ray(i, j), world);
            *pixel = Rgb([color.x, color.y, color.z]);
            pb.inc(1);
        });

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        Ok(image)
    }
}
