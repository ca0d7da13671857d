//! # Output Module
//!
//! Serializes a rendered [`Framebuffer`] to disk:
//! - binary PPM (`P6`), the default format
//! - 8-bit PNG through the `image` crate
//! - linear f32 OpenEXR through the `exr` crate
//!
//! All 8-bit formats share the same quantisation, [`to_byte`]: clamp to
//! [0, 1], scale by 255 and truncate. No gamma curve is applied.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, ImageFormat, Rgb};
use log::{debug, info};
use thiserror::Error;

use crate::camera::Framebuffer;

/// Errors raised while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Creating or writing the PPM file failed.
    #[error("failed to write {}", path.display())]
    Io {
        /// File being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The PNG encoder failed.
    #[error("failed to save PNG {}", path.display())]
    Png {
        /// File being written
        path: PathBuf,
        /// Encoder error
        #[source]
        source: image::ImageError,
    },

    /// The EXR writer failed.
    #[error("failed to save EXR {}", path.display())]
    Exr {
        /// File being written
        path: PathBuf,
        /// Writer error
        #[source]
        source: exr::error::Error,
    },

    /// The path's extension names no known format.
    #[error("unsupported file extension '{0}', only .ppm, .png and .exr are supported")]
    UnsupportedExtension(String),
}

/// Quantise one channel to a byte.
///
/// Out-of-range input saturates at 0 or 255 instead of wrapping.
#[inline]
pub fn to_byte(channel: f32) -> u8 {
    (255.0 * channel.clamp(0.0, 1.0)) as u8
}

/// Write `image` as a binary PPM stream.
///
/// The header is `P6\n<width> <height>\n255\n`, followed by
/// width * height * 3 bytes in row-major RGB order.
pub fn encode_ppm<W: Write>(image: &Framebuffer, mut out: W) -> io::Result<()> {
    let (width, height) = image.dimensions();
    write!(out, "P6\n{} {}\n255\n", width, height)?;

    let bytes: Vec<u8> = image.as_raw().iter().copied().map(to_byte).collect();
    out.write_all(&bytes)?;
    out.flush()
}

/// Save `image` as a binary PPM, truncating any existing file at `path`.
pub fn save_image_as_ppm(image: &Framebuffer, path: &Path) -> Result<(), OutputError> {
    let io_err = |source: io::Error| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    encode_ppm(image, BufWriter::new(file)).map_err(io_err)?;

    info!("Image saved as {}", path.display());
    Ok(())
}

/// Save `image` as an 8-bit PNG using the same quantisation as the PPM writer.
pub fn save_image_as_png(image: &Framebuffer, path: &Path) -> Result<(), OutputError> {
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let pixel = image.get_pixel(x, y);
        Rgb([to_byte(pixel[0]), to_byte(pixel[1]), to_byte(pixel[2])])
    });

    u8_image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| OutputError::Png {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Image saved as {}", path.display());
    Ok(())
}

/// Save `image` as an OpenEXR file holding the raw linear f32 values.
pub fn save_image_as_exr(image: &Framebuffer, path: &Path) -> Result<(), OutputError> {
    let width = image.width() as usize;

    write_rgb_file(path, width, image.height() as usize, |x, y| {
        let raw = image.as_raw();
        let index = 3 * (y * width + x);
        (raw[index], raw[index + 1], raw[index + 2])
    })
    .map_err(|source| OutputError::Exr {
        path: path.to_path_buf(),
        source,
    })?;

    info!("HDR image saved as EXR: {}", path.display());
    Ok(())
}

/// Save `image` in the format named by the extension of `path`.
pub fn save_image(image: &Framebuffer, path: &Path) -> Result<(), OutputError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    debug!("Writing {} as '{}'", path.display(), extension);

    match extension.as_str() {
        "ppm" => save_image_as_ppm(image, path),
        "png" => save_image_as_png(image, path),
        "exr" => save_image_as_exr(image, path),
        _ => Err(OutputError::UnsupportedExtension(extension)),
    }
}
