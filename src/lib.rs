//! spherecast ray caster
//!
//! Casts one ray per pixel from a pinhole camera at the origin into a scene
//! holding a single sphere, and writes the result as a binary PPM image.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod vector;
pub mod ray;
pub mod hittable;
pub mod sphere;
pub mod caster;
pub mod camera;
pub mod output;
