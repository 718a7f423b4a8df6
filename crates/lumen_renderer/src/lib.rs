//! Lumen renderer - CPU ray tracing
//!
//! A Monte Carlo ray tracer that writes plain PPM images. A [`Camera`] turns
//! pixels into rays, [`ray_color`] follows each ray through [`Hittable`]
//! geometry and [`Material`] scattering, and the render loop streams the
//! averaged samples out in row-major order, sequentially or one scanline at
//! a time across a thread pool.

mod camera;
mod error;
mod hittable;
mod material;
mod ppm;
mod progress;
mod renderer;
mod sampling;
mod sphere;

pub use camera::{Camera, CameraConfig, Frame};
pub use error::{CameraError, RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Dielectric, Lambertian, Material, Metal, ScatterResult};
pub use ppm::{color_to_rgb, linear_to_gamma, write_color, write_header};
pub use progress::{Progress, ScanlineBar, Silent};
pub use renderer::{ray_color, render_pixel, sky_gradient, Schedule};
pub use sampling::{pixel_rng, random_f64, random_in_unit_disk, random_range, random_unit_vector};
pub use sphere::Sphere;

/// Re-export the math types the renderer API is written in
pub use lumen_math::{Color, Interval, Point3, Ray, Vec3};
