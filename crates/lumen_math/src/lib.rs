//! Lumen math types.
//!
//! Everything is double precision: the renderer works on `glam`'s f64
//! vectors, aliased here under the names the rest of the workspace uses.

use glam::DVec3;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// A direction or offset in 3D space.
pub type Vec3 = DVec3;

/// A position in 3D space.
pub type Point3 = DVec3;

/// Linear RGB color, one channel per component.
pub type Color = DVec3;
