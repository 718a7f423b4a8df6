//! Error types for camera setup and rendering.

use lumen_math::{Point3, Vec3};
use thiserror::Error;

/// Camera configurations that cannot produce a meaningful image.
///
/// Degenerate image sizes are not errors: the height is floored to one row
/// and a zero width renders an image with no pixels.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    #[error("Aspect ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f64),

    #[error("Samples per pixel must be at least 1")]
    NoSamples,

    #[error("Camera position and target coincide at {0}")]
    DegenerateView(Point3),

    #[error("Up vector {0} is parallel to the view direction")]
    DegenerateUp(Vec3),
}

/// Errors that can occur during a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid camera: {0}")]
    Camera(#[from] CameraError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
