//! Camera for ray generation.
//!
//! A [`Camera`] pairs a user-editable [`CameraConfig`] with a [`Frame`] of
//! geometry derived from it by [`Camera::initialize`].

use crate::error::CameraError;
use crate::sampling::{random_in_unit_disk, sample_square};
use lumen_math::{Point3, Ray, Vec3};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// User-facing camera settings.
///
/// Every field has a default, so a partial JSON document deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Ratio of image width over height
    pub aspect_ratio: f64,
    /// Rendered image width in pixels
    pub image_width: u32,
    /// Random samples accumulated per pixel
    pub samples_per_pixel: u32,
    /// Maximum number of ray bounces into the scene
    pub max_depth: u32,

    /// Vertical field of view in degrees
    pub vfov: f64,
    /// Point the camera is looking from
    pub lookfrom: Point3,
    /// Point the camera is looking at
    pub lookat: Point3,
    /// Camera-relative "up" direction
    pub vup: Vec3,

    /// Variation angle of rays through each pixel, in degrees
    pub defocus_angle: f64,
    /// Distance from camera to plane of perfect focus
    pub focus_dist: f64,

    /// Jitter samples within each pixel; when off every sample goes through
    /// the pixel center
    pub antialias: bool,
    /// Apply gamma 2 when writing colors
    pub gamma_correct: bool,
    /// Base seed for sampling; `None` picks a fresh seed per render
    pub seed: Option<u64>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 1.0,
            image_width: 100,
            samples_per_pixel: 10,
            max_depth: 10,
            vfov: 90.0,
            lookfrom: Point3::new(0.0, 0.0, -1.0),
            lookat: Point3::ZERO,
            vup: Vec3::Y,
            defocus_angle: 0.0,
            focus_dist: 10.0,
            antialias: true,
            gamma_correct: true,
            seed: None,
        }
    }
}

/// Geometry derived from a [`CameraConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    pub image_height: u32,
    /// Camera center
    pub center: Point3,
    /// Location of pixel (0, 0), the top-left pixel center
    pub pixel00_loc: Point3,
    /// Offset to the pixel to the right
    pub pixel_delta_u: Vec3,
    /// Offset to the pixel below
    pub pixel_delta_v: Vec3,
    /// Camera basis: right, up, and backwards (from target to eye)
    pub u: Vec3,
    pub v: Vec3,
    pub w: Vec3,
    /// Defocus disk horizontal radius
    pub defocus_disk_u: Vec3,
    /// Defocus disk vertical radius
    pub defocus_disk_v: Vec3,
    /// Color scale factor for a sum of pixel samples
    pub samples_scale: f64,
    jitter: bool,
    defocus: bool,
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone, Default)]
pub struct Camera {
    pub config: CameraConfig,
    frame: Frame,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a camera from existing settings.
    pub fn from_config(config: CameraConfig) -> Self {
        Self {
            config,
            frame: Frame::default(),
        }
    }

    /// Set image width and aspect ratio; the height follows from both.
    pub fn with_resolution(mut self, image_width: u32, aspect_ratio: f64) -> Self {
        self.config.image_width = image_width;
        self.config.aspect_ratio = aspect_ratio;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_depth: u32) -> Self {
        self.config.samples_per_pixel = samples_per_pixel;
        self.config.max_depth = max_depth;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, lookfrom: Point3, lookat: Point3, vup: Vec3) -> Self {
        self.config.lookfrom = lookfrom;
        self.config.lookat = lookat;
        self.config.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f64, defocus_angle: f64, focus_dist: f64) -> Self {
        self.config.vfov = vfov;
        self.config.defocus_angle = defocus_angle;
        self.config.focus_dist = focus_dist;
        self
    }

    /// Fix the sampling seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Derive the frame from the current configuration.
    ///
    /// Must be called before generating rays and again after any change to
    /// `config`. The render entry points call it themselves.
    pub fn initialize(&mut self) -> Result<(), CameraError> {
        let config = &self.config;

        if !(config.aspect_ratio.is_finite() && config.aspect_ratio > 0.0) {
            return Err(CameraError::InvalidAspectRatio(config.aspect_ratio));
        }
        if config.samples_per_pixel == 0 {
            return Err(CameraError::NoSamples);
        }

        let image_height = image_height(config.image_width, config.aspect_ratio);
        let center = config.lookfrom;

        // Viewport dimensions
        let theta = config.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * config.focus_dist;
        let viewport_width =
            viewport_height * (f64::from(config.image_width) / f64::from(image_height));

        // Camera basis vectors
        let w = (config.lookfrom - config.lookat)
            .try_normalize()
            .ok_or(CameraError::DegenerateView(config.lookfrom))?;
        let u = config
            .vup
            .cross(w)
            .try_normalize()
            .ok_or(CameraError::DegenerateUp(config.vup))?;
        let v = w.cross(u);

        // Viewport edges; image rows run down while v points up
        let viewport_u = viewport_width * u;
        let viewport_v = viewport_height * -v;

        let pixel_delta_u = viewport_u / f64::from(config.image_width);
        let pixel_delta_v = viewport_v / f64::from(image_height);

        let viewport_upper_left =
            center - config.focus_dist * w - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_loc = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        let defocus_radius = config.focus_dist * (config.defocus_angle / 2.0).to_radians().tan();

        self.frame = Frame {
            image_height,
            center,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
            u,
            v,
            w,
            defocus_disk_u: u * defocus_radius,
            defocus_disk_v: v * defocus_radius,
            samples_scale: 1.0 / f64::from(config.samples_per_pixel),
            jitter: config.antialias,
            defocus: config.defocus_angle > 0.0,
        };

        log::debug!(
            "Camera frame: {}x{}, viewport {:.4}x{:.4}, defocus radius {:.4}",
            config.image_width,
            image_height,
            viewport_width,
            viewport_height,
            defocus_radius
        );

        Ok(())
    }

    /// Image height as of the last `initialize()`.
    pub fn image_height(&self) -> u32 {
        self.frame.image_height
    }

    /// The derived frame as of the last `initialize()`.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Generate a ray for pixel (i, j) with random sampling.
    ///
    /// The ray starts at the camera center, or on the defocus disk when a
    /// defocus angle is set, and passes through a random point of the pixel.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let frame = &self.frame;
        let offset = if frame.jitter {
            sample_square(rng)
        } else {
            Vec3::ZERO
        };

        let pixel_sample = frame.pixel00_loc
            + (f64::from(i) + offset.x) * frame.pixel_delta_u
            + (f64::from(j) + offset.y) * frame.pixel_delta_v;

        let ray_origin = if frame.defocus {
            self.defocus_disk_sample(rng)
        } else {
            frame.center
        };

        Ray::new(ray_origin, pixel_sample - ray_origin)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Point3 {
        let p = random_in_unit_disk(rng);
        self.frame.center + p.x * self.frame.defocus_disk_u + p.y * self.frame.defocus_disk_v
    }
}

/// Image height for a width and aspect ratio, never less than one row.
fn image_height(image_width: u32, aspect_ratio: f64) -> u32 {
    let height = (f64::from(image_width) / aspect_ratio) as u32;
    if height < 1 {
        log::warn!(
            "Image width {} at aspect ratio {} gives no rows; rendering one",
            image_width,
            aspect_ratio
        );
        1
    } else {
        height
    }
}
