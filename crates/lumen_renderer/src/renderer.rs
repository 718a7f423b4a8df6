//! Core ray tracing renderer.
//!
//! Implements Monte Carlo ray tracing with:
//! - Depth-bounded bounces through scene materials
//! - Anti-aliasing via multi-sampling
//! - Sequential or per-scanline parallel scheduling with identical output

use crate::error::RenderResult;
use crate::hittable::{HitRecord, Hittable};
use crate::ppm::{write_color, write_header};
use crate::progress::{Progress, ScanlineBar};
use crate::sampling::pixel_rng;
use crate::Camera;
use lumen_math::{Color, Interval, Ray};
use rand::RngCore;
use rayon::prelude::*;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

/// Closest hit distance considered; avoids re-hitting the surface a ray
/// just left ("shadow acne").
const T_MIN: f64 = 0.001;

/// How pixels of a render are scheduled onto threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    /// One thread, pixels computed and written in order.
    #[default]
    Sequential,
    /// Pixels of each scanline spread over a work-stealing pool; the row is
    /// written once all of its pixels are done. `threads == 0` uses one
    /// worker per core.
    Parallel { threads: usize },
}

/// Compute the color seen by a ray.
///
/// Follows the ray through at most `depth` scatter events, multiplying in
/// each surface's attenuation. Running out of depth or being absorbed yields
/// black; escaping the scene picks up the sky.
pub fn ray_color(ray: &Ray, depth: u32, world: &dyn Hittable, rng: &mut dyn RngCore) -> Color {
    let mut ray = *ray;
    let mut attenuation = Color::ONE;

    for _ in 0..depth {
        let mut rec = HitRecord::default();

        if !world.hit(&ray, Interval::new(T_MIN, f64::INFINITY), &mut rec) {
            return attenuation * sky_gradient(&ray);
        }

        match rec.material.scatter(&ray, &rec, rng) {
            Some(result) => {
                attenuation *= result.attenuation;
                ray = result.scattered;
            }
            None => return Color::ZERO,
        }
    }

    Color::ZERO
}

/// Background for rays that leave the scene: white at the bottom blending
/// to sky blue at the top.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction().normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - a) * white + a * blue
}

/// Sum `samples_per_pixel` samples for pixel (i, j).
///
/// The result is not averaged; scale it by the frame's `samples_scale`.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.config.samples_per_pixel {
        let ray = camera.get_ray(i, j, rng);
        pixel_color += ray_color(&ray, camera.config.max_depth, world, rng);
    }

    pixel_color
}

impl Camera {
    /// Render sequentially to stdout, with progress on stderr.
    pub fn render(&mut self, world: &dyn Hittable) -> RenderResult<()> {
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        self.render_to(world, &mut out)
    }

    /// Render sequentially to `out`, with progress on stderr.
    pub fn render_to<W: Write + ?Sized>(
        &mut self,
        world: &dyn Hittable,
        out: &mut W,
    ) -> RenderResult<()> {
        let mut progress = ScanlineBar::new(io::stderr());
        self.render_with(world, out, &mut progress, Schedule::Sequential)
    }

    /// Render to `out` on `threads` workers, with progress on stderr.
    pub fn render_parallel<W: Write + ?Sized>(
        &mut self,
        world: &dyn Hittable,
        out: &mut W,
        threads: usize,
    ) -> RenderResult<()> {
        let mut progress = ScanlineBar::new(io::stderr());
        self.render_with(world, out, &mut progress, Schedule::Parallel { threads })
    }

    /// Render `world` as a `P3` image into `out`.
    ///
    /// Re-derives the frame from the current configuration first. Pixels
    /// are written top to bottom, left to right, whatever the schedule.
    pub fn render_with<W: Write + ?Sized>(
        &mut self,
        world: &dyn Hittable,
        out: &mut W,
        progress: &mut dyn Progress,
        schedule: Schedule,
    ) -> RenderResult<()> {
        self.initialize()?;
        let camera: &Camera = self;

        let width = camera.config.image_width;
        let height = camera.image_height();
        let seed = camera.config.seed.unwrap_or_else(rand::random);
        let scale = camera.frame().samples_scale;
        let gamma = camera.config.gamma_correct;

        log::info!(
            "Rendering {}x{} @ {} spp, max depth {}, {:?}, seed {}",
            width,
            height,
            camera.config.samples_per_pixel,
            camera.config.max_depth,
            schedule,
            seed
        );
        let start = Instant::now();

        let sample = |i: u32, j: u32| {
            let mut rng = pixel_rng(seed, i, j);
            render_pixel(camera, world, i, j, &mut rng)
        };

        write_header(out, width, height)?;

        match schedule {
            Schedule::Sequential => {
                for j in 0..height {
                    progress.scanline(j, height);
                    for i in 0..width {
                        write_color(out, sample(i, j), scale, gamma)?;
                    }
                }
            }
            Schedule::Parallel { threads } => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()?;
                log::debug!("Render pool has {} workers", pool.current_num_threads());

                for j in 0..height {
                    progress.scanline(j, height);
                    // collect() keeps column order however the pixels were stolen
                    let row: Vec<Color> = pool.install(|| {
                        (0..width)
                            .into_par_iter()
                            .map(|i| sample(i, j))
                            .collect()
                    });
                    for pixel_color in row {
                        write_color(out, pixel_color, scale, gamma)?;
                    }
                }
            }
        }

        out.flush()?;
        progress.finish(height);
        log::info!("Rendered in {:?}", start.elapsed());

        Ok(())
    }
}
