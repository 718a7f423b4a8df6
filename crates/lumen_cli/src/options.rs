//! Command-line options and camera configuration layering.
//!
//! Settings resolve in three layers: the scene's camera preset, then an
//! optional JSON file, then individual flags.

use crate::scenes::SceneKind;
use anyhow::{bail, Context, Result};
use lumen_renderer::{CameraConfig, Schedule};
use serde_json::Value;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

/// Seed for scene layout when none is given, so scenes look the same run to run.
const DEFAULT_SCENE_SEED: u64 = 0x5eed;

#[derive(Debug, StructOpt)]
#[structopt(name = "lumen", about = "Ray trace a built-in scene into a plain PPM image")]
pub struct Options {
    /// Write the image here instead of stdout
    #[structopt(short, long, parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// JSON camera settings layered over the scene preset
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// Scene to render: spheres, cover or empty
    #[structopt(short, long, default_value = "spheres")]
    pub scene: SceneKind,

    /// Image width in pixels
    #[structopt(short, long)]
    pub width: Option<u32>,

    #[structopt(long)]
    pub aspect_ratio: Option<f64>,

    /// Samples per pixel
    #[structopt(long)]
    pub samples: Option<u32>,

    /// Maximum ray bounces
    #[structopt(long)]
    pub max_depth: Option<u32>,

    /// Vertical field of view in degrees
    #[structopt(long)]
    pub vfov: Option<f64>,

    /// Defocus blur cone angle in degrees (0 disables depth of field)
    #[structopt(long)]
    pub defocus_angle: Option<f64>,

    #[structopt(long)]
    pub focus_dist: Option<f64>,

    /// Fix sampling and scene layout for reproducible output
    #[structopt(long)]
    pub seed: Option<u64>,

    /// Render each scanline on this many threads (0 = all cores)
    #[structopt(short = "j", long)]
    pub threads: Option<usize>,

    /// Write linear colors without gamma correction
    #[structopt(long)]
    pub no_gamma: bool,

    /// Sample pixel centers only
    #[structopt(long)]
    pub no_antialias: bool,

    /// No progress output
    #[structopt(short, long)]
    pub quiet: bool,
}

impl Options {
    /// Apply flags that were given on top of `config`.
    pub fn apply(&self, config: &mut CameraConfig) {
        if let Some(width) = self.width {
            config.image_width = width;
        }
        if let Some(aspect_ratio) = self.aspect_ratio {
            config.aspect_ratio = aspect_ratio;
        }
        if let Some(samples) = self.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if let Some(vfov) = self.vfov {
            config.vfov = vfov;
        }
        if let Some(defocus_angle) = self.defocus_angle {
            config.defocus_angle = defocus_angle;
        }
        if let Some(focus_dist) = self.focus_dist {
            config.focus_dist = focus_dist;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.no_gamma {
            config.gamma_correct = false;
        }
        if self.no_antialias {
            config.antialias = false;
        }
    }

    pub fn schedule(&self) -> Schedule {
        match self.threads {
            Some(threads) => Schedule::Parallel { threads },
            None => Schedule::Sequential,
        }
    }

    pub fn scene_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SCENE_SEED)
    }
}

/// Load a JSON camera file and layer it over `base`.
pub fn load_config(path: &Path, base: CameraConfig) -> Result<CameraConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read camera config {}", path.display()))?;
    merge_config(base, &text)
        .with_context(|| format!("Invalid camera config {}", path.display()))
}

/// Overwrite the fields of `base` that appear in the JSON object `json`.
pub fn merge_config(base: CameraConfig, json: &str) -> Result<CameraConfig> {
    let overrides: Value = serde_json::from_str(json)?;
    let mut merged = serde_json::to_value(base)?;

    match (&mut merged, overrides) {
        (Value::Object(fields), Value::Object(overrides)) => fields.extend(overrides),
        (_, other) => bail!("Expected a JSON object, found {}", other),
    }

    Ok(serde_json::from_value(merged)?)
}
