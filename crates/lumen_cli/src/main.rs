use anyhow::{Context, Result};
use lumen_renderer::{Camera, Progress, Silent};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;
use structopt::StructOpt;

mod options;
mod progress_bar;
mod scenes;

use options::{load_config, Options};
use progress_bar::ScanlineProgressBar;

fn main() -> Result<()> {
    let options = Options::from_args();

    // RUST_LOG wins over the default level
    let default_level = if options.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    log::info!("Starting Lumen");

    let start = Instant::now();
    let (world, preset) = scenes::build(options.scene, options.scene_seed());
    log::info!("Scene {:?} built in {:?}", options.scene, start.elapsed());

    let mut config = match &options.config {
        Some(path) => load_config(path, preset)?,
        None => preset,
    };
    options.apply(&mut config);

    let mut camera = Camera::from_config(config);
    let mut progress: Box<dyn Progress> = if options.quiet {
        Box::new(Silent)
    } else {
        Box::new(ScanlineProgressBar::new()?)
    };

    let out: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(out);

    camera
        .render_with(&world, &mut out, progress.as_mut(), options.schedule())
        .context("Render failed")?;

    if let Some(path) = &options.output {
        log::info!("Saved to {}", path.display());
    }

    Ok(())
}
