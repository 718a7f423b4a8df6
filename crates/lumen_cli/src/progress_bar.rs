//! Terminal progress bar for interactive renders.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use lumen_renderer::Progress;

/// Scanline progress drawn with `indicatif` on stderr.
pub struct ScanlineProgressBar {
    bar: ProgressBar,
}

impl ScanlineProgressBar {
    pub fn new() -> Result<Self> {
        // Length is unknown until the camera derives the image height
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} scanlines (eta: {eta})",
                )?
                .progress_chars("#>-"),
        );
        Ok(Self { bar })
    }
}

impl Progress for ScanlineProgressBar {
    fn scanline(&mut self, row: u32, height: u32) {
        if row == 0 {
            self.bar.set_length(u64::from(height));
            self.bar.reset_eta();
        }
        self.bar.set_position(u64::from(row));
    }

    fn finish(&mut self, height: u32) {
        self.bar.set_position(u64::from(height));
        self.bar.finish();
    }
}
