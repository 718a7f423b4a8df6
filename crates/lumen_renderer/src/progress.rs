//! Render progress reporting.
//!
//! Progress is a side channel: the render loop reports from the thread that
//! coordinates scanlines, never from workers, and never into the image stream.

use std::io::Write;

/// Receives scanline progress events from a render.
pub trait Progress {
    /// Called as scanline `row` (of `height`) starts.
    fn scanline(&mut self, row: u32, height: u32);

    /// Called once after the last pixel has been written.
    fn finish(&mut self, height: u32);
}

/// Discards all progress events.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {
    fn scanline(&mut self, _row: u32, _height: u32) {}

    fn finish(&mut self, _height: u32) {}
}

/// Number of cells in the textual bar.
const BAR_CELLS: u64 = 20;

/// A one-line textual progress bar, redrawn in place with `\r`.
///
/// ```text
/// Progress: [=====               ] (12 out of 48)
/// ```
///
/// Write failures are ignored; a broken diagnostic stream must not abort
/// the render.
pub struct ScanlineBar<W: Write> {
    out: W,
}

impl<W: Write> ScanlineBar<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for ScanlineBar<W> {
    fn scanline(&mut self, row: u32, height: u32) {
        let complete = (u64::from(row) * BAR_CELLS / u64::from(height.max(1))) as usize;
        let _ = write!(
            self.out,
            "\rProgress: [{}{}] ({} out of {}) ",
            "=".repeat(complete),
            " ".repeat(BAR_CELLS as usize - complete),
            row,
            height
        );
        let _ = self.out.flush();
    }

    fn finish(&mut self, height: u32) {
        let _ = writeln!(
            self.out,
            "\rCompleted: [{}] ({} out of {}) ",
            "=".repeat(BAR_CELLS as usize),
            height,
            height
        );
        let _ = self.out.flush();
    }
}
