// THEORY:
// The `pipeline` module is the top-level API of the blob analyzer. It runs the
// full stack in one synchronous call: load the grid, label every blob, and keep
// the result ready for reporting.

use crate::core_modules::blob_detector::blob_detector;
use crate::core_modules::error::Result;
use crate::core_modules::grid_loader::Grid;
use crate::core_modules::report;
use crate::core_modules::smart_blob::SmartBlob;

// Re-export key data structures for the public API.
pub use crate::core_modules::cell::{Cell, CellLabel, Point};

/// Analyzes a single grid file.
#[derive(Debug, Clone)]
pub struct BlobAnalyzer {
    input_file_name: String,
}

/// A labeled grid together with the statistics of every blob in it.
#[derive(Debug, Clone)]
pub struct Analysis {
    file_name: String,
    grid: Grid,
    blobs: Vec<SmartBlob>,
}

impl BlobAnalyzer {
    pub fn new(input_file_name: impl Into<String>) -> Self {
        Self {
            input_file_name: input_file_name.into(),
        }
    }

    /// Loads and labels the input file. Fails before any labeling if the file
    /// cannot be opened or is malformed.
    pub fn process_file(&self) -> Result<Analysis> {
        let grid = Grid::load(&self.input_file_name)?;
        Ok(Self::analyze(self.input_file_name.clone(), grid))
    }

    /// Labels an already loaded grid.
    pub fn analyze(file_name: impl Into<String>, mut grid: Grid) -> Analysis {
        let blobs = blob_detector::find_blobs(&mut grid);
        Analysis {
            file_name: file_name.into(),
            grid,
            blobs,
        }
    }
}

impl Analysis {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Blob statistics in increasing ID order.
    pub fn blobs(&self) -> &[SmartBlob] {
        &self.blobs
    }

    pub fn labeled_image(&self) -> String {
        report::render_labeled_image(&self.file_name, &self.grid)
    }

    pub fn statistics(&self) -> String {
        report::render_statistics(&self.blobs)
    }

    /// Both reports, labeled image first.
    pub fn render(&self) -> String {
        let mut out = self.labeled_image();
        out.push_str(&self.statistics());
        out
    }
}
