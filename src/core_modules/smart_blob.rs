// THEORY:
// A `SmartBlob` is the summary of one connected component: its ID, how many cells
// it covers, where its center of mass lies, and the box that encloses it.
//
// Key architectural principles:
// 1.  **Accumulator, Not Scanner**: The blob is built up cell by cell while the
//     `BlobDetector` floods it. Pixel count and coordinate sums are kept as exact
//     integers; the center of mass is derived by division only when asked for.
// 2.  **Stateless Data Container**: A `SmartBlob` does not reference the grid it
//     came from. It is a snapshot of one analysis run.

use crate::core_modules::cell::Point;

/// Summary statistics of a single 4-connected blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartBlob {
    /// 1-based, assigned in row-major discovery order.
    pub id: u32,
    /// The first cell of the blob reached by the row-major scan.
    pub seed: Point,
    /// Top-left and bottom-right corners, inclusive.
    pub bounding_box: (Point, Point),
    pub pixel_count: usize,
    row_sum: u64,
    column_sum: u64,
}

impl SmartBlob {
    pub(crate) fn new(id: u32, seed: Point) -> Self {
        Self {
            id,
            seed,
            bounding_box: (seed, seed),
            pixel_count: 0,
            row_sum: 0,
            column_sum: 0,
        }
    }

    /// Adds one cell to the blob's running totals.
    pub(crate) fn add(&mut self, point: Point) {
        let (top_left, bottom_right) = &mut self.bounding_box;
        top_left.row = top_left.row.min(point.row);
        top_left.column = top_left.column.min(point.column);
        bottom_right.row = bottom_right.row.max(point.row);
        bottom_right.column = bottom_right.column.max(point.column);

        self.pixel_count += 1;
        self.row_sum += point.row as u64;
        self.column_sum += point.column as u64;
    }

    /// Mean row index of the blob's cells.
    pub fn center_of_mass_row(&self) -> f64 {
        self.row_sum as f64 / self.pixel_count as f64
    }

    /// Mean column index of the blob's cells.
    pub fn center_of_mass_column(&self) -> f64 {
        self.column_sum as f64 / self.pixel_count as f64
    }

    /// `(row, column)` center of mass.
    pub fn center_of_mass(&self) -> (f64, f64) {
        (self.center_of_mass_row(), self.center_of_mass_column())
    }
}
