// THEORY:
// The `BlobDetector` is the engine of the analysis. It performs connected-component
// labeling over a loaded `Grid`: every foreground cell ends up carrying the ID of
// the one blob it belongs to, and two cells share an ID exactly when a path of
// foreground cells joins them through up/down/left/right steps.
//
// Algorithm:
// 1.  **Row-Major Seeding**: Cells are scanned in row-major order. The first
//     `Undiscovered` cell met opens a new blob with the next ID (starting at 1).
//     IDs are therefore deterministic: they follow the order in which each blob's
//     top-left-most cell appears in the scan.
// 2.  **Iterative Flood Fill**: From the seed, the blob is grown with an explicit
//     work stack instead of recursion, so long serpentine blobs cannot exhaust the
//     call stack. A cell is labeled the moment it is pushed, which guarantees it is
//     never pushed twice. Neighbours are visited down, up, right, left; a neighbour
//     outside the grid, on the background, or already labeled is skipped.
// 3.  **Single-Pass Statistics**: Every labeled cell is folded into its
//     `SmartBlob` right away. No second scan of the grid is needed to produce
//     pixel counts or centers of mass.
// 4.  **Owned Mutation**: The detector borrows the grid mutably for the duration of
//     the pass and only ever rewrites `Undiscovered` labels. Background cells are
//     never touched.

use crate::core_modules::cell::{CellLabel, Point};
use crate::core_modules::grid_loader::Grid;
use crate::core_modules::smart_blob::SmartBlob;

pub mod blob_detector {
    use super::*;

    /// Neighbour offsets as (row delta, column delta): down, up, right, left.
    const NEIGHBOURS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

    /// Labels every blob in `grid` and returns their statistics in ID order.
    pub fn find_blobs(grid: &mut Grid) -> Vec<SmartBlob> {
        let mut blobs: Vec<SmartBlob> = Vec::new();

        for row in 0..grid.rows() {
            for column in 0..grid.columns() {
                if grid.label_at(row, column) != Some(CellLabel::Undiscovered) {
                    continue;
                }

                let id = blobs.len() as u32 + 1;
                let blob = flood_fill(grid, Point::new(row, column), id);
                log::debug!(
                    "Blob {} seeded at ({}, {}) covers {} cells",
                    blob.id,
                    row,
                    column,
                    blob.pixel_count
                );
                blobs.push(blob);
            }
        }

        log::info!("Found {} blobs", blobs.len());
        blobs
    }

    /// Grows one blob from `seed`, labeling each reached cell with `id`.
    fn flood_fill(grid: &mut Grid, seed: Point, id: u32) -> SmartBlob {
        let mut blob = SmartBlob::new(id, seed);
        let mut stack: Vec<Point> = vec![seed];
        grid.set_label(seed, CellLabel::Blob(id));

        while let Some(current) = stack.pop() {
            blob.add(current);

            for (dr, dc) in NEIGHBOURS {
                let Some(next) = step(grid, current, dr, dc) else {
                    continue;
                };
                if grid.label_at(next.row, next.column) == Some(CellLabel::Undiscovered) {
                    grid.set_label(next, CellLabel::Blob(id));
                    stack.push(next);
                }
            }
        }

        blob
    }

    /// The neighbour of `point` in the given direction, if it lies inside the grid.
    fn step(grid: &Grid, point: Point, dr: isize, dc: isize) -> Option<Point> {
        let row = point.row.checked_add_signed(dr)?;
        let column = point.column.checked_add_signed(dc)?;
        (row < grid.rows() && column < grid.columns()).then(|| Point::new(row, column))
    }
}
