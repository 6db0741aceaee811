// THEORY:
// The `report` module renders the two human-readable outputs of an analysis run:
//
// 1.  **Labeled Image**: the grid redrawn inside a border, with row and column
//     indices (mod 10) on every side. A cell prints as the marker if it belongs to
//     any blob and as a space otherwise. Which blob it belongs to is not shown.
// 2.  **Statistics Table**: one fixed-width row per blob in ID order, with the
//     pixel count and the center of mass to two decimal places.
//
// Both renderers return a `String` so they can be checked byte for byte and
// written to any sink by the caller.

use crate::core_modules::grid_loader::{FOREGROUND_MARKER, Grid};
use crate::core_modules::smart_blob::SmartBlob;

/// Printed for cells that belong to no blob.
pub const BACKGROUND_GLYPH: char = ' ';

const TABLE_TITLE: &str = "Blob Properties:\n";
const TABLE_RULE: &str = "+------+------------+---------+------------+\n";
const TABLE_HEADER: &str = "| BLOB | NoOfPixels | CoM Row | CoM Column |\n";

/// Renders the bordered, index-annotated picture of the grid.
pub fn render_labeled_image(file_name: &str, grid: &Grid) -> String {
    let columns = grid.columns();
    let index_line: String = (0..columns).map(index_digit).collect();
    let rule = format!(" +{}+\n", "-".repeat(columns));

    let mut out = String::new();
    out.push_str(&format!(" {file_name}\n"));
    out.push_str(&format!("  {index_line}\n"));
    out.push_str(&rule);

    for (row, cells) in grid.cells().chunks(columns).enumerate() {
        let body: String = cells
            .iter()
            .map(|cell| {
                if cell.label.is_foreground() {
                    FOREGROUND_MARKER
                } else {
                    BACKGROUND_GLYPH
                }
            })
            .collect();
        let digit = index_digit(row);
        out.push_str(&format!("{digit}|{body}|{digit}\n"));
    }

    out.push_str(&rule);
    out.push_str(&format!("  {index_line}\n"));
    out.push('\n');
    out
}

/// Renders the blob statistics table, borders included even when there are no blobs.
pub fn render_statistics(blobs: &[SmartBlob]) -> String {
    let mut out = String::new();
    out.push_str(TABLE_TITLE);
    out.push_str(TABLE_RULE);
    out.push_str(TABLE_HEADER);
    out.push_str(TABLE_RULE);
    for blob in blobs {
        out.push_str(&format!(
            "| {:>4} | {:>10} | {:>7.2} | {:>10.2} |\n",
            blob.id,
            blob.pixel_count,
            blob.center_of_mass_row(),
            blob.center_of_mass_column()
        ));
    }
    out.push_str(TABLE_RULE);
    out
}

fn index_digit(index: usize) -> char {
    char::from(b'0' + (index % 10) as u8)
}
