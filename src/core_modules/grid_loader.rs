// THEORY:
// The `GridLoader` is the entry point of the analysis. It turns a plain text file
// into the fixed-size, row-major `Grid` of `Cell`s that the `BlobDetector` labels.
//
// Input format:
//   line 1:        "<rows> <columns>"
//   next `rows`:   at least `columns` characters each; 'x' is foreground,
//                  anything else (space included) is background.
//
// Key architectural principles:
// 1.  **Line-Aligned Rows**: Each grid row is read from its own line, one cell
//     per byte. Bytes beyond `columns` are ignored, so row boundaries in the file
//     always match row boundaries in the grid. A trailing '\r' is part of the
//     line terminator. Rows need not be valid UTF-8.
// 2.  **Fail Fast**: A missing or non-numeric header, a zero or overflowing
//     dimension, a row that is too short or a file with too few rows is rejected
//     with a descriptive `BlobError` before any labeling happens. No partial grid
//     ever escapes, and nothing is allocated on the header's word alone.
// 3.  **Scoped Source**: `Grid::load` owns the file handle only for the duration of
//     the call. It is dropped on every return path.
// 4.  **Immutable Shape**: `rows` and `columns` are fixed at load time. Afterwards
//     only cell labels change, and only through the crate-private `set_label`.

use crate::core_modules::cell::{Cell, CellLabel, Point};
use crate::core_modules::error::{BlobError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The character that marks a foreground cell.
pub const FOREGROUND_MARKER: char = 'x';

/// Upper bound on cells reserved before the rows are read.
const MAX_PREALLOCATED_CELLS: usize = 1 << 16;

/// A fixed-size, row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Opens `path` and loads a grid from it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BlobError::OpenFailure {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading grid from {}", path.display());
        Self::from_reader(BufReader::new(file))
    }

    /// Parses a grid from any buffered source. Rows are read as raw bytes, so
    /// any byte other than the marker is background, valid UTF-8 or not.
    pub fn from_reader(mut reader: impl BufRead) -> Result<Self> {
        let mut line = Vec::new();

        let header = loop {
            if !read_line(&mut reader, &mut line)? {
                return Err(BlobError::MissingHeader);
            }
            if !line.iter().all(u8::is_ascii_whitespace) {
                break String::from_utf8_lossy(&line).into_owned();
            }
        };
        let (rows, columns) = parse_header(&header)?;
        let cell_count = rows
            .checked_mul(columns)
            .ok_or(BlobError::OversizedGrid { rows, columns })?;
        log::info!("Grid dimensions: {rows} rows x {columns} columns");

        // The header is untrusted until the rows have actually been read.
        let mut cells = Vec::with_capacity(cell_count.min(MAX_PREALLOCATED_CELLS));
        for row in 0..rows {
            if !read_line(&mut reader, &mut line)? {
                return Err(BlobError::TruncatedInput {
                    expected: rows,
                    found: row,
                });
            }
            if line.len() < columns {
                return Err(BlobError::ShortRow {
                    row,
                    expected: columns,
                    found: line.len(),
                });
            }

            for (column, &marker) in line[..columns].iter().enumerate() {
                let label = if marker == FOREGROUND_MARKER as u8 {
                    CellLabel::Undiscovered
                } else {
                    CellLabel::Background
                };
                cells.push(Cell::new(Point::new(row, column), label));
            }
        }

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The label at `(row, column)`, or `None` outside the grid.
    pub fn label_at(&self, row: usize, column: usize) -> Option<CellLabel> {
        self.index_of(row, column).map(|index| self.cells[index].label)
    }

    /// Number of foreground cells, labeled or not.
    pub fn foreground_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.label.is_foreground())
            .count()
    }

    pub(crate) fn set_label(&mut self, point: Point, label: CellLabel) {
        if let Some(index) = self.index_of(point.row, point.column) {
            self.cells[index].label = label;
        }
    }

    fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| row * self.columns + column)
    }
}

/// Reads one line into `buf` without its `\n` or `\r\n` terminator.
/// Returns `false` at end of input.
fn read_line(reader: &mut impl BufRead, buf: &mut Vec<u8>) -> Result<bool> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(false);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }
    Ok(true)
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let invalid = || BlobError::InvalidHeader {
        line: line.trim().to_string(),
    };
    let mut tokens = line.split_whitespace();
    let rows = tokens
        .next()
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or_else(invalid)?;
    let columns = tokens
        .next()
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or_else(invalid)?;

    if rows == 0 || columns == 0 {
        return Err(BlobError::ZeroDimension { rows, columns });
    }
    Ok((rows, columns))
}
