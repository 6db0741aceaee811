// THEORY:
// The `Cell` module is the most fundamental unit of the blob analyzer. A cell is
// one character position of the input grid together with the label the analysis
// has assigned to it so far.
//
// Key architectural principles:
// 1.  **Three-State Label**: A cell is either background (never part of a blob),
//     undiscovered foreground (loaded but not yet reached by the labeling scan),
//     or a member of a numbered blob. The label is an enum rather than a signed
//     integer so the "background" and "undiscovered" states can never be mistaken
//     for a real blob ID.
// 2.  **Dumb Data Container**: Like `Pixel` in a frame, a `Cell` knows nothing
//     about its neighbours. Adjacency and connectivity are the business of the
//     `BlobDetector`.
// 3.  **Fixed Position**: A cell's position is set at load time and never changes.
//     Only its label is mutated, and only by the labeling pass.

/// A zero-based grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: usize,
    pub column: usize,
}

impl Point {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// The labeling state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellLabel {
    /// Not a marker character. Stays this way for the whole run.
    Background,
    /// A marker character that no labeling pass has reached yet.
    Undiscovered,
    /// Member of the blob with this 1-based ID.
    Blob(u32),
}

impl CellLabel {
    pub fn is_foreground(&self) -> bool {
        !matches!(self, CellLabel::Background)
    }

    /// The blob ID, if one has been assigned.
    pub fn blob_id(&self) -> Option<u32> {
        match self {
            CellLabel::Blob(id) => Some(*id),
            _ => None,
        }
    }
}

/// One position of the grid plus its current label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub position: Point,
    pub label: CellLabel,
}

impl Cell {
    pub fn new(position: Point, label: CellLabel) -> Self {
        Self { position, label }
    }
}
