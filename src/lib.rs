// THEORY:
// This file is the main entry point for the `blob_vision` library crate.
// It exposes the `BlobAnalyzer` pipeline and its `Analysis` result as the
// high-level interface, while the building blocks (grid loading, labeling,
// statistics, reporting) live under `core_modules` for callers that want to
// drive the stages themselves.

pub mod core_modules;
pub mod pipeline;

pub use core_modules::error::{BlobError, Result};
pub use pipeline::{Analysis, BlobAnalyzer};
