pub mod blob_detector;
pub mod cell;
pub mod error;
pub mod grid_loader;
pub mod report;
pub mod smart_blob;
pub mod utils;
