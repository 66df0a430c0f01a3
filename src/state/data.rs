//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the filesystem layer and the UI layer.
use std::path::PathBuf;

/// Represents a single photo in the gallery
#[derive(Debug, Clone, PartialEq)]
pub struct Photo {
    /// Filename only (e.g., "IMG_2041.jpg"); doubles as the photo's identifier
    pub filename: String,
    /// Full path to the image file
    pub path: PathBuf,
}
