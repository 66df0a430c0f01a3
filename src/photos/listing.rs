//! Photo folder listing
//!
//! Walks the chosen folder once per scan and returns every image file
//! in it as the gallery's photo set. The walk runs on a blocking
//! thread; the UI thread only ever sees the finished list.
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::state::data::Photo;

/// Image extensions the gallery picks up (compared case-insensitively)
const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Errors from listing the photo folder.
///
/// Carries plain strings instead of source errors so it stays Clone
/// and can ride inside an application message.
#[derive(Debug, Clone, Error)]
pub enum ListingError {
    #[error("photo folder does not exist: {0}")]
    MissingFolder(String),
    #[error("failed to read photo folder: {0}")]
    Read(String),
}

/// List every image file under the given folder
pub async fn list_photos(folder: PathBuf) -> Result<Vec<Photo>, ListingError> {
    tokio::task::spawn_blocking(move || list_photos_blocking(&folder))
        .await
        .map_err(|e| ListingError::Read(format!("task join error: {}", e)))?
}

/// Blocking implementation of the folder walk.
///
/// The result is sorted by filename so the photo set is deterministic;
/// the gallery applies its own one-time shuffle on top.
fn list_photos_blocking(folder: &Path) -> Result<Vec<Photo>, ListingError> {
    if !folder.is_dir() {
        return Err(ListingError::MissingFolder(folder.display().to_string()));
    }

    let mut photos = Vec::new();

    for entry in WalkDir::new(folder)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if !is_image_file(path) {
            continue;
        }

        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        photos.push(Photo {
            filename,
            path: path.to_path_buf(),
        });
    }

    photos.sort_by(|a, b| a.filename.cmp(&b.filename));

    println!("🖼️  Found {} photos in {}", photos.len(), folder.display());

    Ok(photos)
}

/// Check whether a path looks like a supported image file
pub fn is_image_file(path: &Path) -> bool {
    match path.extension() {
        Some(extension) => {
            let ext = extension.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}
