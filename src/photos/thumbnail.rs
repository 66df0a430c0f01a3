//! Thumbnail generation and disk cache
//!
//! Grid thumbnails are decoded and downscaled once, then reused from
//! the cache directory on every later launch. Decoding is CPU-bound,
//! so the work runs on a blocking thread.
use image::imageops::FilterType;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Longest edge of generated thumbnails
const THUMBNAIL_SIZE: u32 = 512;

/// Get the thumbnail cache directory
/// Returns ~/.cache/photo-wall/thumbnails on Linux
pub fn cache_dir() -> PathBuf {
    let mut path = dirs::cache_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    path.push("photo-wall");
    path.push("thumbnails");
    path
}

/// Load the cached thumbnail for a photo, generating it on first use
pub async fn load_or_generate(source: PathBuf, cache_dir: PathBuf) -> Result<PathBuf, String> {
    tokio::task::spawn_blocking(move || load_or_generate_blocking(&source, &cache_dir))
        .await
        .map_err(|e| format!("task join error: {}", e))?
}

/// Blocking implementation of thumbnail lookup/generation
fn load_or_generate_blocking(source: &Path, cache_dir: &Path) -> Result<PathBuf, String> {
    let thumbnail_path = cache_dir.join(format!("{:016x}.jpg", cache_key(source)));

    if thumbnail_path.exists() {
        return Ok(thumbnail_path);
    }

    fs::create_dir_all(cache_dir)
        .map_err(|e| format!("failed to create thumbnail cache directory: {}", e))?;

    let img = image::open(source)
        .map_err(|e| format!("failed to decode {}: {}", source.display(), e))?;

    // Keep aspect ratio; JPEG output cannot carry an alpha channel
    let thumbnail = img.resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3);
    thumbnail
        .into_rgb8()
        .save(&thumbnail_path)
        .map_err(|e| format!("failed to save thumbnail: {}", e))?;

    Ok(thumbnail_path)
}

/// Cache key derived from the full source path, so photos with the same
/// filename in different subfolders do not collide
fn cache_key(source: &Path) -> u64 {
    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    hasher.finish()
}
