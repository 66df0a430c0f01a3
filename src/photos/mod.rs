//! Photo filesystem module
//!
//! This module handles:
//! - Listing image files from the chosen folder (listing.rs)
//! - Generating and caching thumbnails to disk (thumbnail.rs)
pub mod listing;
pub mod thumbnail;
