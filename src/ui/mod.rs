//! UI building blocks
//!
//! This module handles:
//! - The thumbnail grid and its load-more sentinel (grid.rs)
//! - The fullscreen modal viewer (modal.rs)
//! - Sentinel visibility geometry (viewport.rs)
pub mod grid;
pub mod modal;
pub mod viewport;
