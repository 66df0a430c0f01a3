//! State management module
//!
//! This module handles all application state, including:
//! - The progressive-reveal gallery pager (gallery.rs)
//! - Shared data structures (data.rs)
//! - Persisted user settings (settings.rs)
pub mod data;
pub mod gallery;
pub mod settings;
