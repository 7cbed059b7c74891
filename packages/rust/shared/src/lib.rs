//! Shared types, error model, and configuration for Sections.
//!
//! This crate is the foundation depended on by the other Sections crates.
//! It provides:
//! - [`SectionsError`] — the unified error type
//! - [`IndexPath`] — the (group, item) position pair returned by lookups
//! - Configuration ([`AppConfig`], [`DisplayConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DisplayConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from,
};
pub use error::{Result, SectionsError};
pub use types::IndexPath;
