//! Error types for Sections.
//!
//! Library crates use [`SectionsError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! A failed lookup is not an error: position lookups return `Option`.

use std::path::PathBuf;

/// Top-level error type for all Sections operations.
#[derive(Debug, thiserror::Error)]
pub enum SectionsError {
    /// Indexed access outside `[0, count)`.
    #[error("index {index} out of range for {count} groups")]
    OutOfRange { index: usize, count: usize },

    /// Range replacement with bounds outside `[0, count]` or reversed.
    #[error("range {start}..{end} out of range for {count} groups")]
    InvalidRange {
        start: usize,
        end: usize,
        count: usize,
    },

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Document parsing error.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SectionsError>;

impl SectionsError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a bounds violation (indexed access or range replace).
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. } | Self::InvalidRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = SectionsError::OutOfRange { index: 3, count: 2 };
        assert_eq!(err.to_string(), "index 3 out of range for 2 groups");

        let err = SectionsError::InvalidRange {
            start: 2,
            end: 5,
            count: 3,
        };
        assert_eq!(err.to_string(), "range 2..5 out of range for 3 groups");

        let err = SectionsError::config("missing display table");
        assert_eq!(err.to_string(), "config error: missing display table");
    }

    #[test]
    fn out_of_range_family() {
        assert!(SectionsError::OutOfRange { index: 0, count: 0 }.is_out_of_range());
        assert!(
            SectionsError::InvalidRange {
                start: 1,
                end: 0,
                count: 1
            }
            .is_out_of_range()
        );
        assert!(!SectionsError::parse("bad json").is_out_of_range());
    }
}
