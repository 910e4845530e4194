//! Error types for Sightline operations.
//!
//! This module defines the main error type [`SightlineError`]. Only conditions
//! outside file-level granularity are errors; a single unreadable file or a
//! folder with nothing visible in it is reported as a
//! [`Diagnostic`](crate::Diagnostic) instead.
//!
//! # Example
//!
//! ```rust
//! use sightline_core::{Sightline, SightlineError};
//!
//! match Sightline::new().extract_root("/does/not/exist") {
//!     Err(SightlineError::RootNotFound(path)) => println!("no root at {}", path.display()),
//!     Err(e) => println!("Error: {}", e),
//!     Ok(extraction) => print!("{}", extraction.document),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for visible-text extraction runs.
#[derive(Error, Debug)]
pub enum SightlineError {
    /// The input root does not exist.
    ///
    /// Fatal: nothing is assembled and no output should be written.
    #[error("Root path does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    /// The input root exists but is not a directory.
    #[error("Root path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A source file could not be read.
    ///
    /// Returned by [`read_source`](crate::read_source); a run converts it into
    /// a warning diagnostic and carries on with the next file.
    #[error("Failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory listing or other I/O failures outside a single source file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization errors.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for SightlineError.
pub type Result<T> = std::result::Result<T, SightlineError>;
