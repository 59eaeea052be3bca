//! Error handling for treeviz
//!
//! A single error type covers the whole run. Permission failures while
//! listing a directory never reach this enum: the walker absorbs them
//! into an `AccessDenied` node instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for treeviz operations
#[derive(Error, Debug)]
pub enum TreeVizError {
    /// The target path handed to the CLI does not exist
    #[error("The directory '{}' does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Listing or classifying a directory entry failed for a reason
    /// other than insufficient permission
    #[error("failed to read '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output write errors (stdout, the JSON file)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The Graphviz collaborator failed to produce the image
    #[error("graph rendering failed: {0}")]
    GraphRender(String),
}

/// Specialized Result type for treeviz operations
pub type Result<T> = std::result::Result<T, TreeVizError>;
