//! Error taxonomy for worklist generation
//!
//! Only run-fatal conditions appear here. Per-part parse failures and
//! malformed quantity input are absorbed at the point of use with a
//! default value and never become errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorklistError {
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to list subfolders of {}: {source}", path.display())]
    Classify {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to scan cabinet folder {}: {source}", path.display())]
    CabinetScan {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create output folder {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write worklist {}: {source}", path.display())]
    WriteDocument {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to assemble worklist XML: {message}")]
    Xml { message: String },

    #[error("prompt failed: {message}")]
    Prompt { message: String },
}
