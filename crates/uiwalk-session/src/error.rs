//! Pre-flight validation errors

use thiserror::Error;

/// Blocking conditions surfaced before any backend call is attempted
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// No document has been uploaded yet
    #[error("No document uploaded")]
    NoDocument,

    /// Uploaded document is too short to analyze
    #[error("Document too short: {0} characters (minimum 10)")]
    DocumentTooShort(usize),

    /// Recognition has not produced any modules
    #[error("No modules recognized")]
    NoModules,

    /// No module is selected for generation
    #[error("No modules selected")]
    NoSelection,

    /// A custom module duplicates an existing module name
    #[error("Module already exists: {0}")]
    DuplicateModule(String),
}
