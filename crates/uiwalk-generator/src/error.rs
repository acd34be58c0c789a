//! Error types for case generation

use thiserror::Error;

/// Errors that can occur on the AI generation path
///
/// These never escape the coordinator; they name the reason the template
/// fallback was taken for a module.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Backend call failed
    #[error("LLM error: {0}")]
    Llm(String),

    /// Reply was not the expected JSON shape
    #[error("Invalid case format: {0}")]
    InvalidFormat(String),

    /// Reply parsed but no case survived the required-field check
    #[error("No valid cases in reply")]
    EmptyResult,
}
