//! Error types for the recognizer

use thiserror::Error;

/// Errors that can occur on the AI analysis path
///
/// These never escape [`crate::ModuleRecognizer::recognize`]; they exist to
/// name the reason the rule fallback was taken.
#[derive(Error, Debug)]
pub enum RecognizerError {
    /// Backend call failed
    #[error("LLM error: {0}")]
    Llm(String),

    /// Reply was not the expected JSON shape
    #[error("Invalid analysis format: {0}")]
    InvalidFormat(String),

    /// Reply parsed but contained no usable modules
    #[error("Analysis returned no modules")]
    EmptyResult,
}
