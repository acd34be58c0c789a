//! uiwalk Case Generator
//!
//! Turns selected modules into one merged, ordered UI-review checklist.
//!
//! # Architecture
//!
//! ```text
//! Selected modules ─ Coordinator ─ per module ─┬─ AI prompt → reply repair → field check
//!                                              └─ template fallback (deterministic)
//!                                        merged list → sequential case numbers
//! ```
//!
//! The AI path is best-effort at every step: a missing client, a failed
//! backend call, unparseable JSON or an all-invalid case list each degrade to
//! the fixed template cases for that module only - the batch never aborts and
//! no error reaches the caller.

#![warn(missing_docs)]

mod config;
mod coordinator;
mod error;
mod generator;
mod parser;
mod prompt;
mod templates;

pub use config::GeneratorConfig;
pub use coordinator::Coordinator;
pub use error::GeneratorError;
pub use generator::CaseGenerator;
pub use parser::parse_case_response;
pub use templates::template_cases;
