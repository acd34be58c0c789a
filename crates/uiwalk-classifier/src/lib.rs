//! uiwalk Problem Classifier
//!
//! Assigns reported UI-review problems to the fixed five-label taxonomy.
//!
//! # Architecture
//!
//! ```text
//! problem text ─ ProblemClassifier ─┬─ AI prompt (manual embedded) → repair → defaults
//!                                   └─ keyword rules (ordered table, first match wins)
//! ```
//!
//! The taxonomy manual lives in [`taxonomy`] as a single constant shared by
//! the prompt and the tests, so the AI and rule paths judge against the same
//! text. Every path ends in a complete [`Classification`]; no error reaches
//! the caller.
//!
//! [`Classification`]: uiwalk_domain::Classification

#![warn(missing_docs)]

mod classifier;
mod parser;
mod prompt;
mod rule;
pub mod taxonomy;

pub use classifier::ProblemClassifier;
pub use parser::parse_classification_response;
pub use rule::classify_by_rules;
