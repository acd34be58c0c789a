//! uiwalk Domain Layer
//!
//! This crate contains the core record types and trait interfaces for uiwalk,
//! the UI-review checklist generator. It defines the fundamental concepts that
//! all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Module**: A page- or feature-level unit recognized from a requirement
//!   document; the unit that review cases are grouped by
//! - **Case**: One row of a UI-review checklist - a checkpoint, the design
//!   principle it tests, what to check, priority, and expected result
//! - **Classification**: The outcome of sorting a reported UI problem into
//!   the fixed 5-label taxonomy
//! - **Review mode**: Standard UI review vs. competitive benchmarking review
//!
//! ## Architecture
//!
//! - Record types are plain Rust enums/structs; the Chinese column vocabulary
//!   of the external spreadsheet format exists only on the export-boundary
//!   types in [`export`]
//! - Trait definitions for the chat-completion backend live in [`traits`];
//!   infrastructure implementations live in `uiwalk-llm`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case;
pub mod classification;
pub mod export;
pub mod module;
pub mod review;
pub mod traits;

// Re-exports for convenience
pub use case::{Case, Priority, VerifyStatus};
pub use classification::{Category, Classification};
pub use export::{CaseRecord, ClassificationRecord};
pub use module::{module_id, Module, ModuleType};
pub use review::{ReviewMode, SuggestedCategory};
