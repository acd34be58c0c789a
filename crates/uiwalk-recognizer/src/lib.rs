//! uiwalk Module Recognizer
//!
//! Turns a requirement document into a validated list of page-level module
//! candidates.
//!
//! # Architecture
//!
//! ```text
//! Document text ─┬─ AI analysis (when a backend is configured)
//!                └─ rule-based heading extraction (always the fallback)
//!                      │
//!                Module Validator (dedup, cap, back-fill)
//! ```
//!
//! The AI path is best-effort: any failure - no client, network error,
//! malformed reply, empty module list - degrades to the deterministic rule
//! strategies, never to an error.
//!
//! # Example
//!
//! ```
//! use uiwalk_recognizer::{ModuleRecognizer, SourceFormat};
//!
//! let recognizer = ModuleRecognizer::offline();
//! let modules = recognizer.recognize("## 首页\n内容\n## 登录页\n内容", SourceFormat::Markdown);
//! assert_eq!(modules.len(), 2);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod parser;
mod prompt;
mod recognizer;
mod rules;

pub use config::RecognizerConfig;
pub use error::RecognizerError;
pub use recognizer::{ModuleRecognizer, NoProvider, OfflineRecognizer, SourceFormat};
pub use rules::infer_module_type;
