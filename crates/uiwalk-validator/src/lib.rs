//! uiwalk Module Validator
//!
//! Normalizes a raw module candidate list (from rule recognition or from the
//! AI adapter) before it reaches the user's selection step:
//!
//! 1. Deduplicate by exact name - first occurrence wins
//! 2. Cap cardinality to protect downstream generation cost
//! 3. Back-fill missing descriptions as `"{type} - {name}"`
//!
//! The stage is idempotent: validating its own output is a no-op.

#![warn(missing_docs)]

mod config;
mod validator;

pub use config::ValidatorConfig;
pub use validator::ModuleValidator;
