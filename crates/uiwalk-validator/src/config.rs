//! Configuration for the module validator

use serde::{Deserialize, Serialize};

/// Configuration for the module validator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Maximum number of unique modules kept after validation
    pub max_modules: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self { max_modules: 50 }
    }
}
