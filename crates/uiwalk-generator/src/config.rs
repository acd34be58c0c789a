//! Configuration for the case generator

use serde::{Deserialize, Serialize};

/// Configuration for the case generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Document prefix (in characters) embedded in each generation prompt
    pub doc_prefix_chars: usize,

    /// Prefix (in characters) of the optional review-rules context text
    pub rules_prefix_chars: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            doc_prefix_chars: 1500,
            rules_prefix_chars: 5000,
        }
    }
}
