//! Configuration for the recognizer

use serde::{Deserialize, Serialize};

/// Configuration for the recognizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Document prefix (in characters) embedded in the analysis prompt.
    /// Bounds token cost for the backend call.
    pub doc_prefix_chars: usize,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            doc_prefix_chars: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix() {
        assert_eq!(RecognizerConfig::default().doc_prefix_chars, 3000);
    }
}
