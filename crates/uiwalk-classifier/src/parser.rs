//! Classification response parsing

use serde_json::Value;
use tracing::warn;
use uiwalk_domain::{Category, Classification};
use uiwalk_llm::repair::{repair_parse, strip_code_fences};

/// Default reason recorded when the reply carries no usable reason
pub const DEFAULT_REASON: &str = "分类原因未提供";

/// Parse a classification reply, guaranteeing a complete outcome
///
/// Code fences are stripped before parsing. Absent or unusable fields are
/// filled with documented defaults rather than failing; even a completely
/// unparseable reply yields the default category.
pub fn parse_classification_response(response: &str) -> Classification {
    let parsed: Value = match repair_parse(strip_code_fences(response)) {
        Ok(v) => v,
        Err(e) => {
            warn!("classification reply unparseable, using defaults: {}", e);
            return Classification {
                category: Category::default(),
                reason: DEFAULT_REASON.to_string(),
                reference: String::new(),
            };
        }
    };

    let category = parsed
        .get("category")
        .and_then(Value::as_str)
        .and_then(Category::parse)
        .unwrap_or_default();

    let reason = parsed
        .get("reason")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_REASON)
        .to_string();

    let reference = parsed
        .get("reference")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("")
        .to_string();

    Classification { category, reason, reference }
}
