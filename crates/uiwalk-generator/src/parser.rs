//! Generation response parsing

use crate::error::GeneratorError;
use serde_json::Value;
use tracing::warn;
use uiwalk_domain::{Case, Priority};
use uiwalk_llm::repair::{repair_parse, strip_code_fences};

/// Parse a case-generation reply into cases for one module
///
/// The reply must be a JSON object with a `cases` array. Each entry needs
/// the five content fields non-empty and a parseable priority label;
/// incomplete entries are dropped with a warning rather than failing the
/// whole module.
pub fn parse_case_response(response: &str, module_name: &str) -> Result<Vec<Case>, GeneratorError> {
    let parsed: Value = repair_parse(strip_code_fences(response))
        .map_err(|e| GeneratorError::InvalidFormat(e.to_string()))?;

    let raw_cases = parsed
        .get("cases")
        .and_then(Value::as_array)
        .ok_or_else(|| GeneratorError::InvalidFormat("missing `cases` array".into()))?;

    let mut cases = Vec::with_capacity(raw_cases.len());
    for entry in raw_cases {
        match parse_case(entry, module_name) {
            Some(case) => cases.push(case),
            None => {
                warn!(module = module_name, "dropping incomplete case entry");
            }
        }
    }

    if cases.is_empty() {
        return Err(GeneratorError::EmptyResult);
    }

    Ok(cases)
}

fn parse_case(entry: &Value, module_name: &str) -> Option<Case> {
    let checkpoint = field(entry, "检查点")?;
    let principle = field(entry, "设计原则")?;
    let check_item = field(entry, "检查项")?;
    let priority = Priority::parse(&field(entry, "优先级")?)?;
    let expected = field(entry, "预期结果/设计标准")?;

    Some(Case::new(
        module_name,
        checkpoint,
        principle,
        check_item,
        priority,
        expected,
    ))
}

/// Fetch a required string field, single-lined and trimmed; None if absent
/// or blank
fn field(entry: &Value, key: &str) -> Option<String> {
    let raw = entry.get(key)?.as_str()?;
    let cleaned = raw
        .replace('\r', "")
        .replace('\n', " ")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
