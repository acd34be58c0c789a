//! Parse the analysis reply into module candidates

use crate::error::RecognizerError;
use crate::rules::infer_module_type;
use serde_json::Value;
use tracing::warn;
use uiwalk_domain::{Module, ModuleType};

/// Parse an analysis reply of the shape `{"modules": [...], "total_modules": N}`
///
/// Entries without a usable name are skipped with a warning; a missing or
/// unknown `type` falls back on keyword inference from the name. The AI path
/// has no heading context, so every module is assigned depth 2.
pub fn parse_analysis_response(response: &str) -> Result<Vec<Module>, RecognizerError> {
    let json: Value = serde_json::from_str(response.trim())
        .map_err(|e| RecognizerError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let modules_array = json
        .get("modules")
        .and_then(|v| v.as_array())
        .ok_or_else(|| RecognizerError::InvalidFormat("Missing 'modules' array".to_string()))?;

    let mut modules = Vec::new();
    for (idx, entry) in modules_array.iter().enumerate() {
        let Some(name) = entry.get("name").and_then(|v| v.as_str()) else {
            warn!("Analysis entry {} has no name; skipping", idx);
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            warn!("Analysis entry {} has an empty name; skipping", idx);
            continue;
        }

        let description = entry
            .get("description")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .trim();

        let module_type = entry
            .get("type")
            .and_then(|v| v.as_str())
            .and_then(ModuleType::parse)
            .unwrap_or_else(|| infer_module_type(name));

        modules.push(Module::new(name, module_type, 2).with_description(description));
    }

    if modules.is_empty() {
        return Err(RecognizerError::EmptyResult);
    }

    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_analysis() {
        let response = r#"{
            "modules": [
                {"name": "跨域训练首页", "description": "展示任务列表", "type": "列表页"},
                {"name": "新建训练任务", "description": "", "type": ""}
            ],
            "total_modules": 2
        }"#;

        let modules = parse_analysis_response(response).unwrap();
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].module_type, ModuleType::ListPage);
        assert_eq!(modules[0].description, "展示任务列表");
        // unknown type string falls back on name inference
        assert_eq!(modules[1].module_type, ModuleType::CreatePage);
        assert_eq!(modules[1].level, 2);
    }

    #[test]
    fn test_parse_skips_nameless_entries() {
        let response = r#"{"modules": [{"description": "孤儿描述"}, {"name": "详情页"}]}"#;
        let modules = parse_analysis_response(response).unwrap();
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name, "详情页");
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_analysis_response("抱歉，我无法识别模块。");
        assert!(matches!(result, Err(RecognizerError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_missing_modules_key() {
        let result = parse_analysis_response(r#"{"pages": []}"#);
        assert!(matches!(result, Err(RecognizerError::InvalidFormat(_))));
    }

    #[test]
    fn test_parse_empty_module_list() {
        let result = parse_analysis_response(r#"{"modules": [], "total_modules": 0}"#);
        assert!(matches!(result, Err(RecognizerError::EmptyResult)));
    }
}
