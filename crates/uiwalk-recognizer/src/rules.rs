//! Rule-based module extraction
//!
//! Two deterministic strategies, both pure functions of the input text:
//! Markdown heading scanning for lightly-marked sources, and a short-line
//! heuristic for text extracted from binary document formats, where heading
//! markers are lost.

use once_cell::sync::Lazy;
use regex::Regex;
use uiwalk_domain::{Module, ModuleType};

/// `##` through `######`; a single `#` is assumed to be the document title
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{2,6})\s+(.+)").unwrap());

/// Numeric outline prefix such as `1.`, `2.1`, `3、`
static NUM_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)*[.、]?\s*").unwrap());

/// Keywords a plain-text line must contain to count as a module heading
const PLAIN_KEYWORDS: [&str; 8] = [
    "页面", "模块", "功能", "管理", "列表", "详情", "创建", "编辑",
];

/// Heading depth assigned to matches from the plain-paragraph strategy
const PLAIN_DEFAULT_LEVEL: u8 = 2;

/// Ordered type-inference table; the first type with any keyword match wins
const TYPE_KEYWORDS: [(ModuleType, &[&str]); 7] = [
    (ModuleType::ListPage, &["列表", "list", "管理"]),
    (ModuleType::DetailPage, &["详情", "detail", "查看"]),
    (ModuleType::CreatePage, &["创建", "新建", "create", "add", "添加"]),
    (ModuleType::EditPage, &["编辑", "edit", "修改", "更新"]),
    (ModuleType::Modal, &["弹窗", "dialog", "modal", "对话框"]),
    (ModuleType::HomePage, &["首页", "home", "index", "主页"]),
    (ModuleType::LoginPage, &["登录", "login", "注册", "register"]),
];

/// Infer a module type from its name
///
/// Tests the lowercased name against the fixed keyword table in order and
/// returns the first type with any match; defaults to [`ModuleType::Page`].
pub fn infer_module_type(name: &str) -> ModuleType {
    let name_lower = name.to_lowercase();
    for (module_type, keywords) in TYPE_KEYWORDS {
        if keywords.iter().any(|k| name_lower.contains(k)) {
            return module_type;
        }
    }
    ModuleType::Page
}

/// Strip a leading numeric outline prefix from a heading
fn strip_numeric_prefix(title: &str) -> String {
    NUM_PREFIX_RE.replace(title, "").trim().to_string()
}

/// Extract modules from Markdown-like text, preserving document order
pub fn recognize_from_markdown(content: &str) -> Vec<Module> {
    let mut modules = Vec::new();

    for line in content.lines() {
        let Some(captures) = HEADING_RE.captures(line.trim()) else {
            continue;
        };

        let level = captures[1].len() as u8;
        let title_clean = strip_numeric_prefix(captures[2].trim());
        if title_clean.is_empty() {
            continue;
        }

        modules.push(Module::new(
            title_clean.clone(),
            infer_module_type(&title_clean),
            level,
        ));
    }

    modules
}

/// Extract modules from plain extracted text (docx/pdf)
///
/// Heading markers are gone by the time binary formats reach the core, so a
/// line counts as a heading when it is short, does not end in terminal
/// punctuation, and names a page/feature noun.
pub fn recognize_from_plain(content: &str) -> Vec<Module> {
    let mut modules = Vec::new();

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.chars().count() > 100 {
            continue;
        }
        if line.chars().count() >= 50 {
            continue;
        }
        if line.ends_with('。') || line.ends_with('.') || line.ends_with('，') || line.ends_with(',')
        {
            continue;
        }

        let title_clean = strip_numeric_prefix(line);
        if title_clean.is_empty() {
            continue;
        }
        if !PLAIN_KEYWORDS.iter().any(|k| title_clean.contains(k)) {
            continue;
        }

        modules.push(Module::new(
            title_clean.clone(),
            infer_module_type(&title_clean),
            PLAIN_DEFAULT_LEVEL,
        ));
    }

    modules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_count_matches_candidate_count() {
        let content = "# 跨域训练系统\n\n## 1. 跨域训练首页\n展示训练任务列表\n\n## 2. 新建训练任务\n创建新的训练任务\n\n### 2.1 基本信息\n填写任务基本信息\n\n#### 深层标题\n正文";
        let modules = recognize_from_markdown(content);
        // Four headings at depth 2-6 with non-empty cleaned text; the `#`
        // document title is not a module boundary
        assert_eq!(modules.len(), 4);
        assert_eq!(modules[0].name, "跨域训练首页");
        assert_eq!(modules[0].level, 2);
        assert_eq!(modules[2].name, "基本信息");
        assert_eq!(modules[2].level, 3);
        assert_eq!(modules[3].level, 4);
    }

    #[test]
    fn test_numeric_prefix_variants_are_stripped() {
        let content = "## 1. 首页\n## 2.1 任务详情页\n## 3、编辑任务\n## 4 参数配置";
        let modules = recognize_from_markdown(content);
        let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["首页", "任务详情页", "编辑任务", "参数配置"]);
    }

    #[test]
    fn test_numeric_only_heading_is_discarded() {
        let modules = recognize_from_markdown("## 1.2.3\n## 有效模块");
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name, "有效模块");
    }

    #[test]
    fn test_document_order_is_preserved() {
        let modules = recognize_from_markdown("## 乙\n## 甲\n## 丙");
        let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["乙", "甲", "丙"]);
    }

    #[test]
    fn test_type_inference_first_match_wins() {
        // "管理" (list) appears in the table before "详情" (detail)
        assert_eq!(infer_module_type("任务管理详情"), ModuleType::ListPage);
        assert_eq!(infer_module_type("任务详情页"), ModuleType::DetailPage);
        assert_eq!(infer_module_type("新建任务"), ModuleType::CreatePage);
        assert_eq!(infer_module_type("参数配置"), ModuleType::Page);
    }

    #[test]
    fn test_type_inference_is_case_insensitive() {
        assert_eq!(infer_module_type("User List"), ModuleType::ListPage);
        assert_eq!(infer_module_type("LOGIN"), ModuleType::LoginPage);
    }

    #[test]
    fn test_plain_strategy_requires_keyword() {
        let content = "3.1 任务管理\n这是一段很普通的正文描述。\n系统概述";
        let modules = recognize_from_plain(content);
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name, "任务管理");
        assert_eq!(modules[0].level, 2);
    }

    #[test]
    fn test_plain_strategy_skips_long_and_punctuated_lines() {
        let long_line = "页面".repeat(60);
        let content = format!("{}\n用户管理页面，\n订单列表", long_line);
        let modules = recognize_from_plain(&content);
        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name, "订单列表");
    }
}
