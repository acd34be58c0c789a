//! Keyword-based rule classifier
//!
//! The deterministic fallback when no backend is configured or its reply is
//! unusable. Classification is first-match-wins over an ordered table; the
//! scan order is part of the contract because swapping rows changes
//! outcomes for descriptions that mention several categories.

use uiwalk_domain::{Category, Classification};

/// Ordered keyword table, scanned top to bottom
///
/// Reliability before clarity before efficiency before consistency before
/// completeness, so "点击保存后报错" lands on 系统可靠性 even though 功能
/// keywords also appear.
const KEYWORD_TABLE: [(Category, &[&str]); 5] = [
    (
        Category::Reliability,
        &["报错", "错误", "异常", "故障", "崩溃", "卡顿", "加载", "性能"],
    ),
    (
        Category::Clarity,
        &["不清晰", "看不懂", "不明确", "混乱", "找不到", "隐蔽", "文案", "提示"],
    ),
    (
        Category::Efficiency,
        &["操作", "步骤", "流程", "效率", "麻烦", "复杂", "慢", "体验"],
    ),
    (
        Category::Consistency,
        &["不一致", "不统一", "不同", "样式", "格式", "颜色", "字体", "布局"],
    ),
    (
        Category::Completeness,
        &["功能", "无法", "不能", "缺失", "不支持", "没有"],
    ),
];

/// Reason recorded when no keyword matched
pub const NO_MATCH_REASON: &str = "未匹配到明确关键词";

/// Classify a problem description by keyword matching
///
/// The first table row with a matching keyword wins; no match falls back to
/// the first taxonomy label. The reference is always empty on this path.
pub fn classify_by_rules(problem: &str) -> Classification {
    for (category, keywords) in KEYWORD_TABLE {
        if let Some(keyword) = keywords.iter().find(|k| problem.contains(*k)) {
            return Classification::new(category, format!("基于关键词匹配: {}", keyword));
        }
    }

    Classification::new(Category::default(), NO_MATCH_REASON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reliability_keywords() {
        let c = classify_by_rules("点击保存后系统报错");
        assert_eq!(c.category, Category::Reliability);
        assert_eq!(c.reason, "基于关键词匹配: 报错");
        assert!(c.reference.is_empty());
    }

    #[test]
    fn test_scan_order_prefers_reliability_over_completeness() {
        // mentions both 功能 (completeness) and 异常 (reliability)
        let c = classify_by_rules("该功能在异常情况下行为不对");
        assert_eq!(c.category, Category::Reliability);
    }

    #[test]
    fn test_clarity_before_efficiency() {
        // 文案 (clarity) and 操作 (efficiency) both present
        let c = classify_by_rules("操作按钮的文案有歧义");
        assert_eq!(c.category, Category::Clarity);
    }

    #[test]
    fn test_consistency_keywords() {
        let c = classify_by_rules("两个页面的颜色不统一");
        assert_eq!(c.category, Category::Consistency);
    }

    #[test]
    fn test_completeness_keywords() {
        let c = classify_by_rules("批量导出缺失");
        assert_eq!(c.category, Category::Completeness);
        assert_eq!(c.reason, "基于关键词匹配: 缺失");
    }

    #[test]
    fn test_no_match_defaults_to_first_label() {
        let c = classify_by_rules("整体观感一般");
        assert_eq!(c.category, Category::Completeness);
        assert_eq!(c.reason, NO_MATCH_REASON);
        assert!(c.reference.is_empty());
    }
}
