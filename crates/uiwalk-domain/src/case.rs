//! Case - one row of a UI-review checklist

/// Check priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Must check; skipping may hide a severe functional problem (高)
    High,

    /// Should check; skipping may hurt user experience (中)
    Medium,

    /// Optional check; visual-detail polish (低)
    Low,
}

impl Priority {
    /// Display label used in prompts and the export boundary
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "高",
            Priority::Medium => "中",
            Priority::Low => "低",
        }
    }

    /// Parse a label as emitted by the model or the templates
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "高" => Some(Priority::High),
            "中" => Some(Priority::Medium),
            "低" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// Verification status of a case, set by the review UI after generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerifyStatus {
    /// Not yet reviewed (待测试)
    Untested,

    /// Review passed (通过)
    Pass,

    /// Review failed (不通过)
    Fail,
}

impl VerifyStatus {
    /// Display label used at the export boundary
    pub fn label(&self) -> &'static str {
        match self {
            VerifyStatus::Untested => "待测试",
            VerifyStatus::Pass => "通过",
            VerifyStatus::Fail => "不通过",
        }
    }
}

impl Default for VerifyStatus {
    fn default() -> Self {
        VerifyStatus::Untested
    }
}

/// One UI-review check
///
/// The five content fields (checkpoint, principle, check_item, priority,
/// expected) are all required; incomplete candidates are dropped before a
/// `Case` is ever constructed. `case_no` stays empty until the coordinator
/// assigns sequential numbers over the merged list.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// Name of the module this case belongs to
    pub module: String,

    /// The design element or component under check (检查点)
    pub checkpoint: String,

    /// The design principle the check is grounded on (设计原则)
    pub principle: String,

    /// What to check, concretely (检查项)
    pub check_item: String,

    /// Check priority (优先级)
    pub priority: Priority,

    /// Expected result or design standard (预期结果/设计标准)
    pub expected: String,

    /// Sequential case number, e.g. `UI-TC001`; assigned after merging
    pub case_no: String,

    /// Verification status; defaults to untested
    pub status: VerifyStatus,

    /// Free-text note / screenshot reference
    pub note: String,
}

impl Case {
    /// Create an unnumbered case for a module
    pub fn new(
        module: impl Into<String>,
        checkpoint: impl Into<String>,
        principle: impl Into<String>,
        check_item: impl Into<String>,
        priority: Priority,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            checkpoint: checkpoint.into(),
            principle: principle.into(),
            check_item: check_item.into(),
            priority,
            expected: expected.into(),
            case_no: String::new(),
            status: VerifyStatus::default(),
            note: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::parse("高"), Some(Priority::High));
        assert_eq!(Priority::parse(" 中 "), Some(Priority::Medium));
        assert_eq!(Priority::parse("低"), Some(Priority::Low));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn test_new_case_defaults() {
        let case = Case::new(
            "首页",
            "按钮状态",
            "组件状态完整性原则",
            "检查首页中主要按钮的各种状态",
            Priority::High,
            "按钮有默认、悬停、点击、禁用状态",
        );
        assert!(case.case_no.is_empty());
        assert_eq!(case.status, VerifyStatus::Untested);
        assert!(case.note.is_empty());
    }
}
