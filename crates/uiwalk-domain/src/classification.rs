//! Problem-classification outcome types

/// The five fixed top-level taxonomy labels
///
/// Every classification outcome carries exactly one of these; parse failures
/// default to the first label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 功能完备性 - features present and implemented per requirement
    Completeness,

    /// 信息清晰性 - information and entry points are discoverable and clear
    Clarity,

    /// 任务高效性 - task flows are short and responsive
    Efficiency,

    /// 系统可靠性 - errors handled, system stable
    Reliability,

    /// 一致性 - visual and verbal consistency across the product
    Consistency,
}

impl Category {
    /// All categories in taxonomy (manual) order
    pub const ALL: [Category; 5] = [
        Category::Completeness,
        Category::Clarity,
        Category::Efficiency,
        Category::Reliability,
        Category::Consistency,
    ];

    /// Taxonomy label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Completeness => "功能完备性",
            Category::Clarity => "信息清晰性",
            Category::Efficiency => "任务高效性",
            Category::Reliability => "系统可靠性",
            Category::Consistency => "一致性",
        }
    }

    /// Parse a taxonomy label
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "功能完备性" => Some(Category::Completeness),
            "信息清晰性" => Some(Category::Clarity),
            "任务高效性" => Some(Category::Efficiency),
            "系统可靠性" => Some(Category::Reliability),
            "一致性" => Some(Category::Consistency),
            _ => None,
        }
    }
}

impl Default for Category {
    /// The first taxonomy label, used whenever classification cannot decide
    fn default() -> Self {
        Category::Completeness
    }
}

/// One problem-row classification outcome
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Top-level taxonomy label
    pub category: Category,

    /// Short free-text reason (by convention under ~50 chars, not enforced)
    pub reason: String,

    /// Citation into the taxonomy, format
    /// `"N.一级分类-N.M 二级指标-问题类型"`; empty for rule-based outcomes
    pub reference: String,
}

impl Classification {
    /// Create a classification with an empty reference
    pub fn new(category: Category, reason: impl Into<String>) -> Self {
        Self {
            category,
            reason: reason.into(),
            reference: String::new(),
        }
    }
}
