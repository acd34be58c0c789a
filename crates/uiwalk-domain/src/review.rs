//! Review mode and suggested-category vocabulary

/// The two fixed review configurations
///
/// The mode controls prompt content, case-count targets, priority
/// distribution and the case-number prefix. Suggested categories apply to
/// standard mode only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewMode {
    /// Standard UI review (标准UI走查)
    Standard,

    /// Competitive benchmarking review (竞品对标走查)
    Competitive,
}

impl ReviewMode {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            ReviewMode::Standard => "标准UI走查",
            ReviewMode::Competitive => "竞品对标走查",
        }
    }

    /// Case-number prefix for this mode
    pub fn case_prefix(&self) -> &'static str {
        match self {
            ReviewMode::Standard => "UI-TC",
            ReviewMode::Competitive => "CP-TC",
        }
    }
}

impl Default for ReviewMode {
    fn default() -> Self {
        ReviewMode::Standard
    }
}

/// Optional extra review angles, usable only in standard mode
///
/// Each active category appends a fixed block of guidance to the generation
/// prompt (AI path) or fixed extra cases (template path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestedCategory {
    /// Global chrome: header, footer, navigation, toasts (全局页面)
    GlobalChrome,

    /// Multi-step scenario flows (场景流程)
    ScenarioFlow,

    /// Error handling and boundary conditions (异常场景)
    ExceptionHandling,

    /// Upstream/downstream data flow across pages (上下游验证)
    UpstreamDownstream,
}

impl SuggestedCategory {
    /// All categories in their fixed presentation order
    pub const ALL: [SuggestedCategory; 4] = [
        SuggestedCategory::GlobalChrome,
        SuggestedCategory::ScenarioFlow,
        SuggestedCategory::ExceptionHandling,
        SuggestedCategory::UpstreamDownstream,
    ];

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            SuggestedCategory::GlobalChrome => "全局页面",
            SuggestedCategory::ScenarioFlow => "场景流程",
            SuggestedCategory::ExceptionHandling => "异常场景",
            SuggestedCategory::UpstreamDownstream => "上下游验证",
        }
    }
}
