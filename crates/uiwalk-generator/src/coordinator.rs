//! Batch coordination over selected modules

use crate::generator::CaseGenerator;
use tracing::info;
use uiwalk_domain::traits::ChatProvider;
use uiwalk_domain::{Case, Module, ReviewMode, SuggestedCategory};

/// Runs case generation over a batch of selected modules
///
/// Modules are processed strictly in their given order and the per-module
/// lists are concatenated in that same order. Only after merging are case
/// numbers assigned, so numbering is contiguous across module boundaries.
pub struct Coordinator<P> {
    generator: CaseGenerator<P>,
}

impl<P> Coordinator<P>
where
    P: ChatProvider,
    P::Error: std::fmt::Display,
{
    /// Create a coordinator around a case generator
    pub fn new(generator: CaseGenerator<P>) -> Self {
        Self { generator }
    }

    /// Generate the merged, numbered checklist for the selected modules
    ///
    /// A module whose AI generation fails still contributes its template
    /// cases; one module can never abort the batch. An empty selection
    /// yields an empty list.
    pub fn generate(
        &self,
        content: &str,
        modules: &[Module],
        mode: ReviewMode,
        categories: &[SuggestedCategory],
    ) -> Vec<Case> {
        let mut merged = Vec::new();
        for module in modules {
            let cases = self
                .generator
                .generate_for_module(content, module, mode, categories);
            info!(module = %module.name, count = cases.len(), "module cases generated");
            merged.extend(cases);
        }

        assign_case_numbers(&mut merged, mode);
        info!(
            total = merged.len(),
            modules = modules.len(),
            mode = mode.label(),
            "checklist merged"
        );
        merged
    }
}

/// Number the merged list sequentially with the mode's prefix
fn assign_case_numbers(cases: &mut [Case], mode: ReviewMode) {
    for (i, case) in cases.iter_mut().enumerate() {
        case.case_no = format!("{}{:03}", mode.case_prefix(), i + 1);
    }
}
