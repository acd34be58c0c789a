//! Per-module case generation

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::parser::parse_case_response;
use crate::prompt::{PromptBuilder, GENERATE_SYSTEM};
use crate::templates::template_cases;
use tracing::{debug, warn};
use uiwalk_domain::traits::{ChatProvider, ChatRequest};
use uiwalk_domain::{Case, Module, ReviewMode, SuggestedCategory};

/// Generates UI-review cases for a single module
///
/// Generic over the chat backend so tests can script it. Generation never
/// fails: when the backend is absent or its reply unusable, the module
/// falls back to the fixed template cases.
pub struct CaseGenerator<P> {
    provider: Option<P>,
    config: GeneratorConfig,
    rules_context: Option<String>,
}

impl<P> CaseGenerator<P>
where
    P: ChatProvider,
    P::Error: std::fmt::Display,
{
    /// Create a generator with an AI backend and default configuration
    pub fn new(provider: P) -> Self {
        Self {
            provider: Some(provider),
            config: GeneratorConfig::default(),
            rules_context: None,
        }
    }

    /// Create a generator without a backend; templates only
    pub fn offline() -> Self {
        Self {
            provider: None,
            config: GeneratorConfig::default(),
            rules_context: None,
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach a review-rules document to prepend to every prompt
    pub fn with_rules_context(mut self, rules: impl Into<String>) -> Self {
        self.rules_context = Some(rules.into());
        self
    }

    /// Generate cases for one module
    ///
    /// The AI path is attempted when a backend is configured; any failure
    /// along it (call, parse, field check) degrades to the template cases
    /// for this module.
    pub fn generate_for_module(
        &self,
        content: &str,
        module: &Module,
        mode: ReviewMode,
        categories: &[SuggestedCategory],
    ) -> Vec<Case> {
        if let Some(provider) = &self.provider {
            match self.generate_with_ai(provider, content, module, mode, categories) {
                Ok(cases) => {
                    debug!(
                        module = %module.name,
                        count = cases.len(),
                        "AI generation succeeded"
                    );
                    return cases;
                }
                Err(e) => {
                    warn!(
                        module = %module.name,
                        "AI generation failed, using templates: {}",
                        e
                    );
                }
            }
        }

        template_cases(&module.name, mode, categories)
    }

    fn generate_with_ai(
        &self,
        provider: &P,
        content: &str,
        module: &Module,
        mode: ReviewMode,
        categories: &[SuggestedCategory],
    ) -> Result<Vec<Case>, GeneratorError> {
        let doc_prefix: String = content.chars().take(self.config.doc_prefix_chars).collect();

        let mut builder = PromptBuilder::new(module, doc_prefix, mode, categories);
        if let Some(rules) = &self.rules_context {
            let rules_prefix: String =
                rules.chars().take(self.config.rules_prefix_chars).collect();
            builder = builder.with_rules_context(rules_prefix);
        }

        let request = ChatRequest::new(GENERATE_SYSTEM, builder.build()).json();
        let response = provider
            .chat(&request)
            .map_err(|e| GeneratorError::Llm(e.to_string()))?;

        parse_case_response(&response, &module.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiwalk_domain::{ModuleType, Priority};
    use uiwalk_llm::MockProvider;

    fn module() -> Module {
        Module::new("任务列表", ModuleType::ListPage, 2).with_description("展示训练任务")
    }

    const REPLY: &str = r#"{
        "cases": [
            {
                "检查点": "列表项",
                "设计原则": "组织有序原则",
                "检查项": "检查任务列表中列表项的对齐",
                "优先级": "中",
                "预期结果/设计标准": "列表项按网格对齐"
            }
        ]
    }"#;

    #[test]
    fn test_ai_path_returns_parsed_cases() {
        let provider = MockProvider::new(REPLY);
        let generator = CaseGenerator::new(provider);
        let cases =
            generator.generate_for_module("文档", &module(), ReviewMode::Standard, &[]);
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].checkpoint, "列表项");
        assert_eq!(cases[0].priority, Priority::Medium);
    }

    #[test]
    fn test_backend_error_falls_back_to_templates() {
        let provider = MockProvider::new(REPLY);
        provider.push_error("connection refused");
        let generator = CaseGenerator::new(provider);
        let cases =
            generator.generate_for_module("文档", &module(), ReviewMode::Standard, &[]);
        assert_eq!(cases, template_cases("任务列表", ReviewMode::Standard, &[]));
    }

    #[test]
    fn test_malformed_reply_falls_back_to_templates() {
        let provider = MockProvider::new("这不是JSON");
        let generator = CaseGenerator::new(provider);
        let cases =
            generator.generate_for_module("文档", &module(), ReviewMode::Competitive, &[]);
        assert_eq!(cases.len(), 10);
    }

    #[test]
    fn test_offline_generator_uses_templates() {
        let generator = CaseGenerator::<MockProvider>::offline();
        let categories = [SuggestedCategory::GlobalChrome];
        let cases =
            generator.generate_for_module("文档", &module(), ReviewMode::Standard, &categories);
        assert_eq!(cases.len(), 11);
    }

    #[test]
    fn test_document_prefix_is_truncated() {
        let provider = MockProvider::new(REPLY);
        let generator = CaseGenerator::new(provider).with_config(GeneratorConfig {
            doc_prefix_chars: 4,
            rules_prefix_chars: 5000,
        });
        let cases = generator.generate_for_module(
            "很长的需求文档正文",
            &module(),
            ReviewMode::Standard,
            &[],
        );
        assert_eq!(cases.len(), 1);
    }
}
