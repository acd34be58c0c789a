//! Core ProblemClassifier implementation

use crate::parser::parse_classification_response;
use crate::prompt::{build_classify_prompt, CLASSIFY_MAX_TOKENS, CLASSIFY_SYSTEM};
use crate::rule::classify_by_rules;
use tracing::{debug, warn};
use uiwalk_domain::traits::{ChatProvider, ChatRequest};
use uiwalk_domain::Classification;

/// Classifies problem descriptions into the fixed taxonomy
///
/// Generic over the chat backend so tests can script it. Classification
/// never fails: without a backend, or when the backend call errors, the
/// keyword rules decide.
pub struct ProblemClassifier<P> {
    provider: Option<P>,
}

impl<P> ProblemClassifier<P>
where
    P: ChatProvider,
    P::Error: std::fmt::Display,
{
    /// Create a classifier with an AI backend
    pub fn new(provider: P) -> Self {
        Self { provider: Some(provider) }
    }

    /// Create a classifier that only uses the keyword rules
    pub fn offline() -> Self {
        Self { provider: None }
    }

    /// Classify one problem description
    pub fn classify(&self, problem: &str) -> Classification {
        if let Some(provider) = &self.provider {
            let request = ChatRequest::new(CLASSIFY_SYSTEM, build_classify_prompt(problem))
                .with_max_tokens(CLASSIFY_MAX_TOKENS);

            match provider.chat(&request) {
                Ok(response) => {
                    let classification = parse_classification_response(&response);
                    debug!(category = classification.category.label(), "AI classification");
                    return classification;
                }
                Err(e) => {
                    warn!("classification call failed, using keyword rules: {}", e);
                }
            }
        }

        classify_by_rules(problem)
    }

    /// Classify a batch of problem descriptions, one outcome per input
    ///
    /// A failed call only degrades its own row to the keyword rules; the
    /// batch always completes.
    pub fn classify_batch(&self, problems: &[String]) -> Vec<Classification> {
        problems.iter().map(|p| self.classify(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::DEFAULT_REASON;
    use crate::rule::NO_MATCH_REASON;
    use uiwalk_domain::Category;
    use uiwalk_llm::MockProvider;

    #[test]
    fn test_ai_path_returns_parsed_classification() {
        let reply = r#"{
            "category": "信息清晰性",
            "reason": "功能入口位置隐蔽",
            "reference": "2.信息清晰性-2.2 功能入口易见-功能入口隐蔽"
        }"#;
        let classifier = ProblemClassifier::new(MockProvider::new(reply));
        let c = classifier.classify("设置入口找不到");
        assert_eq!(c.category, Category::Clarity);
        assert!(!c.reference.is_empty());
    }

    #[test]
    fn test_backend_error_falls_back_to_rules() {
        let provider = MockProvider::new("{}");
        provider.push_error("connection refused");
        let classifier = ProblemClassifier::new(provider);
        let c = classifier.classify("点击保存后系统报错");
        assert_eq!(c.category, Category::Reliability);
        assert!(c.reference.is_empty());
    }

    #[test]
    fn test_unparseable_reply_yields_default_classification() {
        let classifier = ProblemClassifier::new(MockProvider::new("不是JSON"));
        let c = classifier.classify("点击保存后系统报错");
        assert_eq!(c.category, Category::default());
        assert_eq!(c.reason, DEFAULT_REASON);
    }

    #[test]
    fn test_offline_no_keyword_match_defaults() {
        let classifier = ProblemClassifier::<MockProvider>::offline();
        let c = classifier.classify("整体观感一般");
        assert_eq!(c.category, Category::Completeness);
        assert_eq!(c.reason, NO_MATCH_REASON);
        assert!(c.reference.is_empty());
    }

    #[test]
    fn test_batch_isolates_failures() {
        let reply = r#"{"category": "一致性", "reason": "术语不统一"}"#;
        let provider = MockProvider::new(reply);
        provider.push_error("timeout");
        let classifier = ProblemClassifier::new(provider);

        let problems = vec!["两页术语不统一".to_string(), "两页术语不统一".to_string()];
        let outcomes = classifier.classify_batch(&problems);
        assert_eq!(outcomes.len(), 2);
        // first call failed over to rules, second used the backend
        assert_eq!(outcomes[0].category, Category::Consistency);
        assert_eq!(outcomes[1].category, Category::Consistency);
        assert!(outcomes[0].reason.starts_with("基于关键词匹配"));
        assert_eq!(outcomes[1].reason, "术语不统一");
    }
}
