//! Core ModuleRecognizer implementation

use crate::config::RecognizerConfig;
use crate::error::RecognizerError;
use crate::parser::parse_analysis_response;
use crate::prompt::{build_analyze_prompt, ANALYZE_SYSTEM};
use crate::rules;
use tracing::{info, warn};
use uiwalk_domain::traits::{ChatProvider, ChatRequest};
use uiwalk_domain::Module;
use uiwalk_validator::ModuleValidator;

/// Declared source format of the normalized document text
///
/// Multiple uploaded documents are concatenated upstream; the recognizer
/// only ever sees one string plus this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Markdown source
    Markdown,

    /// Plain text source (treated like Markdown: headings may survive)
    Text,

    /// Text extracted from a Word document
    Docx,

    /// Text extracted from a PDF
    Pdf,
}

impl SourceFormat {
    /// Parse a file-extension-like tag; unknown tags default to Markdown
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "docx" => SourceFormat::Docx,
            "pdf" => SourceFormat::Pdf,
            "txt" => SourceFormat::Text,
            _ => SourceFormat::Markdown,
        }
    }

    fn uses_plain_strategy(&self) -> bool {
        matches!(self, SourceFormat::Docx | SourceFormat::Pdf)
    }
}

/// Recognizes page-level modules in a requirement document
///
/// Generic over the chat backend so tests can script it; `offline()` builds
/// a recognizer with no backend at all.
pub struct ModuleRecognizer<P> {
    provider: Option<P>,
    validator: ModuleValidator,
    config: RecognizerConfig,
}

/// Backend-less recognizer type used when no credential is configured
pub type OfflineRecognizer = ModuleRecognizer<NoProvider>;

/// Uninhabited-provider placeholder for the offline recognizer
pub struct NoProvider;

impl ChatProvider for NoProvider {
    type Error = std::convert::Infallible;

    fn chat(&self, _request: &ChatRequest) -> Result<String, Self::Error> {
        unreachable!("NoProvider is never constructed with a backend")
    }
}

impl ModuleRecognizer<NoProvider> {
    /// Create a recognizer that only uses the rule strategies
    pub fn offline() -> Self {
        Self {
            provider: None,
            validator: ModuleValidator::default_config(),
            config: RecognizerConfig::default(),
        }
    }
}

impl<P> ModuleRecognizer<P>
where
    P: ChatProvider,
    P::Error: std::fmt::Display,
{
    /// Create a recognizer with an AI backend and default configuration
    pub fn new(provider: P) -> Self {
        Self {
            provider: Some(provider),
            validator: ModuleValidator::default_config(),
            config: RecognizerConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: RecognizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Recognize modules in the document
    ///
    /// AI analysis runs first when a backend is configured; on any failure
    /// the rule strategies take over. The result is always validated
    /// (deduplicated, capped, descriptions back-filled) and may be empty.
    pub fn recognize(&self, content: &str, format: SourceFormat) -> Vec<Module> {
        if let Some(provider) = &self.provider {
            match self.analyze_with_ai(provider, content) {
                Ok(modules) => {
                    info!("AI analysis recognized {} modules", modules.len());
                    return self.validator.validate(modules);
                }
                Err(e) => {
                    warn!("AI analysis failed, falling back to rules: {}", e);
                }
            }
        }

        let modules = if format.uses_plain_strategy() {
            rules::recognize_from_plain(content)
        } else {
            rules::recognize_from_markdown(content)
        };

        info!("Rule recognition found {} modules", modules.len());
        self.validator.validate(modules)
    }

    /// analyze-requirement backend call
    fn analyze_with_ai(&self, provider: &P, content: &str) -> Result<Vec<Module>, RecognizerError> {
        let doc_prefix: String = content.chars().take(self.config.doc_prefix_chars).collect();
        let request =
            ChatRequest::new(ANALYZE_SYSTEM, build_analyze_prompt(&doc_prefix)).json();

        let response = provider
            .chat(&request)
            .map_err(|e| RecognizerError::Llm(e.to_string()))?;

        parse_analysis_response(&response)
    }
}
