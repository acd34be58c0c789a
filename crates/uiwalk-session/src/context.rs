//! Session-scoped interactive state

use crate::error::SessionError;
use tracing::{debug, info};
use uiwalk_domain::{Case, Module, ReviewMode, SuggestedCategory};

/// Minimum document length (in characters) accepted for recognition
const MIN_DOCUMENT_CHARS: usize = 10;

/// All interactive state of one review session
///
/// Passed explicitly to every component instead of living in ambient
/// globals, so the pipeline is testable without a UI harness. Selection
/// lives on the modules themselves (`Module::selected`); modules come out
/// of recognition selected and are addressed by their stable ids.
#[derive(Debug, Default)]
pub struct SessionContext {
    content: String,
    filename: String,
    format_tag: String,
    modules: Vec<Module>,
    recognized: bool,
    categories: Vec<SuggestedCategory>,
    review_mode: ReviewMode,
    cases: Vec<Case>,
}

impl SessionContext {
    /// Create an empty session
    ///
    /// Nothing uploaded, no modules, all category toggles off, standard
    /// review mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the uploaded document, clearing any previous recognition
    pub fn set_document(
        &mut self,
        content: impl Into<String>,
        filename: impl Into<String>,
        format_tag: impl Into<String>,
    ) {
        self.content = content.into();
        self.filename = filename.into();
        self.format_tag = format_tag.into();
        self.clear_recognition();
        info!(filename = %self.filename, chars = self.content.chars().count(), "document set");
    }

    /// The uploaded document text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The uploaded document's filename
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The uploaded document's format tag ("md", "docx", ...)
    pub fn format_tag(&self) -> &str {
        &self.format_tag
    }

    /// Check that a document is present and long enough for recognition
    pub fn check_document(&self) -> Result<(), SessionError> {
        if self.content.is_empty() {
            return Err(SessionError::NoDocument);
        }
        let chars = self.content.chars().count();
        if chars < MIN_DOCUMENT_CHARS {
            return Err(SessionError::DocumentTooShort(chars));
        }
        Ok(())
    }

    /// Replace the module list with a recognition result
    ///
    /// Recognized modules arrive selected; a re-recognition replaces the
    /// whole set.
    pub fn set_modules(&mut self, modules: Vec<Module>) {
        self.modules = modules;
        self.recognized = true;
        info!(count = self.modules.len(), "modules set");
    }

    /// The current module list in document order
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Whether recognition has run for the current document
    pub fn recognized(&self) -> bool {
        self.recognized
    }

    /// Toggle one module's selection; unknown ids are ignored
    pub fn toggle_selection(&mut self, module_id: &str) {
        match self.modules.iter_mut().find(|m| m.id == module_id) {
            Some(module) => module.selected = !module.selected,
            None => debug!(module_id, "toggle for unknown module ignored"),
        }
    }

    /// Select every module
    pub fn select_all(&mut self) {
        for module in &mut self.modules {
            module.selected = true;
        }
    }

    /// Clear the selection
    pub fn deselect_all(&mut self) {
        for module in &mut self.modules {
            module.selected = false;
        }
    }

    /// Whether a module is currently selected
    pub fn is_selected(&self, module_id: &str) -> bool {
        self.modules
            .iter()
            .any(|m| m.id == module_id && m.selected)
    }

    /// Add a user-defined module, selected immediately
    ///
    /// Rejected when a module with the same name already exists.
    pub fn add_custom_module(&mut self, name: &str) -> Result<(), SessionError> {
        let name = name.trim();
        if self.modules.iter().any(|m| m.name == name) {
            return Err(SessionError::DuplicateModule(name.to_string()));
        }
        let module = Module::custom(name);
        info!(name = %module.name, "custom module added");
        self.modules.push(module);
        Ok(())
    }

    /// The selected modules in document order
    pub fn selected_modules(&self) -> Vec<Module> {
        self.modules.iter().filter(|m| m.selected).cloned().collect()
    }

    /// Check that generation can run: modules recognized and some selected
    pub fn check_selection(&self) -> Result<(), SessionError> {
        if self.modules.is_empty() {
            return Err(SessionError::NoModules);
        }
        if !self.modules.iter().any(|m| m.selected) {
            return Err(SessionError::NoSelection);
        }
        Ok(())
    }

    /// Toggle one suggested category on or off
    pub fn toggle_category(&mut self, category: SuggestedCategory) {
        match self.categories.iter().position(|c| *c == category) {
            Some(idx) => {
                self.categories.remove(idx);
            }
            None => self.categories.push(category),
        }
    }

    /// The active suggested categories in their fixed presentation order
    pub fn selected_categories(&self) -> Vec<SuggestedCategory> {
        SuggestedCategory::ALL
            .into_iter()
            .filter(|c| self.categories.contains(c))
            .collect()
    }

    /// The current review mode
    pub fn review_mode(&self) -> ReviewMode {
        self.review_mode
    }

    /// Set the review mode
    pub fn set_review_mode(&mut self, mode: ReviewMode) {
        self.review_mode = mode;
    }

    /// Store the generated checklist
    pub fn set_cases(&mut self, cases: Vec<Case>) {
        info!(count = cases.len(), "cases stored");
        self.cases = cases;
    }

    /// The generated checklist
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Drop recognition output and cases, keeping the document
    pub fn clear_recognition(&mut self) {
        self.modules.clear();
        self.recognized = false;
        self.cases.clear();
    }

    /// Reset the whole session to its initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiwalk_domain::{module_id, ModuleType};

    fn modules() -> Vec<Module> {
        vec![
            Module::new("任务列表", ModuleType::ListPage, 2),
            Module::new("任务详情", ModuleType::DetailPage, 2),
        ]
    }

    #[test]
    fn test_new_session_defaults() {
        let session = SessionContext::new();
        assert!(session.content().is_empty());
        assert!(session.modules().is_empty());
        assert!(!session.recognized());
        assert!(session.selected_categories().is_empty());
        assert_eq!(session.review_mode(), ReviewMode::Standard);
        assert_eq!(session.check_document(), Err(SessionError::NoDocument));
    }

    #[test]
    fn test_document_length_check() {
        let mut session = SessionContext::new();
        session.set_document("太短", "req.md", "md");
        assert_eq!(session.check_document(), Err(SessionError::DocumentTooShort(2)));

        session.set_document("这份需求文档足够长了", "req.md", "md");
        assert_eq!(session.check_document(), Ok(()));
    }

    #[test]
    fn test_recognized_modules_arrive_selected() {
        let mut session = SessionContext::new();
        session.set_modules(modules());
        assert!(session.recognized());
        assert_eq!(session.selected_modules().len(), 2);
        assert_eq!(session.check_selection(), Ok(()));
    }

    #[test]
    fn test_toggle_and_bulk_selection() {
        let mut session = SessionContext::new();
        session.set_modules(modules());

        let id = module_id("任务列表");
        session.toggle_selection(&id);
        assert!(!session.is_selected(&id));
        assert_eq!(session.selected_modules().len(), 1);

        session.deselect_all();
        assert_eq!(session.check_selection(), Err(SessionError::NoSelection));

        session.select_all();
        assert_eq!(session.selected_modules().len(), 2);
    }

    #[test]
    fn test_toggle_unknown_id_ignored() {
        let mut session = SessionContext::new();
        session.set_modules(modules());
        session.toggle_selection("ffffffffffff");
        assert_eq!(session.selected_modules().len(), 2);
    }

    #[test]
    fn test_selected_modules_keep_document_order() {
        let mut session = SessionContext::new();
        session.set_modules(modules());
        let names: Vec<_> = session
            .selected_modules()
            .iter()
            .map(|m| m.name.clone())
            .collect();
        assert_eq!(names, ["任务列表", "任务详情"]);
    }

    #[test]
    fn test_add_custom_module() {
        let mut session = SessionContext::new();
        session.set_modules(modules());

        session.add_custom_module("结算面板").unwrap();
        assert_eq!(session.modules().len(), 3);
        assert!(session.modules()[2].is_custom);
        assert!(session.is_selected(&module_id("结算面板")));

        let err = session.add_custom_module("任务列表").unwrap_err();
        assert_eq!(err, SessionError::DuplicateModule("任务列表".to_string()));
        assert_eq!(session.modules().len(), 3);
    }

    #[test]
    fn test_category_toggles_in_fixed_order() {
        let mut session = SessionContext::new();
        session.toggle_category(SuggestedCategory::UpstreamDownstream);
        session.toggle_category(SuggestedCategory::GlobalChrome);
        assert_eq!(
            session.selected_categories(),
            vec![
                SuggestedCategory::GlobalChrome,
                SuggestedCategory::UpstreamDownstream
            ]
        );

        session.toggle_category(SuggestedCategory::GlobalChrome);
        assert_eq!(
            session.selected_categories(),
            vec![SuggestedCategory::UpstreamDownstream]
        );
    }

    #[test]
    fn test_new_document_clears_recognition() {
        let mut session = SessionContext::new();
        session.set_document("这份需求文档足够长了", "a.md", "md");
        session.set_modules(modules());
        session.set_cases(vec![]);

        session.set_document("另一份足够长的需求文档", "b.md", "md");
        assert!(!session.recognized());
        assert!(session.modules().is_empty());
        assert_eq!(session.check_selection(), Err(SessionError::NoModules));
        assert_eq!(session.content(), "另一份足够长的需求文档");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = SessionContext::new();
        session.set_document("这份需求文档足够长了", "a.md", "md");
        session.set_modules(modules());
        session.set_review_mode(ReviewMode::Competitive);

        session.reset();
        assert!(session.content().is_empty());
        assert_eq!(session.review_mode(), ReviewMode::Standard);
    }
}
