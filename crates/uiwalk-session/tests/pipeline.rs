//! End-to-end pipeline tests: document → modules → selection → checklist

use uiwalk_generator::{CaseGenerator, Coordinator};
use uiwalk_llm::MockProvider;
use uiwalk_recognizer::{ModuleRecognizer, SourceFormat};
use uiwalk_session::{SessionContext, SessionError};

const DOCUMENT: &str = "# 训练平台需求\n\n## 任务列表\n展示所有训练任务\n\n## 任务详情\n单个任务的完整信息\n";

fn recognize_offline(session: &mut SessionContext) {
    let recognizer = ModuleRecognizer::offline();
    let modules = recognizer.recognize(session.content(), SourceFormat::Markdown);
    session.set_modules(modules);
}

#[test]
fn two_module_document_yields_sixteen_template_cases() {
    let mut session = SessionContext::new();
    session.set_document(DOCUMENT, "req.md", "md");
    session.check_document().unwrap();

    recognize_offline(&mut session);
    assert_eq!(session.modules().len(), 2);
    session.check_selection().unwrap();

    let coordinator = Coordinator::new(CaseGenerator::<MockProvider>::offline());
    let cases = coordinator.generate(
        session.content(),
        &session.selected_modules(),
        session.review_mode(),
        &session.selected_categories(),
    );
    session.set_cases(cases);

    assert_eq!(session.cases().len(), 16);
    assert_eq!(session.cases()[0].case_no, "UI-TC001");
    assert_eq!(session.cases()[15].case_no, "UI-TC016");
}

#[test]
fn failing_provider_is_equivalent_to_offline() {
    let mut session = SessionContext::new();
    session.set_document(DOCUMENT, "req.md", "md");
    recognize_offline(&mut session);

    let provider = MockProvider::new("{}");
    provider.push_error("connection refused");
    provider.push_error("connection refused");
    let with_failing = Coordinator::new(CaseGenerator::new(provider)).generate(
        session.content(),
        &session.selected_modules(),
        session.review_mode(),
        &[],
    );

    let offline = Coordinator::new(CaseGenerator::<MockProvider>::offline()).generate(
        session.content(),
        &session.selected_modules(),
        session.review_mode(),
        &[],
    );

    assert_eq!(with_failing, offline);
}

#[test]
fn deselected_modules_are_excluded() {
    let mut session = SessionContext::new();
    session.set_document(DOCUMENT, "req.md", "md");
    recognize_offline(&mut session);

    let first = session.modules()[0].id.clone();
    session.toggle_selection(&first);
    let selected = session.selected_modules();
    assert_eq!(selected.len(), 1);

    let cases = Coordinator::new(CaseGenerator::<MockProvider>::offline()).generate(
        session.content(),
        &selected,
        session.review_mode(),
        &[],
    );
    assert_eq!(cases.len(), 8);
    assert!(cases.iter().all(|c| c.module == "任务详情"));
}

#[test]
fn preflight_blocks_before_any_backend_call() {
    let mut session = SessionContext::new();
    assert_eq!(session.check_document(), Err(SessionError::NoDocument));

    session.set_document("短文档", "req.md", "md");
    assert!(matches!(
        session.check_document(),
        Err(SessionError::DocumentTooShort(_))
    ));

    session.set_document(DOCUMENT, "req.md", "md");
    session.check_document().unwrap();
    assert_eq!(session.check_selection(), Err(SessionError::NoModules));

    recognize_offline(&mut session);
    session.deselect_all();
    assert_eq!(session.check_selection(), Err(SessionError::NoSelection));
}
