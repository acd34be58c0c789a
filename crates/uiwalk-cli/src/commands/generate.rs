//! Generate command implementation.

use crate::cli::GenerateArgs;
use crate::commands::recognize::{load_document, recognize};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{write_cases_csv, Formatter};
use std::fs;
use uiwalk_domain::{Case, ReviewMode, SuggestedCategory};
use uiwalk_generator::{CaseGenerator, Coordinator};
use uiwalk_llm::ChatClient;

/// Execute the generate command.
pub fn execute_generate(
    args: GenerateArgs,
    offline: bool,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let mut session = load_document(&args.input, args.source.into())?;

    let modules = recognize(&session, config, offline)?;
    session.set_modules(modules);

    // --modules narrows the selection to the named modules
    if !args.modules.is_empty() {
        apply_module_filter(&mut session, &args.modules)?;
    }
    session.check_selection()?;

    let mode = match args.mode {
        Some(mode) => mode.into(),
        None => config.review_mode()?,
    };
    let categories: Vec<SuggestedCategory> =
        args.category.iter().map(|c| (*c).into()).collect();
    if mode == ReviewMode::Competitive && !categories.is_empty() {
        eprintln!(
            "{}",
            formatter.warning("Suggested categories only apply to standard mode; ignored")
        );
    }

    let rules = match &args.rules {
        Some(path) => Some(fs::read_to_string(path)?),
        None => None,
    };

    let cases = generate(&session, config, offline, mode, &categories, rules)?;
    session.set_cases(cases);

    match &args.output {
        Some(path) => {
            write_cases_csv(path, session.cases())?;
            println!(
                "{}",
                formatter.success(&format!(
                    "{} cases written to {}",
                    session.cases().len(),
                    path
                ))
            );
        }
        None => println!("{}", formatter.format_cases(session.cases())?),
    }

    Ok(())
}

fn apply_module_filter(
    session: &mut uiwalk_session::SessionContext,
    names: &[String],
) -> Result<()> {
    for name in names {
        if !session.modules().iter().any(|m| &m.name == name) {
            return Err(CliError::InvalidInput(format!(
                "Module not recognized: {}",
                name
            )));
        }
    }

    session.deselect_all();
    let ids: Vec<String> = session
        .modules()
        .iter()
        .filter(|m| names.contains(&m.name))
        .map(|m| m.id.clone())
        .collect();
    for id in ids {
        session.toggle_selection(&id);
    }
    Ok(())
}

fn generate(
    session: &uiwalk_session::SessionContext,
    config: &Config,
    offline: bool,
    mode: ReviewMode,
    categories: &[SuggestedCategory],
    rules: Option<String>,
) -> Result<Vec<Case>> {
    let selected = session.selected_modules();

    let cases = match config.chat_client(offline)? {
        Some(client) => {
            let mut generator = CaseGenerator::new(client);
            if let Some(rules) = rules {
                generator = generator.with_rules_context(rules);
            }
            Coordinator::new(generator).generate(session.content(), &selected, mode, categories)
        }
        None => Coordinator::new(CaseGenerator::<ChatClient>::offline()).generate(
            session.content(),
            &selected,
            mode,
            categories,
        ),
    };

    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uiwalk_session::SessionContext;

    const DOCUMENT: &str = "# 需求\n\n## 任务列表\n展示训练任务\n\n## 任务详情\n单个任务信息\n";

    fn session() -> SessionContext {
        let mut session = SessionContext::new();
        session.set_document(DOCUMENT, "req.md", "md");
        let modules = recognize(&session, &Config::default(), true).unwrap();
        session.set_modules(modules);
        session
    }

    #[test]
    fn test_offline_generation_numbers_cases() {
        let session = session();
        let cases = generate(
            &session,
            &Config::default(),
            true,
            ReviewMode::Standard,
            &[],
            None,
        )
        .unwrap();
        assert_eq!(cases.len(), 16);
        assert_eq!(cases[0].case_no, "UI-TC001");
    }

    #[test]
    fn test_module_filter_narrows_selection() {
        let mut session = session();
        apply_module_filter(&mut session, &["任务详情".to_string()]).unwrap();
        let selected = session.selected_modules();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "任务详情");
    }

    #[test]
    fn test_module_filter_rejects_unknown_name() {
        let mut session = session();
        let result = apply_module_filter(&mut session, &["结算面板".to_string()]);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
