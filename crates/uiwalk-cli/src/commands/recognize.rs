//! Recognize command implementation.

use crate::cli::RecognizeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::fs;
use std::path::Path;
use uiwalk_recognizer::{ModuleRecognizer, SourceFormat};
use uiwalk_session::SessionContext;

/// Execute the recognize command.
pub fn execute_recognize(
    args: RecognizeArgs,
    offline: bool,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let session = load_document(&args.input, args.source.into())?;

    let modules = recognize(&session, config, offline)?;
    println!("{}", formatter.format_modules(&modules)?);

    Ok(())
}

/// Read a document into a fresh session and run the pre-flight check.
pub fn load_document(input: &str, format: SourceFormat) -> Result<SessionContext> {
    let content = fs::read_to_string(input)?;
    let filename = Path::new(input)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string());

    let mut session = SessionContext::new();
    session.set_document(content, filename, format_tag(format));
    session.check_document()?;
    Ok(session)
}

/// Run module recognition with or without a backend.
pub fn recognize(
    session: &SessionContext,
    config: &Config,
    offline: bool,
) -> Result<Vec<uiwalk_domain::Module>> {
    let format = SourceFormat::from_tag(session.format_tag());
    let modules = match config.chat_client(offline)? {
        Some(client) => ModuleRecognizer::new(client).recognize(session.content(), format),
        None => ModuleRecognizer::offline().recognize(session.content(), format),
    };
    Ok(modules)
}

fn format_tag(format: SourceFormat) -> &'static str {
    match format {
        SourceFormat::Markdown => "md",
        SourceFormat::Text => "txt",
        SourceFormat::Docx => "docx",
        SourceFormat::Pdf => "pdf",
    }
}
