//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use uiwalk_domain::{ReviewMode, SuggestedCategory};
use uiwalk_recognizer::SourceFormat;

/// uiwalk CLI - Turn requirement documents into UI-review checklists.
#[derive(Debug, Parser)]
#[command(name = "uiwalk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Force template/rule mode, never calling an AI backend
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (minimal)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Recognize page-level modules in a requirement document
    Recognize(RecognizeArgs),

    /// Generate the UI-review checklist for a document's modules
    Generate(GenerateArgs),

    /// Classify reported problems into the fixed taxonomy
    Classify(ClassifyArgs),
}

/// Arguments for the recognize command.
#[derive(Debug, Parser)]
pub struct RecognizeArgs {
    /// Requirement document to analyze
    #[arg(short, long)]
    pub input: String,

    /// Source format of the document
    #[arg(short, long, value_enum, default_value = "md")]
    pub source: SourceArg,
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Requirement document to analyze
    #[arg(short, long)]
    pub input: String,

    /// Source format of the document
    #[arg(short, long, value_enum, default_value = "md")]
    pub source: SourceArg,

    /// Review mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Suggested categories to activate (standard mode only)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    pub category: Vec<CategoryArg>,

    /// Restrict generation to these module names
    #[arg(long, value_delimiter = ',')]
    pub modules: Vec<String>,

    /// Review-rules document to prepend to every generation prompt
    #[arg(long)]
    pub rules: Option<String>,

    /// Write the checklist to this CSV file
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// A single problem description
    #[arg(short, long, conflicts_with = "file")]
    pub problem: Option<String>,

    /// File with one problem description per line
    #[arg(long)]
    pub file: Option<String>,

    /// Write the classifications to this CSV file
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Source-format argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SourceArg {
    /// Markdown
    Md,
    /// Plain text
    Txt,
    /// Text extracted from a Word document
    Docx,
    /// Text extracted from a PDF
    Pdf,
}

impl From<SourceArg> for SourceFormat {
    fn from(source: SourceArg) -> Self {
        match source {
            SourceArg::Md => SourceFormat::Markdown,
            SourceArg::Txt => SourceFormat::Text,
            SourceArg::Docx => SourceFormat::Docx,
            SourceArg::Pdf => SourceFormat::Pdf,
        }
    }
}

/// Review-mode argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ModeArg {
    /// Standard UI review
    Standard,
    /// Competitive benchmarking review
    Competitive,
}

impl From<ModeArg> for ReviewMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Standard => ReviewMode::Standard,
            ModeArg::Competitive => ReviewMode::Competitive,
        }
    }
}

/// Suggested-category argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CategoryArg {
    /// Header, footer, navigation, global toasts
    GlobalChrome,
    /// Multi-step scenario flows
    ScenarioFlow,
    /// Error handling and boundary conditions
    ExceptionHandling,
    /// Upstream/downstream data flow
    UpstreamDownstream,
}

impl From<CategoryArg> for SuggestedCategory {
    fn from(category: CategoryArg) -> Self {
        match category {
            CategoryArg::GlobalChrome => SuggestedCategory::GlobalChrome,
            CategoryArg::ScenarioFlow => SuggestedCategory::ScenarioFlow,
            CategoryArg::ExceptionHandling => SuggestedCategory::ExceptionHandling,
            CategoryArg::UpstreamDownstream => SuggestedCategory::UpstreamDownstream,
        }
    }
}
