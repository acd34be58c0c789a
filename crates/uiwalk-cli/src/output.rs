//! Output formatting and CSV export for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use colored::*;
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use uiwalk_domain::{Case, CaseRecord, Classification, ClassificationRecord, Module};

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a recognized module list.
    pub fn format_modules(&self, modules: &[Module]) -> Result<String> {
        match self.format {
            CliFormat::Json => {
                let values: Vec<serde_json::Value> = modules
                    .iter()
                    .map(|m| {
                        serde_json::json!({
                            "id": m.id,
                            "name": m.name,
                            "description": m.description,
                            "type": m.module_type.label(),
                            "level": m.level,
                            "custom": m.is_custom,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&values)?)
            }
            CliFormat::Table => {
                if modules.is_empty() {
                    return Ok(self.colorize("No modules recognized.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["ID", "名称", "类型", "描述"]);
                for module in modules {
                    builder.push_record([
                        module.id.as_str(),
                        module.name.as_str(),
                        module.module_type.label(),
                        module.description.as_str(),
                    ]);
                }
                Ok(styled(builder))
            }
            CliFormat::Quiet => Ok(modules
                .iter()
                .map(|m| m.name.clone())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a generated checklist.
    pub fn format_cases(&self, cases: &[Case]) -> Result<String> {
        match self.format {
            CliFormat::Json => {
                let records: Vec<CaseRecord> = cases.iter().map(CaseRecord::from).collect();
                Ok(serde_json::to_string_pretty(&records)?)
            }
            CliFormat::Table => {
                if cases.is_empty() {
                    return Ok(self.colorize("No cases generated.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["编号", "模块", "检查点", "优先级", "检查项"]);
                for case in cases {
                    builder.push_record([
                        case.case_no.as_str(),
                        case.module.as_str(),
                        case.checkpoint.as_str(),
                        case.priority.label(),
                        case.check_item.as_str(),
                    ]);
                }
                Ok(styled(builder))
            }
            CliFormat::Quiet => Ok(cases
                .iter()
                .map(|c| c.case_no.clone())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format classification outcomes paired with their problem texts.
    pub fn format_classifications(
        &self,
        outcomes: &[(String, Classification)],
    ) -> Result<String> {
        match self.format {
            CliFormat::Json => {
                let records: Vec<ClassificationRecord> = outcomes
                    .iter()
                    .map(|(problem, c)| ClassificationRecord::new(problem, c))
                    .collect();
                Ok(serde_json::to_string_pretty(&records)?)
            }
            CliFormat::Table => {
                if outcomes.is_empty() {
                    return Ok(self.colorize("No problems classified.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["问题描述", "问题分类", "分类原因", "参照依据"]);
                for (problem, c) in outcomes {
                    builder.push_record([
                        problem.as_str(),
                        c.category.label(),
                        c.reason.as_str(),
                        c.reference.as_str(),
                    ]);
                }
                Ok(styled(builder))
            }
            CliFormat::Quiet => Ok(outcomes
                .iter()
                .map(|(_, c)| c.category.label().to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// Write the checklist to a CSV file in the fixed column vocabulary.
pub fn write_cases_csv(path: impl AsRef<Path>, cases: &[Case]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for case in cases {
        writer.serialize(CaseRecord::from(case))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write classification outcomes to a CSV file.
pub fn write_classifications_csv(
    path: impl AsRef<Path>,
    outcomes: &[(String, Classification)],
) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for (problem, classification) in outcomes {
        writer.serialize(ClassificationRecord::new(problem, classification))?;
    }
    writer.flush()?;
    Ok(())
}
