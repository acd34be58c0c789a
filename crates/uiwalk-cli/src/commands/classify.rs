//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{write_classifications_csv, Formatter};
use std::fs;
use uiwalk_classifier::ProblemClassifier;
use uiwalk_domain::Classification;
use uiwalk_llm::ChatClient;

/// Execute the classify command.
pub fn execute_classify(
    args: ClassifyArgs,
    offline: bool,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let problems = collect_problems(&args)?;

    let classifier = match config.chat_client(offline)? {
        Some(client) => ProblemClassifier::new(client),
        None => ProblemClassifier::<ChatClient>::offline(),
    };

    let outcomes: Vec<(String, Classification)> = problems
        .iter()
        .map(|p| (p.clone(), classifier.classify(p)))
        .collect();

    match &args.output {
        Some(path) => {
            write_classifications_csv(path, &outcomes)?;
            println!(
                "{}",
                formatter.success(&format!(
                    "{} problems classified, written to {}",
                    outcomes.len(),
                    path
                ))
            );
        }
        None => println!("{}", formatter.format_classifications(&outcomes)?),
    }

    Ok(())
}

/// Gather problem descriptions from `--problem` or `--file`.
fn collect_problems(args: &ClassifyArgs) -> Result<Vec<String>> {
    if let Some(problem) = &args.problem {
        let problem = problem.trim();
        if problem.is_empty() {
            return Err(CliError::InvalidInput("Empty problem description".into()));
        }
        return Ok(vec![problem.to_string()]);
    }

    if let Some(path) = &args.file {
        let contents = fs::read_to_string(path)?;
        let problems: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        if problems.is_empty() {
            return Err(CliError::InvalidInput(format!(
                "No problem descriptions in {}",
                path
            )));
        }
        return Ok(problems);
    }

    Err(CliError::InvalidInput(
        "Provide --problem or --file".into(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_single_problem() {
        let args = ClassifyArgs {
            problem: Some("点击保存后系统报错".to_string()),
            file: None,
            output: None,
        };
        let problems = collect_problems(&args).unwrap();
        assert_eq!(problems, ["点击保存后系统报错"]);
    }

    #[test]
    fn test_file_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "点击保存后系统报错\n\n  两个页面颜色不统一  \n").unwrap();

        let args = ClassifyArgs {
            problem: None,
            file: Some(file.path().to_str().unwrap().to_string()),
            output: None,
        };
        let problems = collect_problems(&args).unwrap();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[1], "两个页面颜色不统一");
    }

    #[test]
    fn test_missing_input_rejected() {
        let args = ClassifyArgs {
            problem: None,
            file: None,
            output: None,
        };
        assert!(matches!(
            collect_problems(&args),
            Err(CliError::InvalidInput(_))
        ));
    }
}
