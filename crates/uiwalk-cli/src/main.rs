//! uiwalk CLI - Generate UI-review checklists from requirement documents.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use uiwalk_cli::commands;
use uiwalk_cli::{Cli, CliFormat, Command, Config, Formatter};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> uiwalk_cli::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    let format = cli.format.unwrap_or(CliFormat::Table);
    let formatter = Formatter::new(format, !cli.no_color);

    match cli.command {
        Command::Recognize(args) => {
            commands::execute_recognize(args, cli.offline, &config, &formatter)?;
        }
        Command::Generate(args) => {
            commands::execute_generate(args, cli.offline, &config, &formatter)?;
        }
        Command::Classify(args) => {
            commands::execute_classify(args, cli.offline, &config, &formatter)?;
        }
    }

    Ok(())
}
