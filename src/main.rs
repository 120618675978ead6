//! studybuddy - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands, ConfigCommands};
use studybuddy::Config;

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "studybuddy=debug"
    } else {
        "studybuddy=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze { file, json } => commands::analyze::handle(&config, &file, json),
        Commands::Summarize {
            file,
            style,
            remote,
        } => commands::summarize::handle(&config, &config_path, &file, style, remote),
        Commands::Ask { file, question } => commands::ask::handle(&config, &file, &question),
        Commands::Quiz {
            subject,
            difficulty,
            from,
            remote,
        } => {
            let source = match (&remote, &from) {
                (Some(document), _) => commands::quiz::QuizSource::Remote {
                    document,
                    config_path: &config_path,
                },
                (None, Some(reply)) => commands::quiz::QuizSource::Reply(reply),
                (None, None) => commands::quiz::QuizSource::Bank(difficulty),
            };
            commands::quiz::handle(&config, subject.as_deref(), source)
        }
        Commands::Flashcards { reply, remote } => commands::flashcards::handle(
            &config,
            &config_path,
            reply.as_deref(),
            remote.as_deref(),
        ),
        Commands::Tutor { question, subject } => {
            commands::tutor::handle(&config, &config_path, subject.as_deref(), &question)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
        },
    }
}
