//! CLI definitions for studybuddy
//!
//! Clap structures only; handlers live in `commands`.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use studybuddy::analyzer::SummaryStyle;
use studybuddy::quiz::Difficulty;

/// Clap styles for help output.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "studybuddy")]
#[command(about = "Study assistant: document analysis, summaries and timed adaptive quizzes")]
#[command(
    long_about = "studybuddy - analyze study material and quiz yourself.

Documents must be plain text (.txt, .md). Convert PDFs to text first.

QUICK START:
    studybuddy analyze notes.txt              Show the document analysis
    studybuddy summarize notes.txt -s academic
    studybuddy ask notes.txt \"What is the main topic?\"
    studybuddy quiz --subject Science         Timed quiz from the built-in bank
    studybuddy quiz --from reply.txt          Timed quiz from a saved AI reply
    studybuddy quiz --remote notes.txt        Timed quiz written by the completion command

Set RUST_LOG (e.g. RUST_LOG=studybuddy=debug) or pass --verbose for logs."
)]
#[command(version, styles = build_cli_styles())]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Use this config file instead of ~/.config/studybuddy/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a text document
    Analyze {
        /// Path to a plain-text document
        file: PathBuf,
        /// Print the full analysis as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a text document
    Summarize {
        /// Path to a plain-text document
        file: PathBuf,
        /// comprehensive, executive, academic or key-points (default from config)
        #[arg(long, short)]
        style: Option<SummaryStyle>,
        /// Ask the configured completion command instead of summarizing locally
        #[arg(long)]
        remote: bool,
    },

    /// Ask a question about a text document
    Ask {
        /// Path to a plain-text document
        file: PathBuf,
        /// The question, e.g. "What is the purpose?"
        question: String,
    },

    /// Take a timed quiz, answering on stdin
    #[command(long_about = "Take a timed quiz, answering on stdin.

Type A-D (or 1-4) and press Enter. An unanswered question is scored as
incorrect when its countdown runs out. Difficulty moves from Beginner to
Intermediate after a correct answer.

EXAMPLES:
    studybuddy quiz                            Default subject from config
    studybuddy quiz --subject English -d Intermediate
    studybuddy quiz --from reply.txt           Questions parsed from an AI reply
    studybuddy quiz --remote notes.txt         Questions generated from a document")]
    Quiz {
        /// Subject of the built-in question bank (default from config)
        #[arg(long, short)]
        subject: Option<String>,
        /// Starting tier of built-in questions
        #[arg(long, short, default_value = "Beginner")]
        difficulty: Difficulty,
        /// Parse questions from a saved completion reply instead
        #[arg(long, value_name = "REPLY_FILE", conflicts_with = "remote")]
        from: Option<PathBuf>,
        /// Ask the configured completion command for a quiz over a document
        #[arg(long, value_name = "DOCUMENT")]
        remote: Option<PathBuf>,
    },

    /// Print flashcards from a saved completion reply or a remote request
    Flashcards {
        /// File holding Front:/Back: lines
        #[arg(required_unless_present = "remote", conflicts_with = "remote")]
        reply: Option<PathBuf>,
        /// Ask the configured completion command for flashcards over a document
        #[arg(long, value_name = "DOCUMENT")]
        remote: Option<PathBuf>,
    },

    /// Ask the configured completion command a study question
    Tutor {
        /// The question, e.g. "How do I factor x^2 - 9?"
        question: String,
        /// Subject the question belongs to (default from config)
        #[arg(long, short)]
        subject: Option<String>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}
