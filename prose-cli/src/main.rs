//! Prose CLI - lex and parse a single English-like sentence.

mod commands;
mod output;
mod report;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Sentence compiled when none is given on the command line.
const DEFAULT_SENTENCE: &str = "Hello, world-wide communication technologies.";

/// Main CLI structure.
#[derive(Parser)]
#[command(name = "prose")]
#[command(author, version, about = "Prose - a lexer and parser for one-sentence English", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase logging verbosity (-v: debug, -vv+: trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress error summaries.
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Lex and parse a sentence, printing tokens, symbols, errors, and the AST.
    Compile {
        /// The sentence to compile.
        sentence: Option<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,

        /// Render each error as an annotated source report.
        #[arg(long)]
        explain: bool,
    },

    /// Run only the lexer.
    Tokens {
        /// The sentence to lex.
        sentence: Option<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

/// Main entry point.
fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Compile {
            sentence,
            json,
            explain,
        } => commands::compile::run(
            sentence.as_deref().unwrap_or(DEFAULT_SENTENCE),
            json,
            explain,
        ),
        Commands::Tokens { sentence, json } => {
            commands::tokens::run(sentence.as_deref().unwrap_or(DEFAULT_SENTENCE), json)
        }
    };

    if let Err(e) = result {
        if !cli.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "warn",
        1 => "prose=debug,prose_lexer=debug,prose_parser=debug",
        _ => "prose=trace,prose_lexer=trace,prose_parser=trace",
    }
}
