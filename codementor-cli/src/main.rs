//! Codementor CLI: terminal front end for the code-feedback pipeline.
//!
//! Analyzes a code submission or generates a study plan, printing the record
//! on stdout and which path produced it on stderr.

mod commands;
mod render;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Codementor: feedback on coding-interview solutions
#[derive(Parser, Debug)]
#[command(name = "codementor", version, about, long_about = None)]
struct Cli {
    /// LLM model to use
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Workspace directory
    #[arg(short, long, default_value = ".", global = true)]
    workspace: PathBuf,

    /// Seconds to wait for the model before falling back (0 waits forever)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Analyze a code submission
    Analyze {
        /// Source file to analyze; `-` reads stdin
        file: Option<PathBuf>,

        /// Problem statement giving the model context
        #[arg(short, long)]
        problem: Option<String>,

        /// Analyze the built-in two-sum sample instead of a file
        #[arg(long, conflicts_with = "file")]
        sample: bool,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a personalized learning plan
    Plan {
        /// JSON array of {problem, difficulty, status} entries
        #[arg(long)]
        history: Option<PathBuf>,

        /// JSON object mapping skill name to proficiency (0-100)
        #[arg(long)]
        skills: Option<PathBuf>,

        /// Use the built-in demo learner for any input not given
        #[arg(long)]
        demo: bool,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum ConfigAction {
    /// Create a default workspace configuration file
    Init,
    /// Show the effective configuration
    Show,
}

/// Per-invocation overrides layered on top of the loaded configuration.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Set up tracing: human-readable stderr + JSON file logging
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(filter));

    let log_dir = codementor_core::config::log_dir();
    let _ = std::fs::create_dir_all(&log_dir);
    let file_appender = tracing_appender::rolling::daily(&log_dir, "codementor.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let workspace = cli
        .workspace
        .canonicalize()
        .unwrap_or_else(|_| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let overrides = Overrides {
        model: cli.model,
        timeout_secs: cli.timeout,
    };

    commands::handle_command(cli.command, &workspace, &overrides).await
}
