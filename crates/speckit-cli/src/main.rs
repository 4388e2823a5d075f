mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::validate::ValidateMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "speckit",
    about = "Spec-driven development workflow — resolve feature paths, validate artifacts, classify workflow phase",
    version,
    propagate_version = true
)]
struct Cli {
    /// Repository root (default: auto-detect from git or .specify/)
    #[arg(long, global = true, env = "SPECKIT_ROOT")]
    root: Option<PathBuf>,

    /// Branch name override (default: current git branch)
    #[arg(long, global = true)]
    branch: Option<String>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print resolved artifact paths for the current feature
    Paths,

    /// Create a new feature: branch, directory, and spec template
    New {
        /// Free-form feature description
        description: String,
    },

    /// Set up the implementation plan for the current feature
    Plan,

    /// Check task prerequisites and list available design documents
    Check {
        /// Also require tasks.md to exist
        #[arg(long)]
        require_tasks: bool,
    },

    /// Validate artifact structure (required sections, size, placeholders)
    Validate {
        #[arg(value_enum, default_value_t = ValidateMode::All)]
        mode: ValidateMode,
    },

    /// Classify the workflow phase and recommend the next command
    Status,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        // Diagnostics go to stderr; stdout carries only command output.
        .with_writer(std::io::stderr)
        .init();

    let ctx = cmd::Invocation {
        root: cli.root,
        branch: cli.branch,
        json: cli.json,
    };

    let result = match cli.command {
        Commands::Paths => cmd::paths::run(&ctx),
        Commands::New { description } => cmd::new::run(&ctx, &description),
        Commands::Plan => cmd::plan::run(&ctx),
        Commands::Check { require_tasks } => cmd::check::run(&ctx, require_tasks),
        Commands::Validate { mode } => cmd::validate::run(&ctx, mode),
        Commands::Status => cmd::status::run(&ctx),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
