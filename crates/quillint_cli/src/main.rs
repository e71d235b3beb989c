//! Quillint CLI
//!
//! Prose linter with an incremental cache, written in Rust.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, bail};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use quillint_core::{ConfigDocument, Linter, OutputMode};

mod finder;
mod output;

/// Quillint - prose linter with an incremental cache
#[derive(Parser)]
#[command(name = "quillint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable caching
    #[arg(long, global = true)]
    no_cache: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint files
    Lint {
        /// Files or glob patterns to lint
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Output format (text, json, verbose)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Initialize configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

const CONFIG_CANDIDATES: [&str; 2] = [".quillint.jsonc", ".quillint.json"];

const STARTER_CONFIG: &str = r#"{
  // Quillint configuration
  "output": "text",
  "checks": [
    {
      "name": "weasel-words",
      "kind": "existence",
      "message": "Weasel word.",
      "specimens": ["very", "fairly", "extremely", "several"]
    },
    {
      "name": "doubled-words",
      "kind": "repetition"
    },
    {
      "name": "avoid-utilize",
      "kind": "recommender",
      "message": "Wordy.",
      "recommendations": [
        { "prefer": "use", "avoid": "utilize" }
      ]
    }
  ],
  "ignore": [],
  "ignore_issues": []
}
"#;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{:?}", error);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Lint { patterns, format } => {
            lint(cli.config.as_deref(), cli.no_cache, &patterns, format)
        }
        Commands::Init { force } => init(force),
    }
}

fn lint(
    config_path: Option<&Path>,
    no_cache: bool,
    patterns: &[String],
    format: Option<String>,
) -> Result<ExitCode> {
    let document = load_document(config_path)?;

    let format = match format {
        Some(tag) => parse_format(&tag)?,
        None => document.config.output,
    };

    let mut linter = Linter::from_document(document).into_diagnostic()?;
    if no_cache {
        linter.disable_cache();
    }

    let base_dir = std::env::current_dir().into_diagnostic()?;
    let files = finder::discover_files(patterns, &base_dir).into_diagnostic()?;
    if files.is_empty() {
        warn!("No files matched the given patterns");
    }

    let (reports, failures) = linter.lint_files(&files);

    match format {
        OutputMode::Text => output::output_text(&reports),
        OutputMode::Json => output::output_json(&reports).into_diagnostic()?,
        OutputMode::Verbose => output::output_verbose(&reports),
    }

    for (path, error) in &failures {
        eprintln!("error: {}: {}", path.display(), error);
    }

    if !failures.is_empty() {
        Ok(ExitCode::from(2))
    } else if reports.iter().any(|r| !r.is_clean()) {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn parse_format(tag: &str) -> Result<OutputMode> {
    match tag {
        "text" => Ok(OutputMode::Text),
        "json" => Ok(OutputMode::Json),
        "verbose" => Ok(OutputMode::Verbose),
        other => bail!("Unknown output format '{}' (expected text, json, verbose)", other),
    }
}

fn load_document(config_path: Option<&Path>) -> Result<ConfigDocument> {
    if let Some(path) = config_path {
        return ConfigDocument::from_file(path).into_diagnostic();
    }

    for candidate in CONFIG_CANDIDATES {
        if Path::new(candidate).is_file() {
            return ConfigDocument::from_file(candidate).into_diagnostic();
        }
    }

    Ok(ConfigDocument::default())
}

fn init(force: bool) -> Result<ExitCode> {
    let target = Path::new(CONFIG_CANDIDATES[1]);

    if target.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            target.display()
        );
    }

    std::fs::write(target, STARTER_CONFIG).into_diagnostic()?;
    println!("Wrote {}", target.display());
    Ok(ExitCode::SUCCESS)
}
