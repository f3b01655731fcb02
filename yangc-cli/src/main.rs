use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use yangc_core::lint;

#[derive(Parser)]
#[command(name = "yangc", author, version, about = "YANG front-end driver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a YANG file and report the detected module or submodule
    Validate {
        /// Path to the YANG source file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate { file } => validate(&file),
    }
}

/// Runs the pipeline and renders the one-line detection report.
fn detect(text: &str) -> Result<String, yangc_core::Error> {
    if text.trim_start().starts_with("submodule") {
        let submodule = yangc_core::parse_submodule(text)?;
        Ok(format!("Detected submodule: {}", submodule.name))
    } else {
        let module = yangc_core::parse_module(text)?;
        for diagnostic in lint::duplicate_statements(&module) {
            tracing::warn!(%diagnostic, "duplicate statement");
        }
        Ok(format!("Detected module: {}", module.name))
    }
}

fn validate(file: &Path) -> ExitCode {
    let text = match fs::read_to_string(file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{}: {e}", file.display());
            return ExitCode::FAILURE;
        }
    };

    match detect(&text) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {e}", file.display());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_module() {
        let report = detect(r#"module m { namespace "urn:m"; prefix m; }"#).unwrap();
        assert_eq!(report, "Detected module: m");
    }

    #[test]
    fn test_detect_submodule() {
        let report =
            detect(r#"submodule s { belongs-to m { prefix m; } }"#).unwrap();
        assert_eq!(report, "Detected submodule: s");
    }

    #[test]
    fn test_detect_failure() {
        assert!(detect("module only-a-name").is_err());
    }
}
