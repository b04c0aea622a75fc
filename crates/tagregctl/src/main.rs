//! Tag Regulator Control - CLI for tag document normalization
//!
//! Thin wrapper over `tagreg_common`: file in, component call, file or
//! exit code out.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tagreg_common::VocabularyFormat;
use tagregctl::commands;
use tagregctl::errors::{EXIT_GENERAL_ERROR, EXIT_SUCCESS};
use tagregctl::logging;
use tracing::debug;

#[derive(Parser)]
#[command(name = "tagregctl")]
#[command(about = "Tag regulator tooling - normalize output, validate tag vocabularies", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize tag-regulator output JSON in place (dedup + stable ordering)
    Normalize {
        /// Path to the output JSON to normalize
        #[arg(long)]
        output: PathBuf,
    },

    /// Validate a valid_tags file (yaml/json, top-level list of strings)
    ValidateTags {
        /// Path to the valid_tags file
        #[arg(long)]
        valid_tags: PathBuf,

        /// File format: yaml, json or auto
        #[arg(long, default_value_t = VocabularyFormat::Yaml)]
        format: VocabularyFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match cli.command {
        Commands::Normalize { output } => match commands::normalize_output(&output) {
            Ok(report) => {
                debug!(?report, "normalize finished");
                println!("OK");
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("{:#}", e);
                EXIT_GENERAL_ERROR
            }
        },
        Commands::ValidateTags { valid_tags, format } => {
            match commands::validate_tags(&valid_tags, format) {
                Ok(_) => EXIT_SUCCESS,
                Err(e) => {
                    eprintln!("{}", e);
                    EXIT_GENERAL_ERROR
                }
            }
        }
    };

    ExitCode::from(code)
}
