// SPDX-FileCopyrightText: 2026 Queryflow Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Queryflow - classify a query, prompt the model, format the answer.
//!
//! This is the binary entry point for the Queryflow CLI.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use queryflow::{FileLogSink, Pipeline};
use queryflow_cohere::CohereClient;
use queryflow_core::{LogSink, QueryflowError};

/// Queryflow - classify a query, prompt the model, format the answer.
#[derive(Parser, Debug)]
#[command(name = "queryflow", version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// The query to answer. Prompts on stdin when omitted.
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Train the classifier artifact and write it to disk.
    Train {
        /// Where to write the trained artifact.
        #[arg(long, default_value = "query_classifier.json")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load and validate configuration at startup
    let config = match queryflow_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            queryflow_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.agent.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Some(Commands::Train { output }) = cli.command {
        return match queryflow::train::run_train(&output) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("queryflow: training failed: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let sink = FileLogSink::new(&config.agent.log_file);

    let query = match resolve_query(&cli.query) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("queryflow: failed to read query: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Startup failures are reported to the user and the log file; the
    // process still exits cleanly so shell loops are not interrupted.
    let classifier = match queryflow_classifier::build_classifier(&config.classifier) {
        Ok(classifier) => classifier,
        Err(e) => {
            sink.error(e.kind(), &e.to_string());
            eprintln!("queryflow: {e}");
            return ExitCode::SUCCESS;
        }
    };

    let provider = match CohereClient::from_config(&config.cohere) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            sink.error(e.kind(), &e.to_string());
            eprintln!("queryflow: {e}");
            return ExitCode::SUCCESS;
        }
    };

    let pipeline = Pipeline::new(classifier, provider);
    match pipeline.run(&query).await {
        Ok(answer) => {
            sink.info("Completed", "query answered");
            println!("\n=== AI Response ===");
            println!("{answer}");
        }
        Err(e) => {
            sink.error(e.kind(), &e.to_string());
            let message = match &e {
                QueryflowError::ServiceFailure { .. } => {
                    "The AI service is currently unavailable. Please try again later."
                }
                QueryflowError::InvalidInput(_) | QueryflowError::EmptyPrompt => {
                    "Failed to generate a valid prompt from your query."
                }
                _ => "An unexpected error occurred. See the log file for details.",
            };
            eprintln!("queryflow: {message}");
        }
    }

    ExitCode::SUCCESS
}

/// Take the query from the command line, or prompt for one on stdin.
fn resolve_query(args: &[String]) -> io::Result<String> {
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    print!("Enter your query: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_collects_free_words_as_the_query() {
        let cli = Cli::try_parse_from(["queryflow", "how", "do", "i", "sort"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.query.join(" "), "how do i sort");
    }

    #[test]
    fn cli_parses_train_subcommand_with_output() {
        let cli = Cli::try_parse_from(["queryflow", "train", "--output", "clf.json"]).unwrap();
        match cli.command {
            Some(Commands::Train { output }) => assert_eq!(output, PathBuf::from("clf.json")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn binary_loads_config_defaults() {
        // Verify config loads with defaults (no config file needed)
        let config = queryflow_config::load_and_validate().expect("default config should be valid");
        assert_eq!(config.agent.name, "queryflow");
    }
}
