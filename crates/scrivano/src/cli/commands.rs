//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scrivano - dataset-to-document merge with sequential LLM agent pipelines
#[derive(Parser, Debug)]
#[command(name = "scrivano")]
#[command(about = "Merge datasets with templates and run sequential agent pipelines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge a dataset and a template into documents
    Generate {
        /// Dataset file (csv, json, xlsx, ods, txt)
        #[arg(long)]
        dataset: PathBuf,

        /// Template file (txt, md, markdown, docx)
        #[arg(long)]
        template: PathBuf,

        /// Export directory (defaults to the configured export_dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Render the template against the first dataset record
    Preview {
        /// Dataset file (csv, json, xlsx, ods, txt)
        #[arg(long)]
        dataset: PathBuf,

        /// Template file (txt, md, markdown, docx)
        #[arg(long)]
        template: PathBuf,
    },

    /// Execute an agent pipeline over an input
    Run {
        /// Pipeline TOML file (defaults to the built-in pipeline)
        #[arg(long)]
        pipeline: Option<PathBuf>,

        /// Input text for the first agent
        #[arg(long, conflicts_with = "input_file")]
        input: Option<String>,

        /// Read the input text from a file
        #[arg(long)]
        input_file: Option<PathBuf>,
    },

    /// Launch the terminal user interface
    Tui {
        /// Dataset file to preload
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Template file to preload
        #[arg(long)]
        template: Option<PathBuf>,

        /// Pipeline TOML file (defaults to the built-in pipeline)
        #[arg(long)]
        pipeline: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_arguments_parse() {
        let cli = Cli::try_parse_from([
            "scrivano",
            "generate",
            "--dataset",
            "people.csv",
            "--template",
            "letter.md",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate { dataset, template, out } => {
                assert_eq!(dataset, PathBuf::from("people.csv"));
                assert_eq!(template, PathBuf::from("letter.md"));
                assert!(out.is_none());
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn run_rejects_both_input_sources() {
        let result = Cli::try_parse_from([
            "scrivano",
            "run",
            "--input",
            "hello",
            "--input-file",
            "input.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_flag_is_global() {
        let cli = Cli::try_parse_from(["scrivano", "tui", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
