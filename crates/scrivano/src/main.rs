//! Scrivano CLI binary.
//!
//! This binary provides command-line access to Scrivano's functionality:
//! - Merge a dataset and a template into documents
//! - Preview the merge against the first record
//! - Execute agent pipelines over an input
//! - Launch the TUI for the full workflow

use clap::Parser;

mod cli;
mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, launch_tui, run_generate, run_pipeline, run_preview};

    // Load .env before anything reads the environment.
    let _ = dotenvy::dotenv();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let settings = settings::Settings::load()?;

    // Execute the requested command
    match cli.command {
        Commands::Generate {
            dataset,
            template,
            out,
        } => {
            run_generate(&dataset, &template, out.as_deref(), &settings)?;
        }

        Commands::Preview { dataset, template } => {
            run_preview(&dataset, &template)?;
        }

        Commands::Run {
            pipeline,
            input,
            input_file,
        } => {
            run_pipeline(pipeline.as_deref(), input, input_file.as_deref(), &settings).await?;
        }

        Commands::Tui {
            dataset,
            template,
            pipeline,
        } => {
            launch_tui(
                dataset.as_deref(),
                template.as_deref(),
                pipeline.as_deref(),
                &settings,
            )
            .await?;
        }
    }

    Ok(())
}
