//! Pipeline execution command handler.

use crate::settings::Settings;
use scrivano_error::{ConfigError, ScrivanoResult};
use scrivano_interface::{PipelineEvent, RunStatus};
use scrivano_models::GeminiClient;
use scrivano_pipeline::{FollowUpConfig, Pipeline, PipelineExecutor};
use std::path::Path;

/// Execute a pipeline over the given input and print step progress.
pub async fn run_pipeline(
    pipeline_path: Option<&Path>,
    input: Option<String>,
    input_file: Option<&Path>,
    settings: &Settings,
) -> ScrivanoResult<()> {
    let pipeline = match pipeline_path {
        Some(path) => Pipeline::from_file(path)?,
        None => Pipeline::standard(),
    };

    let input = resolve_input(input, input_file)?;

    let client = GeminiClient::new_with_retry(
        settings.retry.no_retry,
        settings.retry.max_retries,
        settings.retry.backoff_ms,
    )?;
    let executor = PipelineExecutor::new(client).with_follow_up(FollowUpConfig::new(
        settings.follow_up.model.clone(),
        settings.follow_up.temperature,
    ));

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let printer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match event {
                PipelineEvent::StepStarted { index, step } => {
                    println!("[{}] {} ({}) ...", index + 1, step.agent_name, step.model);
                }
                PipelineEvent::StepCompleted { step, .. } => {
                    println!("{}\n", step.output);
                }
                PipelineEvent::StepFailed { step, .. } => {
                    eprintln!("{}\n", step.output);
                }
                PipelineEvent::RunCompleted { .. } => {}
            }
        }
    });

    let run = executor.execute(&pipeline, &input, Some(tx)).await?;
    let _ = printer.await;

    match run.status {
        RunStatus::Completed => {
            if let Some(questions) = &run.follow_up {
                println!("Follow-up questions:\n{questions}");
            }
            Ok(())
        }
        _ => {
            eprintln!("Pipeline run failed after {} steps", run.history.len());
            std::process::exit(1);
        }
    }
}

fn resolve_input(input: Option<String>, input_file: Option<&Path>) -> ScrivanoResult<String> {
    match (input, input_file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read input file {}: {}", path.display(), e)).into()
        }),
        (None, None) => {
            Err(ConfigError::new("Provide the run input via --input or --input-file").into())
        }
    }
}
