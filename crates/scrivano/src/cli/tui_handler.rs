//! TUI launch handler.

use crate::settings::Settings;
use scrivano_docgen::{read_dataset, read_template};
use scrivano_error::ScrivanoResult;
use scrivano_models::GeminiClient;
use scrivano_pipeline::{FollowUpConfig, Pipeline, PipelineExecutor};
use scrivano_tui::{App, run_tui};
use std::path::Path;
use std::sync::Arc;

/// Launch the terminal user interface.
///
/// Dataset, template, and pipeline are optional; whatever is missing can be
/// worked around inside the session (the built-in pipeline stands in when
/// none is given).
pub async fn launch_tui(
    dataset_path: Option<&Path>,
    template_path: Option<&Path>,
    pipeline_path: Option<&Path>,
    settings: &Settings,
) -> ScrivanoResult<()> {
    let dataset = dataset_path.map(read_dataset).transpose()?;
    let template = template_path
        .map(read_template)
        .transpose()?
        .unwrap_or_default();
    let pipeline = match pipeline_path {
        Some(path) => Pipeline::from_file(path)?,
        None => Pipeline::standard(),
    };

    let client = GeminiClient::new_with_retry(
        settings.retry.no_retry,
        settings.retry.max_retries,
        settings.retry.backoff_ms,
    )?;
    let executor = Arc::new(PipelineExecutor::new(client).with_follow_up(FollowUpConfig::new(
        settings.follow_up.model.clone(),
        settings.follow_up.temperature,
    )));

    let app = App::new(pipeline, dataset, template);
    run_tui(executor, app).map_err(Into::into)
}
