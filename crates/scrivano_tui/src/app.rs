//! Application state and core TUI types.

use scrivano_core::{Dataset, GeneratedDocument};
use scrivano_docgen::{generate_documents, preview};
use scrivano_interface::{PipelineEvent, PipelineRun, RunStatus};
use scrivano_pipeline::{Pipeline, PipelineProvider};
use strum::IntoEnumIterator;

/// The workflow tabs, in workflow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Tab {
    /// Dataset upload and preview
    Data,
    /// Template content and live preview
    Template,
    /// Generated documents
    Generate,
    /// Agent roster
    Agents,
    /// Pipeline execution
    Run,
}

impl Tab {
    /// The next tab, wrapping at the end.
    pub fn next(self) -> Self {
        let tabs: Vec<Tab> = Tab::iter().collect();
        let index = tabs.iter().position(|t| *t == self).unwrap_or(0);
        tabs[(index + 1) % tabs.len()]
    }

    /// The previous tab, wrapping at the start.
    pub fn previous(self) -> Self {
        let tabs: Vec<Tab> = Tab::iter().collect();
        let index = tabs.iter().position(|t| *t == self).unwrap_or(0);
        tabs[(index + tabs.len() - 1) % tabs.len()]
    }
}

/// Main application state.
///
/// All state is in-memory and scoped to the session; nothing persists when
/// the TUI exits.
pub struct App {
    /// Current tab
    pub tab: Tab,
    /// Loaded dataset, if any
    pub dataset: Option<Dataset>,
    /// Loaded template content
    pub template: String,
    /// Generated documents (replaced wholesale on regeneration)
    pub documents: Vec<GeneratedDocument>,
    /// Configured agent pipeline
    pub pipeline: Pipeline,
    /// Input line for the next pipeline run
    pub pipeline_input: String,
    /// The run being displayed, assembled from executor events
    pub run: Option<PipelineRun>,
    /// Whether a run is currently in flight
    pub run_in_flight: bool,
    /// Most recent error, shown in a dismissible banner
    pub error: Option<String>,
    /// Status message to display
    pub status_message: String,
    /// Currently selected document on the Generate tab
    pub selected_document: usize,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance.
    pub fn new(pipeline: Pipeline, dataset: Option<Dataset>, template: String) -> Self {
        Self {
            tab: Tab::Data,
            dataset,
            template,
            documents: Vec::new(),
            pipeline,
            pipeline_input: String::new(),
            run: None,
            run_in_flight: false,
            error: None,
            status_message: String::from("Tab: switch view | q: quit"),
            selected_document: 0,
            should_quit: false,
        }
    }

    /// Switch to the next tab.
    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    /// Switch to the previous tab.
    pub fn previous_tab(&mut self) {
        self.tab = self.tab.previous();
    }

    /// Move document selection up.
    pub fn select_previous_document(&mut self) {
        if self.selected_document > 0 {
            self.selected_document -= 1;
        }
    }

    /// Move document selection down.
    pub fn select_next_document(&mut self) {
        if self.selected_document < self.documents.len().saturating_sub(1) {
            self.selected_document += 1;
        }
    }

    /// Surface an error in the banner.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Dismiss the error banner.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Regenerate documents from the current dataset and template.
    ///
    /// On failure the previous documents are left untouched and the error
    /// lands in the banner.
    pub fn generate(&mut self) {
        let Some(dataset) = &self.dataset else {
            self.show_error("Please provide both a dataset and a template.");
            return;
        };

        match generate_documents(dataset, &self.template) {
            Ok(documents) => {
                self.status_message = format!("Generated {} documents", documents.len());
                self.documents = documents;
                self.selected_document = 0;
                self.tab = Tab::Generate;
            }
            Err(e) => self.show_error(e.to_string()),
        }
    }

    /// Live preview of the template against the first dataset record.
    pub fn template_preview(&self) -> String {
        match &self.dataset {
            Some(dataset) => preview(dataset, &self.template)
                .unwrap_or_else(|| "Dataset has no records.".to_string()),
            None => "Upload a dataset to see the preview.".to_string(),
        }
    }

    /// Fold an executor event into the displayed run.
    pub fn apply_event(&mut self, event: PipelineEvent) {
        match event {
            PipelineEvent::StepStarted { index, step } => {
                if let Some(run) = &mut self.run {
                    if run.history.len() == index {
                        run.history.push(step);
                    } else if let Some(slot) = run.history.get_mut(index) {
                        *slot = step;
                    }
                }
                self.status_message = format!("Running step {}", index + 1);
            }
            PipelineEvent::StepCompleted { index, step }
            | PipelineEvent::StepFailed { index, step } => {
                if let Some(message) = &step.error {
                    self.show_error(message.clone());
                }
                if let Some(run) = &mut self.run
                    && let Some(slot) = run.history.get_mut(index)
                {
                    *slot = step;
                }
            }
            PipelineEvent::RunCompleted { run } => {
                self.status_message = match run.status {
                    RunStatus::Completed => "Run completed".to_string(),
                    RunStatus::Failed => "Run failed".to_string(),
                    other => format!("Run finished: {other}"),
                };
                self.run = Some(run);
                self.run_in_flight = false;
            }
        }
    }

    /// Agent count of the configured pipeline.
    pub fn agent_count(&self) -> usize {
        PipelineProvider::agents(&self.pipeline).len()
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
