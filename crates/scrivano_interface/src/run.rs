//! Pipeline run data model.
//!
//! These types are shared between the executor (in scrivano_pipeline) and
//! its observers (TUI, CLI). A run and its steps are plain data: the
//! executor mutates its own copy and publishes snapshots through events.

use serde::{Deserialize, Serialize};

/// Execution state of one agent within a run.
///
/// Created when the agent begins (with an empty `output`, so observers can
/// render a pending indicator) and completed in place when the backend call
/// resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStep {
    /// Agent name, copied from the configuration at dispatch time
    pub agent_name: String,
    /// Model identifier, copied from the configuration at dispatch time
    pub model: String,
    /// Exact input string passed to this agent
    pub input: String,
    /// Result text; empty until the call resolves, error text on failure
    pub output: String,
    /// Present iff the invocation failed
    pub error: Option<String>,
}

impl PipelineStep {
    /// Create a pending step for an agent about to run.
    pub fn pending(
        agent_name: impl Into<String>,
        model: impl Into<String>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            agent_name: agent_name.into(),
            model: model.into(),
            input: input.into(),
            output: String::new(),
            error: None,
        }
    }

    /// Whether this step finished with an error.
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Lifecycle state of a pipeline run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum RunStatus {
    /// No run has started
    NotStarted,
    /// A run is executing
    Running,
    /// All agents completed
    Completed,
    /// An agent failed and the run halted
    Failed,
}

impl RunStatus {
    /// Whether the run has reached a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Failed)
    }
}

/// Complete state of one pipeline execution.
///
/// # Examples
///
/// ```
/// use scrivano_interface::{PipelineRun, RunStatus};
///
/// let run = PipelineRun::new("hello");
/// assert_eq!(run.status, RunStatus::Running);
/// assert!(run.history.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRun {
    /// The initial string fed to agent 0
    pub input: String,
    /// Step records, one per agent begun, in execution order
    pub history: Vec<PipelineStep>,
    /// Current lifecycle state
    pub status: RunStatus,
    /// Follow-up questions, populated only after a run completes
    pub follow_up: Option<String>,
}

impl PipelineRun {
    /// Create a fresh run in the `Running` state.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            history: Vec::new(),
            status: RunStatus::Running,
            follow_up: None,
        }
    }

    /// The output of the final step, if any step has run.
    pub fn final_output(&self) -> Option<&str> {
        self.history.last().map(|step| step.output.as_str())
    }
}
