//! Event notifications emitted during pipeline execution.

use crate::{PipelineRun, PipelineStep};
use serde::{Deserialize, Serialize};

/// Ordered notifications published by the pipeline executor.
///
/// Observers receive cloned snapshots over a channel, so there is no shared
/// mutable state between the executor and its subscribers. Events arrive in
/// execution order: each step's `StepStarted` precedes its `StepCompleted`
/// or `StepFailed`, and `RunCompleted` is always last. `RunCompleted` is
/// emitted for both terminal states; the run's status discriminates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineEvent {
    /// An agent was dispatched; the step output is still empty.
    StepStarted {
        /// Position of the step in the run history
        index: usize,
        /// Snapshot of the pending step
        step: PipelineStep,
    },
    /// An agent call resolved successfully.
    StepCompleted {
        /// Position of the step in the run history
        index: usize,
        /// Snapshot of the finished step
        step: PipelineStep,
    },
    /// An agent call failed, halting the run.
    StepFailed {
        /// Position of the step in the run history
        index: usize,
        /// Snapshot of the failed step
        step: PipelineStep,
    },
    /// The run reached a terminal state.
    RunCompleted {
        /// Final state of the run, including follow-up when completed
        run: PipelineRun,
    },
}
