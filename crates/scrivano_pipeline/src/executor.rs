//! Pipeline execution logic.
//!
//! This module provides the executor that runs an ordered agent chain over
//! one input, threading each agent's output into the next agent's input and
//! publishing per-step state to observers as it changes.

use crate::{AgentInvoker, FollowUpConfig, FollowUpGenerator, PipelineProvider};
use scrivano_error::{PipelineError, PipelineErrorKind, ScrivanoResult};
use scrivano_interface::{PipelineEvent, PipelineRun, PipelineStep, RunStatus, ScrivanoDriver};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::mpsc::UnboundedSender;

/// Executes pipelines by calling the generative backend once per agent, in
/// configured order.
///
/// The executor owns the run for its duration and is the only writer of its
/// history. Observers receive cloned snapshots through an event channel:
/// a step is appended (and announced) *before* its backend call resolves so
/// a pending indicator can render, then completed or failed in place. A
/// failed step halts the chain; the follow-up step runs only after a fully
/// successful, non-empty run.
///
/// Only one run may execute at a time per executor. A second `execute`
/// while one is in flight observes a `RunInProgress` error and no second
/// history is ever created. Cancellation is not supported: once started, a
/// run proceeds to completion or failure, and timeouts are delegated
/// entirely to the backend.
pub struct PipelineExecutor<D: ScrivanoDriver> {
    driver: D,
    follow_up: FollowUpConfig,
    running: AtomicBool,
}

impl<D: ScrivanoDriver> PipelineExecutor<D> {
    /// Create a new pipeline executor with the given driver.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            follow_up: FollowUpConfig::default(),
            running: AtomicBool::new(false),
        }
    }

    /// Override the follow-up model and temperature.
    pub fn with_follow_up(mut self, config: FollowUpConfig) -> Self {
        self.follow_up = config;
        self
    }

    /// Get a reference to the underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Whether a run is currently executing.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Execute a pipeline over the given input.
    ///
    /// Agents run strictly sequentially; each call is an await suspend
    /// point. An empty agent list completes immediately with an empty
    /// history and no follow-up call. A mid-run agent failure is data, not
    /// an `Err`: the returned run carries `Failed` status with the error
    /// recorded on its last step.
    ///
    /// `events` receives ordered [`PipelineEvent`] snapshots when provided;
    /// a dropped receiver stops observation without disturbing the run.
    ///
    /// # Errors
    ///
    /// Returns an error only when no run was started: blank input, or a run
    /// already in progress on this executor. Neither case mutates state.
    #[tracing::instrument(skip(self, pipeline, input, events), fields(pipeline = pipeline.name(), agent_count = pipeline.agents().len()))]
    pub async fn execute<P: PipelineProvider>(
        &self,
        pipeline: &P,
        input: &str,
        events: Option<UnboundedSender<PipelineEvent>>,
    ) -> ScrivanoResult<PipelineRun> {
        if input.trim().is_empty() {
            return Err(PipelineError::new(PipelineErrorKind::EmptyInput).into());
        }

        let _guard = RunGuard::acquire(&self.running)
            .ok_or_else(|| PipelineError::new(PipelineErrorKind::RunInProgress))?;

        let mut run = PipelineRun::new(input);
        let invoker = AgentInvoker::new(&self.driver);
        let mut current_input = input.to_string();

        for (index, agent) in pipeline.agents().iter().enumerate() {
            run.history.push(PipelineStep::pending(
                agent.name().clone(),
                agent.model().clone(),
                current_input.clone(),
            ));
            emit(
                &events,
                PipelineEvent::StepStarted {
                    index,
                    step: run.history[index].clone(),
                },
            );

            match invoker.invoke(agent, &current_input).await {
                Ok(output) => {
                    run.history[index].output = output.clone();
                    emit(
                        &events,
                        PipelineEvent::StepCompleted {
                            index,
                            step: run.history[index].clone(),
                        },
                    );
                    current_input = output;
                }
                Err(e) => {
                    // The error text doubles as the step output so failed
                    // steps display uniformly.
                    let message = e.to_string();
                    run.history[index].output = message.clone();
                    run.history[index].error = Some(message);
                    run.status = RunStatus::Failed;

                    tracing::error!(
                        agent = %agent.name(),
                        step = index,
                        error = %e,
                        "Agent failed, halting run"
                    );
                    emit(
                        &events,
                        PipelineEvent::StepFailed {
                            index,
                            step: run.history[index].clone(),
                        },
                    );
                    emit(&events, PipelineEvent::RunCompleted { run: run.clone() });
                    return Ok(run);
                }
            }
        }

        run.status = RunStatus::Completed;

        if !run.history.is_empty() {
            let generator = FollowUpGenerator::with_config(&self.driver, self.follow_up.clone());
            run.follow_up = Some(generator.generate(&current_input).await);
        }

        tracing::info!(steps = run.history.len(), "Pipeline run completed");
        emit(&events, PipelineEvent::RunCompleted { run: run.clone() });
        Ok(run)
    }
}

/// Releases the executor's running flag on every exit path.
struct RunGuard<'a>(&'a AtomicBool);

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn emit(events: &Option<UnboundedSender<PipelineEvent>>, event: PipelineEvent) {
    if let Some(sender) = events {
        // A closed channel just means nobody is watching anymore.
        let _ = sender.send(event);
    }
}
