// Executor state machine tests using the mock driver.

mod test_utils;

use scrivano_error::{PipelineErrorKind, ScrivanoErrorKind};
use scrivano_interface::{PipelineEvent, RunStatus};
use scrivano_pipeline::{FOLLOW_UP_FALLBACK, FollowUpConfig, Pipeline, PipelineExecutor};
use std::sync::Arc;
use std::time::Duration;
use test_utils::{MockDriver, pipeline_of};

// The follow-up defaults to gemini-2.5-flash, which the mock echoes.
const FOLLOW_UP_MODEL: &str = "gemini-2.5-flash";

#[tokio::test]
async fn two_agent_chain_threads_output_to_input() {
    let executor = PipelineExecutor::new(MockDriver::new());
    let pipeline = pipeline_of(&[("A", "upper"), ("B", "exclaim")]);

    let run = executor.execute(&pipeline, "hi", None).await.unwrap();

    assert_eq!(run.status, RunStatus::Completed);
    assert_eq!(run.history.len(), 2);

    assert_eq!(run.history[0].agent_name, "A");
    assert_eq!(run.history[0].input, "hi");
    assert_eq!(run.history[0].output, "HI");
    assert!(run.history[0].error.is_none());

    assert_eq!(run.history[1].agent_name, "B");
    assert_eq!(run.history[1].input, "HI");
    assert_eq!(run.history[1].output, "HI!");
    assert!(run.history[1].error.is_none());
}

#[tokio::test]
async fn step_inputs_chain_from_prior_outputs() {
    let executor = PipelineExecutor::new(MockDriver::new());
    let pipeline = pipeline_of(&[("A", "exclaim"), ("B", "exclaim"), ("C", "exclaim")]);

    let run = executor.execute(&pipeline, "x", None).await.unwrap();

    assert_eq!(run.history.len(), 3);
    assert_eq!(run.history[0].input, run.input);
    for i in 1..run.history.len() {
        assert_eq!(run.history[i].input, run.history[i - 1].output);
    }
    assert_eq!(run.final_output(), Some("x!!!"));
}

#[tokio::test]
async fn follow_up_runs_once_with_the_final_output() {
    let executor = PipelineExecutor::new(MockDriver::new());
    let pipeline = pipeline_of(&[("A", "upper"), ("B", "exclaim")]);

    let run = executor.execute(&pipeline, "hi", None).await.unwrap();

    let driver = executor.driver();
    assert_eq!(driver.calls_for_model(FOLLOW_UP_MODEL), 1);

    let (_, follow_up_prompt) = driver
        .calls()
        .into_iter()
        .find(|(model, _)| model == FOLLOW_UP_MODEL)
        .unwrap();
    assert!(follow_up_prompt.contains("HI!"));

    // The mock echoes the prompt, so the stored follow-up carries it too.
    assert!(run.follow_up.unwrap().contains("HI!"));
}

#[tokio::test]
async fn failure_halts_the_chain_and_preserves_prior_steps() {
    let executor = PipelineExecutor::new(MockDriver::new());
    let pipeline = pipeline_of(&[("A", "upper"), ("B", "boom"), ("C", "exclaim")]);

    let run = executor.execute(&pipeline, "hi", None).await.unwrap();

    assert_eq!(run.status, RunStatus::Failed);
    assert_eq!(run.history.len(), 2);

    // The successful first step is preserved untouched.
    assert_eq!(run.history[0].output, "HI");
    assert!(run.history[0].error.is_none());

    // The failed step records the error as both error and output.
    let failed = &run.history[1];
    assert!(failed.is_failed());
    assert_eq!(failed.output, failed.error.clone().unwrap());
    assert!(failed.output.contains("B"));
    assert!(failed.output.contains("simulated backend outage"));

    // No follow-up after a failed run, and agent C never ran.
    assert!(run.follow_up.is_none());
    let driver = executor.driver();
    assert_eq!(driver.calls_for_model(FOLLOW_UP_MODEL), 0);
    assert_eq!(driver.calls_for_model("exclaim"), 0);
}

#[tokio::test]
async fn empty_agent_list_completes_immediately() {
    let executor = PipelineExecutor::new(MockDriver::new());
    let pipeline = Pipeline::new("empty", "", Vec::new());

    let run = executor.execute(&pipeline, "hi", None).await.unwrap();

    assert_eq!(run.status, RunStatus::Completed);
    assert!(run.history.is_empty());
    assert!(run.follow_up.is_none());
    assert_eq!(executor.driver().call_count(), 0);
}

#[tokio::test]
async fn blank_input_is_rejected_without_state_change() {
    let executor = PipelineExecutor::new(MockDriver::new());
    let pipeline = pipeline_of(&[("A", "upper")]);

    for input in ["", "   ", "\n\t"] {
        let err = executor.execute(&pipeline, input, None).await.unwrap_err();
        match err.kind() {
            ScrivanoErrorKind::Pipeline(p) => assert_eq!(p.kind, PipelineErrorKind::EmptyInput),
            other => panic!("unexpected error kind: {other}"),
        }
    }

    assert_eq!(executor.driver().call_count(), 0);
    assert!(!executor.is_running());
}

#[tokio::test]
async fn empty_response_text_is_a_valid_result() {
    let executor = PipelineExecutor::new(MockDriver::new());
    let pipeline = pipeline_of(&[("A", "empty")]);

    let run = executor.execute(&pipeline, "hi", None).await.unwrap();

    assert_eq!(run.status, RunStatus::Completed);
    assert_eq!(run.history[0].output, "");
    assert!(run.history[0].error.is_none());
}

#[tokio::test]
async fn second_start_while_running_is_refused() {
    let executor = Arc::new(PipelineExecutor::new(MockDriver::new()));
    let pipeline = pipeline_of(&[("A", "slow")]);

    let background = {
        let executor = Arc::clone(&executor);
        let pipeline = pipeline.clone();
        tokio::spawn(async move { executor.execute(&pipeline, "hi", None).await })
    };

    // Let the first run reach its backend call.
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(executor.is_running());

    let second = executor.execute(&pipeline, "hi", None).await;
    match second.unwrap_err().kind() {
        ScrivanoErrorKind::Pipeline(p) => assert_eq!(p.kind, PipelineErrorKind::RunInProgress),
        other => panic!("unexpected error kind: {other}"),
    }

    // Exactly one history ever advanced.
    let first = background.await.unwrap().unwrap();
    assert_eq!(first.status, RunStatus::Completed);
    assert_eq!(first.history.len(), 1);

    // The guard releases after the terminal state, so a new run may start.
    let third = executor.execute(&pipeline, "again", None).await.unwrap();
    assert_eq!(third.status, RunStatus::Completed);
}

#[tokio::test]
async fn events_arrive_in_execution_order() {
    let executor = PipelineExecutor::new(MockDriver::new());
    let pipeline = pipeline_of(&[("A", "upper"), ("B", "exclaim")]);
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    executor.execute(&pipeline, "hi", Some(tx)).await.unwrap();

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }

    assert_eq!(events.len(), 5);
    assert!(matches!(
        &events[0],
        PipelineEvent::StepStarted { index: 0, step } if step.output.is_empty()
    ));
    assert!(matches!(
        &events[1],
        PipelineEvent::StepCompleted { index: 0, step } if step.output == "HI"
    ));
    assert!(matches!(&events[2], PipelineEvent::StepStarted { index: 1, .. }));
    assert!(matches!(&events[3], PipelineEvent::StepCompleted { index: 1, .. }));
    assert!(matches!(
        &events[4],
        PipelineEvent::RunCompleted { run } if run.status == RunStatus::Completed
    ));
}

#[tokio::test]
async fn failed_runs_still_emit_a_terminal_event() {
    let executor = PipelineExecutor::new(MockDriver::new());
    let pipeline = pipeline_of(&[("A", "boom")]);
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    executor.execute(&pipeline, "hi", Some(tx)).await.unwrap();

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }

    assert_eq!(events.len(), 3);
    assert!(matches!(&events[0], PipelineEvent::StepStarted { index: 0, .. }));
    assert!(matches!(&events[1], PipelineEvent::StepFailed { index: 0, .. }));
    assert!(matches!(
        &events[2],
        PipelineEvent::RunCompleted { run } if run.status == RunStatus::Failed
    ));
}

#[tokio::test]
async fn dropped_event_receiver_does_not_disturb_the_run() {
    let executor = PipelineExecutor::new(MockDriver::new());
    let pipeline = pipeline_of(&[("A", "upper")]);
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
    drop(rx);

    let run = executor.execute(&pipeline, "hi", Some(tx)).await.unwrap();
    assert_eq!(run.status, RunStatus::Completed);
}

#[tokio::test]
async fn follow_up_failure_degrades_to_the_fallback_string() {
    let executor = PipelineExecutor::new(MockDriver::new())
        .with_follow_up(FollowUpConfig::new("boom", 0.7));
    let pipeline = pipeline_of(&[("A", "upper")]);

    let run = executor.execute(&pipeline, "hi", None).await.unwrap();

    // The run itself is already complete; follow-up failure never changes that.
    assert_eq!(run.status, RunStatus::Completed);
    assert_eq!(run.follow_up.as_deref(), Some(FOLLOW_UP_FALLBACK));
}
