//! TUI runner - main loop and pipeline integration.
//!
//! The main loop polls the terminal with a tick, drains pipeline events
//! from the executor's channel every iteration, and spawns runs onto the
//! async runtime so the interface stays responsive while agents execute.

use crate::{App, Event, EventHandler};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, KeyCode, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use scrivano_error::{TuiError, TuiErrorKind, TuiResult};
use scrivano_interface::{PipelineEvent, PipelineRun, ScrivanoDriver};
use scrivano_pipeline::PipelineExecutor;
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Run the TUI over the given executor and initial application state.
///
/// Must be called from within a tokio runtime; pipeline runs are spawned as
/// tasks and report back over a channel.
pub fn run_tui<D>(executor: Arc<PipelineExecutor<D>>, mut app: App) -> TuiResult<()>
where
    D: ScrivanoDriver + 'static,
{
    // Setup terminal
    enable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to enable raw mode: {}",
            e
        )))
    })?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to setup terminal: {}",
            e
        )))
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalSetup(format!(
            "Failed to create terminal: {}",
            e
        )))
    })?;

    let events = EventHandler::new(250);
    let mut run_events: Option<mpsc::UnboundedReceiver<PipelineEvent>> = None;

    // Main loop
    while !app.should_quit {
        terminal
            .draw(|f| crate::ui::draw(f, &app))
            .map_err(|e| TuiError::new(TuiErrorKind::Rendering(format!("Failed to draw: {}", e))))?;

        drain_run_events(&mut app, &mut run_events);

        if let Ok(Some(event)) = events.next() {
            handle_event(&mut app, &executor, &mut run_events, event);
        }
    }

    // Cleanup terminal
    disable_raw_mode().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to disable raw mode: {}",
            e
        )))
    })?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to cleanup terminal: {}",
            e
        )))
    })?;
    terminal.show_cursor().map_err(|e| {
        TuiError::new(TuiErrorKind::TerminalRestore(format!(
            "Failed to show cursor: {}",
            e
        )))
    })?;

    Ok(())
}

/// Fold pending pipeline events into the app state.
fn drain_run_events(app: &mut App, run_events: &mut Option<mpsc::UnboundedReceiver<PipelineEvent>>) {
    let mut disconnected = false;
    if let Some(rx) = run_events.as_mut() {
        loop {
            match rx.try_recv() {
                Ok(event) => app.apply_event(event),
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
    }
    if disconnected {
        // The sender is gone; whatever state arrived is final.
        app.run_in_flight = false;
        *run_events = None;
    }
}

/// Handle a single terminal event.
fn handle_event<D>(
    app: &mut App,
    executor: &Arc<PipelineExecutor<D>>,
    run_events: &mut Option<mpsc::UnboundedReceiver<PipelineEvent>>,
    event: Event,
) where
    D: ScrivanoDriver + 'static,
{
    let Event::Key(key) = event else {
        return;
    };

    // Global bindings first.
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Tab => {
            app.next_tab();
            return;
        }
        KeyCode::BackTab => {
            app.previous_tab();
            return;
        }
        KeyCode::Esc => {
            if app.error.is_some() {
                app.dismiss_error();
            } else {
                app.quit();
            }
            return;
        }
        _ => {}
    }

    // The Run tab owns the keyboard for input editing.
    if app.tab == crate::Tab::Run {
        match key.code {
            KeyCode::Enter => start_run(app, executor, run_events),
            KeyCode::Backspace => {
                app.pipeline_input.pop();
            }
            KeyCode::Char(c) => app.pipeline_input.push(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('g') => app.generate(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_document(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_document(),
        _ => {}
    }
}

/// Spawn a pipeline run and subscribe the app to its events.
fn start_run<D>(
    app: &mut App,
    executor: &Arc<PipelineExecutor<D>>,
    run_events: &mut Option<mpsc::UnboundedReceiver<PipelineEvent>>,
) where
    D: ScrivanoDriver + 'static,
{
    if app.run_in_flight || executor.is_running() {
        app.status_message = "A pipeline run is already in progress".to_string();
        return;
    }

    let input = app.pipeline_input.clone();
    if input.trim().is_empty() {
        app.show_error("Pipeline input cannot be empty.");
        return;
    }

    let (tx, rx) = mpsc::unbounded_channel();
    *run_events = Some(rx);
    app.run = Some(PipelineRun::new(input.clone()));
    app.run_in_flight = true;
    app.dismiss_error();
    app.status_message = "Starting pipeline run".to_string();

    let executor = Arc::clone(executor);
    let pipeline = app.pipeline.clone();
    tokio::spawn(async move {
        // Guard refusals and validation failures close the channel without a
        // terminal event; the drain loop resets the in-flight flag.
        if let Err(e) = executor.execute(&pipeline, &input, Some(tx)).await {
            tracing::error!(error = %e, "Pipeline run was not started");
        }
    });
}
