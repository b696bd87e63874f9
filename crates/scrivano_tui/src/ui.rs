//! UI rendering for TUI.

use crate::app::{App, Tab};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, Tabs, Wrap},
};
use scrivano_interface::RunStatus;
use scrivano_pipeline::PipelineProvider;
use strum::IntoEnumIterator;

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_tab_bar(f, app, chunks[0]);

    match app.tab {
        Tab::Data => draw_data_view(f, app, chunks[1]),
        Tab::Template => draw_template_view(f, app, chunks[1]),
        Tab::Generate => draw_generate_view(f, app, chunks[1]),
        Tab::Agents => draw_agents_view(f, app, chunks[1]),
        Tab::Run => draw_run_view(f, app, chunks[1]),
    }

    draw_status_bar(f, app, chunks[2]);
}

/// Draw the tab bar.
#[tracing::instrument(skip_all)]
fn draw_tab_bar(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = Tab::iter().map(|tab| tab.to_string()).collect();
    let selected = Tab::iter().position(|tab| tab == app.tab).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL).title("Scrivano"))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

/// Draw the status bar with the error banner or help text.
#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    if let Some(error) = &app.error {
        let banner = Paragraph::new(format!("{error} (Esc to dismiss)"))
            .block(Block::default().borders(Borders::ALL).title("Error"))
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        f.render_widget(banner, area);
        return;
    }

    let help_text = match app.tab {
        Tab::Data => "Tab: switch | q: quit",
        Tab::Template => "g: generate documents | Tab: switch | q: quit",
        Tab::Generate => "↑↓: navigate | Tab: switch | q: quit",
        Tab::Agents => "Tab: switch | q: quit",
        Tab::Run => "type input | Enter: run | Tab: switch | Esc: quit",
    };

    let status_text = format!("{} | {}", app.status_message, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

/// Draw the dataset table.
#[tracing::instrument(skip_all)]
fn draw_data_view(f: &mut Frame, app: &App, area: Rect) {
    let Some(dataset) = &app.dataset else {
        let empty = Paragraph::new("No dataset loaded. Pass --dataset on launch.")
            .block(Block::default().borders(Borders::ALL).title("Dataset"))
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    };

    let header = Row::new(dataset.columns().clone())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    // Preview the first rows only; the full dataset stays in memory.
    let rows: Vec<Row> = dataset
        .records()
        .iter()
        .take(20)
        .map(|record| {
            Row::new(
                dataset
                    .columns()
                    .iter()
                    .map(|column| {
                        record
                            .get(column)
                            .map(|value| value.to_string())
                            .unwrap_or_default()
                    })
                    .collect::<Vec<String>>(),
            )
        })
        .collect();

    let widths: Vec<Constraint> = dataset
        .columns()
        .iter()
        .map(|_| Constraint::Min(12))
        .collect();

    let title = format!("Dataset ({} records)", dataset.len());
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(table, area);
}

/// Draw the template content beside its live preview.
#[tracing::instrument(skip_all)]
fn draw_template_view(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let template_text = if app.template.is_empty() {
        "No template loaded. Pass --template on launch."
    } else {
        app.template.as_str()
    };
    let template = Paragraph::new(template_text)
        .block(Block::default().borders(Borders::ALL).title("Template"))
        .wrap(Wrap { trim: false });
    f.render_widget(template, chunks[0]);

    let preview = Paragraph::new(app.template_preview())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Live Preview (first record)"),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(preview, chunks[1]);
}

/// Draw the generated document list and the selected document.
#[tracing::instrument(skip_all)]
fn draw_generate_view(f: &mut Frame, app: &App, area: Rect) {
    if app.documents.is_empty() {
        let empty = Paragraph::new("No documents generated yet. Press g on the Template tab.")
            .block(Block::default().borders(Borders::ALL).title("Documents"))
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(area);

    let rows: Vec<Row> = app
        .documents
        .iter()
        .enumerate()
        .map(|(i, document)| {
            let style = if i == app.selected_document {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![document.file_name.clone()]).style(style)
        })
        .collect();

    let list = Table::new(rows, [Constraint::Min(20)]).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Documents ({})", app.documents.len())),
    );
    f.render_widget(list, chunks[0]);

    if let Some(document) = app.documents.get(app.selected_document) {
        let detail = Paragraph::new(document.content.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(document.file_name.clone()),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(detail, chunks[1]);
    }
}

/// Draw the agent roster.
#[tracing::instrument(skip_all)]
fn draw_agents_view(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec!["Agent", "Model", "Temp", "Tokens", "Top-p", "Description"])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = PipelineProvider::agents(&app.pipeline)
        .iter()
        .map(|agent| {
            Row::new(vec![
                agent.name().clone(),
                agent.model().clone(),
                agent.temperature().to_string(),
                agent.max_tokens().to_string(),
                agent.top_p().to_string(),
                agent.description().clone(),
            ])
        })
        .collect();

    let title = format!("Agents ({})", app.agent_count());
    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(22),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(table, area);
}

/// Draw the run input, step history, and follow-up questions.
#[tracing::instrument(skip_all)]
fn draw_run_view(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input line
            Constraint::Min(0),    // Step history
            Constraint::Length(8), // Follow-up questions
        ])
        .split(area);

    let input = Paragraph::new(app.pipeline_input.as_str())
        .block(Block::default().borders(Borders::ALL).title("Input"));
    f.render_widget(input, chunks[0]);

    draw_run_history(f, app, chunks[1]);

    let follow_up = app
        .run
        .as_ref()
        .and_then(|run| run.follow_up.as_deref())
        .unwrap_or("");
    let questions = Paragraph::new(follow_up)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Follow-up Questions"),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(questions, chunks[2]);
}

/// Draw the per-step history of the displayed run.
#[tracing::instrument(skip_all)]
fn draw_run_history(f: &mut Frame, app: &App, area: Rect) {
    let Some(run) = &app.run else {
        let idle = Paragraph::new("Type an input and press Enter to start the pipeline.")
            .block(Block::default().borders(Borders::ALL).title("Steps"))
            .alignment(Alignment::Center);
        f.render_widget(idle, area);
        return;
    };

    let mut lines = Vec::new();
    for (index, step) in run.history.iter().enumerate() {
        let marker = if step.is_failed() {
            "✗"
        } else if step.output.is_empty() && app.run_in_flight {
            "…"
        } else {
            "✓"
        };
        lines.push(format!(
            "{} {}. {} [{}]",
            marker,
            index + 1,
            step.agent_name,
            step.model
        ));
        let body = if step.output.is_empty() && app.run_in_flight {
            "running"
        } else {
            step.output.as_str()
        };
        lines.push(format!("   {}", body));
        lines.push(String::new());
    }

    let title = match run.status {
        RunStatus::Running => "Steps (running)".to_string(),
        status => format!("Steps ({status})"),
    };
    let history = Paragraph::new(lines.join("\n"))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(history, area);
}
