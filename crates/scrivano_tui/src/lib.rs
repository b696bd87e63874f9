//! Terminal User Interface for the Scrivano workflow.
//!
//! Provides an interactive TUI with tabbed views for loading data, editing
//! the template, reviewing generated documents, inspecting the agent roster,
//! and watching pipeline runs advance step by step. Built with ratatui for
//! terminal rendering.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod events;
mod runner;
mod ui;

pub use app::{App, Tab};
pub use events::{Event, EventHandler};
pub use runner::run_tui;
