//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! scrivano binary.

mod commands;
mod generate;
mod run;
mod tui_handler;

pub use commands::{Cli, Commands};
pub use generate::{run_generate, run_preview};
pub use run::run_pipeline;
pub use tui_handler::launch_tui;
