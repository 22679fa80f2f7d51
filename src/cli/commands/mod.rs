//! CLI commands for promptq.
//!
//! Each submodule implements a single CLI command with its argument
//! parsing and execution logic.

/// Queue an image + prompt pair.
pub mod add;

/// Generate shell completion scripts.
pub mod completions;

/// Show the effective configuration.
pub mod config;

/// Export the queue to a JSON dataset file.
pub mod export;

/// Render an exported JSON file as a gallery.
pub mod gallery;

/// List pending entries.
pub mod pending;

/// Show store location, pending count, and recent entries.
pub mod status;
