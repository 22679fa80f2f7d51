//! Command-line interface for promptq.
//!
//! Provides the CLI commands for working with the local staging queue:
//! adding image + prompt pairs, listing and exporting the queue, and
//! rendering exported files as a gallery.

/// Individual CLI command implementations.
pub mod commands;

/// Output formatting utilities.
pub mod format;

pub use format::OutputFormat;
