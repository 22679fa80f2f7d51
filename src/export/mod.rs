//! Export flow: drain the staging queue into a timestamped JSON file.
//!
//! The full list of pending entries is serialized as a pretty-printed
//! top-level array and written to `images_prompts_<timestamp>.json`. The
//! queue is cleared only after the write has returned success; a failed
//! write leaves every entry in place.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::storage::{Database, StoreError};

/// Errors raised while exporting the queue.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Reading or clearing the queue failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The dataset could not be serialized.
    #[error("failed to serialize entries: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The dataset file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Target file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// What an export attempt did.
#[derive(Debug)]
pub enum ExportOutcome {
    /// Entries were written to `path`. `cleared` is false when the caller
    /// asked to keep the queue.
    Saved {
        /// The dataset file that was written.
        path: PathBuf,
        /// Number of entries in the file.
        count: usize,
        /// Whether the queue was emptied afterwards.
        cleared: bool,
    },

    /// The queue was empty. Nothing written, nothing cleared. This is a
    /// no-op outcome, not an error.
    NothingToSave,
}

/// Dataset file name for an export at the given local time.
///
/// Second precision, with filesystem-safe separators: `_` joins the date
/// fields and separates date from time, `-` joins the time fields.
pub fn export_filename(at: DateTime<Local>) -> String {
    format!("images_prompts_{}.json", at.format("%Y_%m_%d_%H-%M-%S"))
}

/// Exports all pending entries to a file in `output_dir`.
///
/// With `keep` set the queue is left untouched after the write;
/// otherwise it is cleared once the file is on disk.
pub fn export_pending(
    db: &Database,
    output_dir: &Path,
    keep: bool,
) -> Result<ExportOutcome, ExportError> {
    let entries = db.list_entries()?;

    if entries.is_empty() {
        return Ok(ExportOutcome::NothingToSave);
    }

    let json = serde_json::to_string_pretty(&entries)?;
    let path = output_dir.join(export_filename(Local::now()));

    std::fs::write(&path, &json).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;

    let cleared = if keep {
        false
    } else {
        let deleted = db.clear_entries()?;
        tracing::debug!("cleared {deleted} entries after export");
        true
    };

    Ok(ExportOutcome::Saved {
        path,
        count: entries.len(),
        cleared,
    })
}
