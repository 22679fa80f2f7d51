//! Core data models for promptq
//!
//! These represent the records held in the local staging queue and the
//! shape they take on disk when exported.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One queued image-filename + prompt pair awaiting export.
///
/// Entries are immutable once created: the capture flow writes them, the
/// export flow reads and deletes them. Serde names are camelCase so the
/// exported JSON reads `{id, imageFileName, prompt, creationDate}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingEntry {
    /// Unique identifier, derived from the creation timestamp in
    /// milliseconds. Primary key in the store.
    pub id: String,

    /// Original file name of the attached image (name only, no path,
    /// no binary content).
    pub image_file_name: String,

    /// User-supplied prompt text. Never persisted empty.
    pub prompt: String,

    /// ISO-8601 creation timestamp, set when the entry is built.
    pub creation_date: String,
}

impl PendingEntry {
    /// Builds a new entry stamped with the current time.
    pub fn new(image_file_name: String, prompt: String) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            image_file_name,
            prompt,
            creation_date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Parses the stored creation date, if it is valid ISO-8601.
    pub fn creation_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.creation_date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
