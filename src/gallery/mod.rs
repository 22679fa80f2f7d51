//! Gallery flow: load an exported JSON file and turn it into cards.
//!
//! The gallery is fully decoupled from the staging queue. It reads any
//! user-chosen JSON file whose top-level value is an array and builds one
//! card per entry, best-effort: missing fields are simply absent from the
//! card, never an error.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde_json::Value;

/// Errors raised while loading a gallery file.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File the user picked.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// File the user picked.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The top-level JSON value is not an array.
    #[error("expected a top-level JSON array, found {found}")]
    InvalidFormat {
        /// JSON type name of the value that was found.
        found: &'static str,
    },
}

/// One renderable entry from a gallery file.
///
/// Every field is optional; a card carries whatever the entry provided.
#[derive(Debug, Clone, Default)]
pub struct GalleryCard {
    /// Entry id, when present.
    pub id: Option<String>,

    /// Image reference, used literally as stored.
    pub image_file_name: Option<String>,

    /// Prompt text, when present.
    pub prompt: Option<String>,

    /// Raw creation date string, when present.
    pub creation_date: Option<String>,
}

impl GalleryCard {
    fn from_value(value: &Value) -> Self {
        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(|s| s.to_string())
        };

        Self {
            id: field("id"),
            image_file_name: field("imageFileName"),
            prompt: field("prompt"),
            creation_date: field("creationDate"),
        }
    }

    /// Creation date rendered in the local timezone, second precision.
    /// An unparseable date is shown verbatim.
    pub fn formatted_date(&self) -> Option<String> {
        self.creation_date.as_deref().map(|raw| {
            match DateTime::parse_from_rfc3339(raw) {
                Ok(dt) => dt
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
                Err(_) => raw.to_string(),
            }
        })
    }
}

/// Loads a gallery file and builds its cards.
///
/// Requires the top-level value to be an array; each element becomes one
/// card regardless of its shape.
pub fn load_gallery(path: &Path) -> Result<Vec<GalleryCard>, GalleryError> {
    let contents = std::fs::read_to_string(path).map_err(|source| GalleryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|source| GalleryError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(GalleryError::InvalidFormat {
                found: json_type_name(&other),
            })
        }
    };

    Ok(entries.iter().map(GalleryCard::from_value).collect())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_gallery_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file.flush().expect("flush");
        file
    }

    #[test]
    fn test_load_full_entries() {
        let file = write_gallery_file(
            r#"[
  {
    "id": "1723046400000",
    "imageFileName": "fox.png",
    "prompt": "a red fox in snow",
    "creationDate": "2026-08-07T12:00:00.000Z"
  }
]"#,
        );

        let cards = load_gallery(file.path()).expect("load");

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id.as_deref(), Some("1723046400000"));
        assert_eq!(cards[0].image_file_name.as_deref(), Some("fox.png"));
        assert_eq!(cards[0].prompt.as_deref(), Some("a red fox in snow"));
        assert!(cards[0].formatted_date().is_some());
    }

    #[test]
    fn test_load_empty_array() {
        let file = write_gallery_file("[]");

        let cards = load_gallery(file.path()).expect("load");

        assert!(cards.is_empty());
    }

    #[test]
    fn test_missing_fields_render_best_effort() {
        let file = write_gallery_file(r#"[{"prompt": "only a prompt"}, {"id": "42"}, 7]"#);

        let cards = load_gallery(file.path()).expect("load");

        assert_eq!(cards.len(), 3, "Every element gets a card");
        assert_eq!(cards[0].prompt.as_deref(), Some("only a prompt"));
        assert!(cards[0].id.is_none());
        assert_eq!(cards[1].id.as_deref(), Some("42"));
        assert!(cards[2].id.is_none(), "Non-object entries yield empty cards");
    }

    #[test]
    fn test_top_level_object_is_invalid_format() {
        let file = write_gallery_file(r#"{"id": "1"}"#);

        let result = load_gallery(file.path());

        match result {
            Err(GalleryError::InvalidFormat { found }) => assert_eq!(found, "an object"),
            other => panic!("Expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let file = write_gallery_file("{not json");

        let result = load_gallery(file.path());

        assert!(matches!(result, Err(GalleryError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = load_gallery(Path::new("/nonexistent/gallery.json"));

        assert!(matches!(result, Err(GalleryError::Read { .. })));
    }

    #[test]
    fn test_formatted_date_falls_back_to_raw() {
        let card = GalleryCard {
            creation_date: Some("yesterday-ish".to_string()),
            ..Default::default()
        };

        assert_eq!(card.formatted_date().as_deref(), Some("yesterday-ish"));
    }

    #[test]
    fn test_formatted_date_absent_when_no_date() {
        let card = GalleryCard::default();

        assert!(card.formatted_date().is_none());
    }
}
