//! Capture flow: turn a selected image and a prompt into a queue record.
//!
//! Submission runs a short state machine per attempt: validate the image
//! selection, validate the prompt, persist the entry. Validation failures
//! never touch the store.

use std::path::{Path, PathBuf};

use crate::storage::{Database, PendingEntry, StoreError};

/// Errors raised while capturing a submission.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    /// No image is currently selected.
    #[error("no image selected")]
    MissingImage,

    /// The selected path does not point to an existing file.
    #[error("image not found: {}", .0.display())]
    ImageNotFound(PathBuf),

    /// The selected file does not carry an image type. The selection is
    /// rejected outright rather than held.
    #[error("{file_name} is not an image file")]
    UnsupportedType {
        /// Name of the rejected file.
        file_name: String,
    },

    /// The prompt is empty or whitespace-only.
    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// The store refused the write (duplicate id, backend failure).
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// An image the user has picked but not yet submitted.
///
/// Only the file name travels into the queue; the path is kept so the
/// selection can be reported back to the user.
#[derive(Debug, Clone)]
pub struct ImageSelection {
    /// Full path as given by the user.
    pub path: PathBuf,

    /// File name component, the part that gets persisted.
    pub file_name: String,
}

impl ImageSelection {
    /// Validates and holds an image selection.
    ///
    /// The file must exist and its extension must appear in
    /// `image_extensions` (case-insensitive). A rejected file is never
    /// held: the caller gets an error and no selection.
    pub fn pick(path: &Path, image_extensions: &[String]) -> Result<Self, CaptureError> {
        if !path.is_file() {
            return Err(CaptureError::ImageNotFound(path.to_path_buf()));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| CaptureError::ImageNotFound(path.to_path_buf()))?;

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if !image_extensions.iter().any(|e| e.to_lowercase() == extension) {
            return Err(CaptureError::UnsupportedType { file_name });
        }

        Ok(Self {
            path: path.to_path_buf(),
            file_name,
        })
    }
}

/// Submits one image + prompt pair to the queue.
///
/// Preconditions are checked in order: an image must be selected, then
/// the trimmed prompt must be non-empty. Only then is an entry built and
/// persisted. Returns the stored entry on success.
pub fn submit(
    db: &Database,
    selection: Option<&ImageSelection>,
    prompt: &str,
) -> Result<PendingEntry, CaptureError> {
    let selection = selection.ok_or(CaptureError::MissingImage)?;

    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(CaptureError::EmptyPrompt);
    }

    let entry = PendingEntry::new(selection.file_name.clone(), prompt.to_string());
    db.insert_entry(&entry)?;

    tracing::debug!("queued entry {} ({})", entry.id, entry.image_file_name);
    Ok(entry)
}

/// Default extension allowlist used when no configuration overrides it.
pub fn default_image_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "avif"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn create_test_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().expect("Failed to create temp directory");
        let db = Database::open(&dir.path().join("test.db")).expect("Failed to open test database");
        (db, dir)
    }

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        File::create(&path).expect("Failed to create file");
        path
    }

    #[test]
    fn test_pick_accepts_image_extension() {
        let dir = tempdir().expect("tempdir");
        let path = touch(dir.path(), "fox.png");

        let selection =
            ImageSelection::pick(&path, &default_image_extensions()).expect("pick should succeed");

        assert_eq!(selection.file_name, "fox.png");
        assert_eq!(selection.path, path);
    }

    #[test]
    fn test_pick_is_case_insensitive() {
        let dir = tempdir().expect("tempdir");
        let path = touch(dir.path(), "FOX.PNG");

        let selection =
            ImageSelection::pick(&path, &default_image_extensions()).expect("pick should succeed");

        assert_eq!(selection.file_name, "FOX.PNG");
    }

    #[test]
    fn test_pick_rejects_non_image() {
        let dir = tempdir().expect("tempdir");
        let path = touch(dir.path(), "notes.txt");

        let result = ImageSelection::pick(&path, &default_image_extensions());

        match result {
            Err(CaptureError::UnsupportedType { file_name }) => {
                assert_eq!(file_name, "notes.txt");
            }
            other => panic!("Expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn test_pick_rejects_missing_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("absent.png");

        let result = ImageSelection::pick(&path, &default_image_extensions());

        assert!(matches!(result, Err(CaptureError::ImageNotFound(_))));
    }

    #[test]
    fn test_submit_persists_entry_and_bumps_count() {
        let (db, _db_dir) = create_test_db();
        let dir = tempdir().expect("tempdir");
        let path = touch(dir.path(), "fox.png");
        let selection = ImageSelection::pick(&path, &default_image_extensions()).expect("pick");

        let entry = submit(&db, Some(&selection), "a red fox in snow").expect("submit");

        assert_eq!(entry.image_file_name, "fox.png");
        assert_eq!(entry.prompt, "a red fox in snow");
        assert_eq!(db.pending_count().expect("count"), 1);

        let stored = db.list_entries().expect("list");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, entry.id);
    }

    #[test]
    fn test_submit_trims_prompt() {
        let (db, _db_dir) = create_test_db();
        let dir = tempdir().expect("tempdir");
        let path = touch(dir.path(), "fox.png");
        let selection = ImageSelection::pick(&path, &default_image_extensions()).expect("pick");

        let entry = submit(&db, Some(&selection), "  a red fox in snow  ").expect("submit");

        assert_eq!(entry.prompt, "a red fox in snow");
    }

    #[test]
    fn test_submit_without_selection_never_mutates_store() {
        let (db, _db_dir) = create_test_db();

        let result = submit(&db, None, "a red fox in snow");

        assert!(matches!(result, Err(CaptureError::MissingImage)));
        assert_eq!(db.pending_count().expect("count"), 0);
    }

    #[test]
    fn test_submit_empty_prompt_never_mutates_store() {
        let (db, _db_dir) = create_test_db();
        let dir = tempdir().expect("tempdir");
        let path = touch(dir.path(), "fox.png");
        let selection = ImageSelection::pick(&path, &default_image_extensions()).expect("pick");

        for prompt in ["", "   ", "\t\n"] {
            let result = submit(&db, Some(&selection), prompt);
            assert!(matches!(result, Err(CaptureError::EmptyPrompt)));
        }

        assert_eq!(db.pending_count().expect("count"), 0);
    }
}
