//! promptq - a local staging queue for image + prompt pairs
//!
//! promptq queues image-filename + prompt records in a local SQLite
//! store, exports the whole queue as a timestamped JSON dataset, and
//! renders previously exported files as a terminal gallery.

pub mod capture;
pub mod config;
pub mod export;
pub mod gallery;
pub mod notice;
pub mod storage;
