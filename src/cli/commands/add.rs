//! Add command - queue an image + prompt pair.
//!
//! Validates the selected image and the prompt, persists a new pending
//! entry, and reports the refreshed pending count.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::capture::{self, ImageSelection};
use crate::config::Config;
use crate::notice::{self, Notice};
use crate::storage::Database;

/// Arguments for the add command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    promptq add fox.png --prompt \"a red fox in snow\"\n    \
    promptq add ~/shots/owl.jpg -p \"an owl at dusk\"")]
pub struct Args {
    /// Path to the image file to queue
    #[arg(value_name = "IMAGE")]
    #[arg(long_help = "Path to the image to attach. Only the file name is\n\
        stored in the queue; the image bytes stay where they are.")]
    pub image: PathBuf,

    /// Prompt text to pair with the image
    #[arg(short, long, value_name = "TEXT")]
    pub prompt: String,
}

/// Executes the add command.
///
/// Runs the capture flow: pick the image, validate the prompt, persist
/// the entry.
pub fn run(args: Args) -> Result<()> {
    let config = Config::load()?;
    let db = Database::open_default()?;

    let selection = ImageSelection::pick(&args.image, &config.image_extensions)?;
    let entry = capture::submit(&db, Some(&selection), &args.prompt)?;

    notice::render(&Notice::success(format!(
        "Queued {} (id {})",
        entry.image_file_name, entry.id
    )));

    let count = db.pending_count()?;
    println!("  {} {}", "Pending entries:".dimmed(), count);

    Ok(())
}
