//! Gallery command - render an exported JSON file as cards.
//!
//! Reads a user-chosen JSON file (independent of the staging queue) and
//! prints one card per entry with whatever fields are present.

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::gallery::{load_gallery, GalleryCard};
use crate::notice::{self, Notice};

/// Arguments for the gallery command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    promptq gallery images_prompts_2026_08_07_14-30-05.json\n    \
    promptq gallery ~/datasets/batch.json")]
pub struct Args {
    /// JSON file to display
    #[arg(value_name = "FILE")]
    #[arg(long_help = "A previously exported dataset file, or any JSON file whose\n\
        top-level value is an array. Entries are rendered best-effort\n\
        with whatever fields they carry.")]
    pub file: PathBuf,
}

/// Executes the gallery command.
pub fn run(args: Args) -> Result<()> {
    let cards = load_gallery(&args.file)?;

    if cards.is_empty() {
        println!("{}", "No entries to display.".dimmed());
        return Ok(());
    }

    for (index, card) in cards.iter().enumerate() {
        render_card(index + 1, card);
        println!();
    }

    let bare = cards
        .iter()
        .filter(|c| {
            c.id.is_none()
                && c.image_file_name.is_none()
                && c.prompt.is_none()
                && c.creation_date.is_none()
        })
        .count();
    if bare > 0 {
        notice::render(&Notice::warning(format!(
            "{bare} {} had no recognizable fields",
            if bare == 1 { "entry" } else { "entries" }
        )));
    }

    println!(
        "{}",
        format!(
            "{} {}",
            cards.len(),
            if cards.len() == 1 { "entry" } else { "entries" }
        )
        .dimmed()
    );

    Ok(())
}

/// Prints one gallery card. Lines appear only for fields the entry has.
fn render_card(number: usize, card: &GalleryCard) {
    match &card.id {
        Some(id) => println!("{} {}", format!("[{number}]").bold(), id.dimmed()),
        None => println!("{}", format!("[{number}]").bold()),
    }

    if let Some(ref image) = card.image_file_name {
        println!("  {}   {}", "Image:".dimmed(), image.yellow());
    }
    if let Some(ref prompt) = card.prompt {
        println!("  {}  {}", "Prompt:".dimmed(), prompt);
    }
    if let Some(date) = card.formatted_date() {
        println!("  {} {}", "Created:".dimmed(), date);
    }
}
