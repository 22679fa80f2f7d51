//! Status command - show current queue state.
//!
//! Displays the store location, the pending entry count, and the most
//! recently queued entries.

use anyhow::Result;
use colored::Colorize;

use crate::storage::{db::default_db_path, Database};

/// Executes the status command.
pub fn run() -> Result<()> {
    println!("{}", "promptq".bold().cyan());
    println!("{}", "Local staging queue for image + prompt pairs".dimmed());
    println!();

    let db_path = default_db_path()?;
    let db = Database::open(&db_path)?;

    let count = db.pending_count()?;

    println!("{}", "Store:".bold());
    println!("  Location: {}", db_path.display());
    if let Some(size) = db.file_size() {
        println!("  Size:     {size} bytes");
    }
    println!("  Pending entries: {count}");

    if count == 0 {
        println!();
        println!(
            "{}",
            "Hint: Run 'promptq add <image> --prompt \"...\"' to queue an entry".yellow()
        );
        return Ok(());
    }

    // Show the most recently queued entries
    let entries = db.list_entries()?;
    let recent = entries.iter().rev().take(5);

    println!();
    println!("{}", "Recent entries:".bold());
    for entry in recent {
        let ago_str = match entry.creation_datetime() {
            Some(created) => {
                let hours = chrono::Utc::now().signed_duration_since(created).num_hours();
                if hours < 1 {
                    "just now".to_string()
                } else if hours < 24 {
                    format!("{hours} hours ago")
                } else {
                    format!("{} days ago", hours / 24)
                }
            }
            None => "-".to_string(),
        };

        println!(
            "  {}  {:12}  {}  {}",
            entry.id.cyan(),
            ago_str.dimmed(),
            entry.image_file_name.yellow(),
            preview(&entry.prompt)
        );
    }

    println!();
    println!(
        "{}",
        "Run 'promptq export' to save the queue to a JSON file".dimmed()
    );

    Ok(())
}

/// Shortens a prompt for the one-line listing.
fn preview(prompt: &str) -> String {
    const MAX: usize = 48;
    if prompt.chars().count() <= MAX {
        prompt.to_string()
    } else {
        let cut: String = prompt.chars().take(MAX - 3).collect();
        format!("{cut}...")
    }
}
