//! Transient user notices.
//!
//! Flows report their outcomes as notice values; the rendering surface
//! decides how to present them. The terminal renderer prints one colored
//! line per notice, while the display duration is carried on the value
//! for surfaces that dismiss notices on a timer.

use std::time::Duration;

use colored::Colorize;

/// How long a surface should keep a notice visible before dismissing it.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(5);

/// The kind of a notice, driving its presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// An operation completed.
    Success,
    /// An operation failed.
    Error,
    /// Neutral information, including no-op outcomes.
    Info,
    /// Something succeeded but deserves attention.
    Warning,
}

/// A transient message for the user.
#[derive(Debug, Clone)]
pub struct Notice {
    /// Presentation kind.
    pub kind: NoticeKind,
    /// Message text.
    pub message: String,
}

impl Notice {
    /// A success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// An error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// An informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    /// A warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    /// How long this notice should stay visible on timed surfaces.
    #[allow(dead_code)]
    pub fn display_duration(&self) -> Duration {
        DISPLAY_DURATION
    }
}

/// Prints a notice to the terminal. Errors go to stderr, everything else
/// to stdout.
pub fn render(notice: &Notice) {
    match notice.kind {
        NoticeKind::Success => println!("{}", notice.message.green()),
        NoticeKind::Error => eprintln!("{} {}", "Error:".red().bold(), notice.message),
        NoticeKind::Info => println!("{}", notice.message.dimmed()),
        NoticeKind::Warning => println!("{}", notice.message.yellow()),
    }
}
