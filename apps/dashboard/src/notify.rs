//! Notifications: the single channel pages use to tell the user what happened.
//!
//! Pages receive a `&dyn Notifier` instead of reaching for global state, so a
//! test can swap in a recorder and assert on what would have been shown.

use std::fmt;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    ValidationError,
    BackendUnavailable,
}

impl NoticeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NoticeKind::Success => "ok",
            NoticeKind::ValidationError => "invalid",
            NoticeKind::BackendUnavailable => "error",
        }
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Transient, non-blocking user notification sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

/// Prints notices to stdout, one line each, and mirrors them to the log.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        tracing::debug!(%kind, "notice: {message}");
        println!("[{kind}] {message}");
    }
}

/// What a page transition amounted to, once settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The transition ran and the backend answered.
    Completed,
    /// Invalid in the current state (or busy); nothing changed.
    Ignored,
    /// Input failed validation; no request was sent.
    Rejected,
    /// The request was sent and failed.
    Failed,
}

/// Converts an error into a notice at the page boundary.
pub fn report(notifier: &dyn Notifier, action: &str, err: &AppError) -> Outcome {
    let kind = err.kind();
    notifier.notify(kind, &err.user_message(action));
    match kind {
        NoticeKind::ValidationError => Outcome::Rejected,
        _ => Outcome::Failed,
    }
}
