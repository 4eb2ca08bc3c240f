//! Debug tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=quill::engine=trace` - per-operation state diffs
//!
//! # Log Files
//!
//! Logs are written to `~/.config/quill/logs/quill.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::Selection;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes to
/// `~/.config/quill/logs/quill.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer goes to stderr so stdout stays clean for command output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "quill.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of cursor/selection state for diffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSummary {
    pub len: usize,
    pub cursor: usize,
    pub selection: Selection,
    pub selection_active: bool,
}

impl StateSummary {
    /// Generate a diff description between two summaries
    pub fn diff(&self, other: &StateSummary) -> Option<String> {
        let mut changes = Vec::new();
        if self.len != other.len {
            changes.push(format!("len: {} → {}", self.len, other.len));
        }
        if self.cursor != other.cursor {
            changes.push(format!("cursor: {} → {}", self.cursor, other.cursor));
        }
        if self.selection_active != other.selection_active || self.selection != other.selection {
            if other.selection_active {
                changes.push(format!(
                    "selection: {}..{}",
                    other.selection.base, other.selection.end
                ));
            } else {
                changes.push("selection cleared".to_string());
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(len: usize, cursor: usize, selection: Option<(usize, usize)>) -> StateSummary {
        StateSummary {
            len,
            cursor,
            selection: selection
                .map(|(b, e)| Selection::new(b, e))
                .unwrap_or_default(),
            selection_active: selection.is_some(),
        }
    }

    #[test]
    fn test_diff_unchanged() {
        let s = summary(3, 1, None);
        assert_eq!(s.diff(&s), None);
    }

    #[test]
    fn test_diff_reports_changes() {
        let before = summary(3, 1, None);
        let after = summary(4, 2, Some((0, 2)));
        assert_eq!(
            before.diff(&after).as_deref(),
            Some("len: 3 → 4; cursor: 1 → 2; selection: 0..2")
        );
        assert_eq!(
            after.diff(&before).as_deref(),
            Some("len: 4 → 3; cursor: 2 → 1; selection cleared")
        );
    }
}
