// FileHunt - render.rs
//
// Presentation sink for the CLI. Translates search progress events into
// stdout/stderr output, as plain text or JSON lines.
//
// Match paths and the completion summary go to stdout; warnings and
// invalid-input reports go to stderr so stdout stays pipeline-clean.

use filehunt::core::model::SearchSummary;
use serde_json::json;
use std::path::Path;

/// Output mode selected on the command line.
#[derive(Debug, Clone, Copy)]
pub enum Mode {
    /// Human-readable text: banner lines plus one path per match.
    Text { quiet: bool },

    /// One JSON object per event, for machine consumption.
    JsonLines,
}

/// Renders search events for the terminal.
pub struct Renderer {
    mode: Mode,
}

impl Renderer {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn on_started(&self) {
        if let Mode::Text { quiet: false } = self.mode {
            println!("Search started...");
        }
        // JSON consumers key off the match/finished events.
    }

    pub fn on_match(&self, path: &Path, matches_found: usize) {
        match self.mode {
            Mode::Text { .. } => println!("{}", path.display()),
            Mode::JsonLines => println!("{}", match_line(path, matches_found)),
        }
    }

    pub fn on_warning(&self, message: &str) {
        match self.mode {
            Mode::Text { .. } => eprintln!("warning: {message}"),
            Mode::JsonLines => println!("{}", warning_line(message)),
        }
    }

    pub fn on_finished(&self, summary: &SearchSummary) {
        match self.mode {
            Mode::Text { quiet: false } => {
                println!("Search finished. {} match(es).", summary.total_matches);
                if summary.entries_skipped > 0 {
                    eprintln!(
                        "{} entr(ies) could not be read and were skipped.",
                        summary.entries_skipped
                    );
                }
            }
            Mode::Text { .. } => {}
            Mode::JsonLines => println!("{}", finished_line(summary)),
        }
    }

    pub fn on_invalid_input(&self, reason: &str) {
        match self.mode {
            Mode::Text { .. } => eprintln!("Error: {reason}"),
            Mode::JsonLines => eprintln!("{}", json!({ "event": "error", "reason": reason })),
        }
    }
}

// =============================================================================
// JSON line builders
// =============================================================================

// Paths are rendered lossily (`display()`) so a non-UTF-8 name degrades
// to replacement characters instead of aborting the output stream.

fn match_line(path: &Path, matches_found: usize) -> String {
    json!({
        "event": "match",
        "path": path.display().to_string(),
        "matches_found": matches_found,
    })
    .to_string()
}

fn warning_line(message: &str) -> String {
    json!({ "event": "warning", "message": message }).to_string()
}

fn finished_line(summary: &SearchSummary) -> String {
    json!({ "event": "finished", "summary": summary }).to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_match_line_shape() {
        let line = match_line(&PathBuf::from("/tmp/t/a.txt"), 2);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["event"], "match");
        assert_eq!(value["path"], "/tmp/t/a.txt");
        assert_eq!(value["matches_found"], 2);
    }

    #[test]
    fn test_finished_line_carries_total() {
        let summary = SearchSummary {
            total_matches: 3,
            entries_visited: 10,
            entries_skipped: 1,
            duration: Duration::from_millis(5),
        };
        let line = finished_line(&summary);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["event"], "finished");
        assert_eq!(value["summary"]["total_matches"], 3);
        assert_eq!(value["summary"]["entries_skipped"], 1);
    }
}
