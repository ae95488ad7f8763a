// FileHunt - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// thread/channel plumbing.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Search request
// =============================================================================

/// The two user inputs that define a search.
///
/// Immutable once a search starts; the worker thread owns its own copy,
/// so a new request can never mutate a traversal already in flight.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Directory the traversal starts from.
    pub root: PathBuf,

    /// Base name an entry must equal exactly (case-sensitive).
    pub name: String,
}

impl SearchRequest {
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
        }
    }
}

// =============================================================================
// Search outcome (output of the traversal engine)
// =============================================================================

/// Everything a finished traversal produced.
///
/// This is the buffered form of the result; callers that want streaming
/// consume the per-match callback (or the `SearchProgress` channel) and
/// treat this struct as the terminal summary source.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    /// Full paths of matching entries, in traversal order.
    pub matches: Vec<PathBuf>,

    /// Human-readable descriptions of entries that could not be read and
    /// were skipped. One warning per skipped entry.
    pub warnings: Vec<String>,

    /// Files and directories visited during the walk.
    pub entries_visited: usize,
}

// =============================================================================
// Search summary
// =============================================================================

/// Summary statistics for a completed search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchSummary {
    /// Total entries whose base name equalled the target.
    pub total_matches: usize,

    /// Files and directories visited during the walk.
    pub entries_visited: usize,

    /// Entries skipped because they could not be read (permissions,
    /// broken metadata). Each skip also produced a warning.
    pub entries_skipped: usize,

    /// Wall-clock traversal duration.
    pub duration: Duration,
}

// =============================================================================
// Search progress (for caller updates)
// =============================================================================

/// Progress messages sent from the search thread to the caller's thread.
///
/// Each search gets its own channel, so messages from two searches can
/// never interleave. A single producer on a FIFO channel preserves
/// traversal order end to end.
#[derive(Debug, Clone)]
pub enum SearchProgress {
    /// Traversal has started.
    Started,

    /// An entry matched the target name. `matches_found` is the running
    /// match count, starting at 1.
    Match { path: PathBuf, matches_found: usize },

    /// A non-fatal warning (an entry could not be read and was skipped).
    Warning { message: String },

    /// Traversal visited every entry and finished normally.
    Finished { summary: SearchSummary },

    /// The search was rejected before any traversal happened
    /// (empty name, missing root, root not a directory).
    Failed { error: String },

    /// The search was cancelled before completion.
    Cancelled,
}

impl SearchProgress {
    /// True for messages after which no further message will arrive.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Finished { .. } | Self::Failed { .. } | Self::Cancelled
        )
    }
}
