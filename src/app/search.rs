// FileHunt - app/search.rs
//
// Search lifecycle management. Runs the traversal on a background
// thread, sending progress messages to the caller's thread via an mpsc
// channel.
//
// Architecture:
//   - `SearchManager` lives on the caller's thread; `run_search` runs on
//     a background thread.
//   - An `Arc<AtomicBool>` cancel flag allows the caller to stop the
//     search cooperatively.
//   - All cross-thread communication is via `SearchProgress` channel
//     messages. Each search gets a fresh channel, so two searches never
//     interleave or duplicate results across requests.

use crate::core::model::{SearchProgress, SearchRequest, SearchSummary};
use crate::core::traverse::{self, TraverseConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Instant;

// =============================================================================
// SearchManager
// =============================================================================

/// Manages a search operation on a background thread.
pub struct SearchManager {
    /// Channel receiver for the caller to poll progress messages.
    pub progress_rx: Option<mpsc::Receiver<SearchProgress>>,

    /// Cancel flag shared with the background thread.
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl SearchManager {
    pub fn new() -> Self {
        Self {
            progress_rx: None,
            cancel_flag: None,
        }
    }

    /// Start a search for `request` with the given traversal config.
    ///
    /// Spawns a background thread immediately; progress is sent over the
    /// channel. If a search is already running it is cancelled first, so
    /// at most one traversal runs per outstanding request.
    pub fn start_search(&mut self, request: SearchRequest, mut config: TraverseConfig) {
        // Cancel any existing search.
        self.cancel_search();

        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));

        self.progress_rx = Some(rx);
        self.cancel_flag = Some(Arc::clone(&cancel));
        config.cancel_flag = Some(Arc::clone(&cancel));

        std::thread::spawn(move || {
            run_search(request, config, tx, cancel);
        });

        tracing::info!("Search started");
    }

    /// Request cancellation of the running search.
    /// The background thread will send `SearchProgress::Cancelled` and exit.
    pub fn cancel_search(&mut self) {
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::SeqCst);
        }
        self.cancel_flag = None;
    }

    /// Poll for progress messages without blocking. Returns all pending messages.
    pub fn poll_progress(&self) -> Vec<SearchProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

impl Default for SearchManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Background search pipeline
// =============================================================================

/// Full search pipeline: validate → traverse → summarise.
///
/// Runs on a background thread. Sends `SearchProgress` messages to `tx`.
/// The cancel flag is threaded into the traversal config so the walk
/// stops promptly mid-tree.
fn run_search(
    request: SearchRequest,
    config: TraverseConfig,
    tx: mpsc::Sender<SearchProgress>,
    cancel: Arc<AtomicBool>,
) {
    macro_rules! send {
        ($msg:expr) => {
            if tx.send($msg).is_err() {
                return; // Receiver dropped (caller gone); exit quietly.
            }
        };
    }

    send!(SearchProgress::Started);

    let start = Instant::now();

    let tx_matches = tx.clone();
    let outcome = match traverse::search_tree(
        &request.root,
        &request.name,
        &config,
        |path, matches_found| {
            // Non-fatal: ignore send error (caller may have gone away).
            let _ = tx_matches.send(SearchProgress::Match {
                path: path.to_path_buf(),
                matches_found,
            });
        },
    ) {
        Ok(outcome) => outcome,
        Err(e) => {
            // Invalid input: rejected before any traversal, no partial work.
            send!(SearchProgress::Failed {
                error: e.to_string(),
            });
            return;
        }
    };

    // Forward traversal warnings as non-fatal search warnings.
    let entries_skipped = outcome.warnings.len();
    for warning in outcome.warnings {
        send!(SearchProgress::Warning { message: warning });
    }

    if cancel.load(Ordering::SeqCst) {
        send!(SearchProgress::Cancelled);
        return;
    }

    let total_matches = outcome.matches.len();
    let summary = SearchSummary {
        total_matches,
        entries_visited: outcome.entries_visited,
        entries_skipped,
        duration: start.elapsed(),
    };

    send!(SearchProgress::Finished { summary });

    tracing::info!(
        matches = total_matches,
        visited = outcome.entries_visited,
        skipped = entries_skipped,
        "Search complete"
    );
}
