// FileHunt - core/traverse.rs
//
// Recursive directory traversal and exact base-name matching.
//
// Architecture note: this module uses `walkdir` for the depth-first walk
// and reads only entry *names* and *types*, never file contents. Thread
// and channel plumbing is owned by the app layer (app::search), which
// drives this engine on a background thread.
//
//   - Invalid inputs are rejected up front, before any traversal.
//   - Per-entry I/O errors are non-fatal and collected as warnings.
//   - max_depth is enforced with an explicit named-constant upper bound.
//   - The root itself is never a candidate; matching starts below it.

use crate::core::model::SearchOutcome;
use crate::util::error::SearchError;
use std::ffi::OsStr;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for a single traversal.
#[derive(Debug, Clone)]
pub struct TraverseConfig {
    /// Maximum directory recursion depth.
    pub max_depth: usize,

    /// Optional cancel flag. When `Some`, the walk checks this flag on
    /// every iteration and stops early (returning partial results) if it
    /// is set to `true`. The caller (`app::search::run_search`) detects
    /// the cancel after `search_tree` returns and sends
    /// `SearchProgress::Cancelled`.
    ///
    /// `None` means no cancellation support (used in tests and by fully
    /// blocking callers).
    pub cancel_flag: Option<Arc<AtomicBool>>,
}

impl Default for TraverseConfig {
    fn default() -> Self {
        use crate::util::constants;
        Self {
            max_depth: constants::DEFAULT_MAX_DEPTH,
            cancel_flag: None,
        }
    }
}

// =============================================================================
// Traversal
// =============================================================================

/// Walk the tree under `root` depth-first and collect every file or
/// directory whose base name equals `name` exactly (case-sensitive).
///
/// # Progress reporting
/// `on_match` is called once per match, receiving the entry path and the
/// running count of matches found so far. The callback should be cheap
/// (e.g. send a channel message); it is called on the caller's thread,
/// before the path is appended to the outcome.
///
/// # Non-fatal errors
/// Entries that cannot be accessed due to permission or I/O errors are
/// recorded as human-readable strings in the outcome's warnings vector,
/// skipped, and do NOT cause the function to return `Err`.
///
/// # Fatal errors
/// Returns `Err` only when the inputs are invalid (`EmptyFileName`,
/// `EmptyRoot`, `RootNotFound`, `NotADirectory`, `PermissionDenied`); in
/// that case no traversal is performed and no matches are emitted.
pub fn search_tree<F>(
    root: &Path,
    name: &str,
    config: &TraverseConfig,
    mut on_match: F,
) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(&Path, usize),
{
    use crate::util::constants;

    // --- Pre-flight validation ---
    if name.is_empty() {
        return Err(SearchError::EmptyFileName);
    }
    if root.as_os_str().is_empty() {
        return Err(SearchError::EmptyRoot);
    }

    // We use `fs::metadata()` rather than `Path::exists()` / `Path::is_dir()`
    // because those helpers map ALL errors (including PermissionDenied) to
    // `false`, making it impossible to distinguish an access-denied root
    // from a path that genuinely does not exist.
    match std::fs::metadata(root) {
        Ok(meta) => {
            if !meta.is_dir() {
                return Err(SearchError::NotADirectory {
                    path: root.to_path_buf(),
                });
            }
        }
        Err(e) => match e.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return Err(SearchError::PermissionDenied {
                    path: root.to_path_buf(),
                    source: e,
                });
            }
            _ => {
                return Err(SearchError::RootNotFound {
                    path: root.to_path_buf(),
                });
            }
        },
    }

    // Clamp config limits to absolute bounds.
    let max_depth = config.max_depth.min(constants::ABSOLUTE_MAX_DEPTH);

    tracing::debug!(
        root = %root.display(),
        name,
        max_depth,
        "Traversal starting"
    );

    let mut outcome = SearchOutcome::default();
    let target = OsStr::new(name);

    // min_depth(1) keeps the root itself out of the candidate set: the
    // walk enumerates entries *under* the start directory, and `.`/`..`
    // self-references never appear.
    let walker = walkdir::WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false);

    for entry_result in walker {
        // Check the cancel flag on every iteration so large-tree searches
        // can be interrupted promptly without waiting for walkdir to finish.
        if config
            .cancel_flag
            .as_ref()
            .is_some_and(|f| f.load(Ordering::SeqCst))
        {
            tracing::debug!("Traversal cancelled by request");
            break;
        }

        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                // Inaccessible entry: non-fatal, record warning and move on.
                let path_str = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                let msg = format!("Cannot access '{path_str}': {e}");
                tracing::debug!(warning = %msg, "Traversal warning");
                outcome.warnings.push(msg);
                continue;
            }
        };

        outcome.entries_visited += 1;

        // Compare base names as raw OsStr so entries with non-UTF-8 names
        // are still visited and counted correctly.
        if entry.file_name() == target {
            let path = entry.path();
            let matches_found = outcome.matches.len() + 1;
            tracing::trace!(path = %path.display(), matches_found, "Match");
            on_match(path, matches_found);
            outcome.matches.push(path.to_path_buf());
        }
    }

    tracing::debug!(
        matches = outcome.matches.len(),
        visited = outcome.entries_visited,
        warnings = outcome.warnings.len(),
        "Traversal complete"
    );

    Ok(outcome)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn make_temp_tree() -> TempDir {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();

        fs::write(root.join("a.txt"), "alpha").expect("write a.txt");
        fs::write(root.join("b.txt"), "beta").expect("write b.txt");

        let sub = root.join("sub");
        fs::create_dir(&sub).expect("mkdir sub");
        fs::write(sub.join("a.txt"), "nested alpha").expect("write sub/a.txt");
        fs::write(sub.join("c.txt"), "gamma").expect("write sub/c.txt");

        dir
    }

    fn search(root: &Path, name: &str) -> Result<SearchOutcome, SearchError> {
        search_tree(root, name, &TraverseConfig::default(), |_, _| {})
    }

    #[test]
    fn test_finds_matches_at_all_depths() {
        let dir = make_temp_tree();
        let outcome = search(dir.path(), "a.txt").unwrap();

        assert_eq!(outcome.matches.len(), 2, "got {:?}", outcome.matches);
        assert!(outcome.matches.contains(&dir.path().join("a.txt")));
        assert!(outcome.matches.contains(&dir.path().join("sub").join("a.txt")));
        assert!(outcome.warnings.is_empty(), "unexpected: {:?}", outcome.warnings);
        // a.txt, b.txt, sub, sub/a.txt, sub/c.txt
        assert_eq!(outcome.entries_visited, 5);
    }

    #[test]
    fn test_no_matches_yields_empty_outcome() {
        let dir = make_temp_tree();
        let outcome = search(dir.path(), "x.txt").unwrap();
        assert!(outcome.matches.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_directory_entries_are_candidates() {
        let dir = make_temp_tree();
        let outcome = search(dir.path(), "sub").unwrap();
        assert_eq!(outcome.matches.len(), 1);
        assert!(
            outcome.matches[0].is_dir(),
            "a matching directory must be reported, not just files"
        );
    }

    #[test]
    fn test_match_is_exact_and_case_sensitive() {
        let dir = make_temp_tree();
        assert!(search(dir.path(), "A.txt").unwrap().matches.is_empty());
        assert!(search(dir.path(), "a.tx").unwrap().matches.is_empty());
        assert!(search(dir.path(), ".txt").unwrap().matches.is_empty());
    }

    #[test]
    fn test_root_itself_is_not_a_candidate() {
        let dir = tempfile::tempdir().unwrap();
        let outer = dir.path().join("outer");
        fs::create_dir(&outer).unwrap();
        fs::write(outer.join("outer"), "inner file").unwrap();

        // The entry *inside* the root matches; the root directory does not.
        let outcome = search(&outer, "outer").unwrap();
        assert_eq!(outcome.matches, vec![outer.join("outer")]);
    }

    #[test]
    fn test_parent_directory_reported_before_its_children() {
        let dir = tempfile::tempdir().unwrap();
        let m = dir.path().join("m");
        fs::create_dir(&m).unwrap();
        fs::write(m.join("m"), "leaf").unwrap();

        let outcome = search(dir.path(), "m").unwrap();
        assert_eq!(
            outcome.matches,
            vec![m.clone(), m.join("m")],
            "subdirectories are expanded as encountered"
        );
    }

    #[test]
    fn test_empty_name_rejected_before_traversal() {
        let dir = make_temp_tree();
        let mut calls = 0usize;
        let result = search_tree(dir.path(), "", &TraverseConfig::default(), |_, _| {
            calls += 1;
        });
        assert!(matches!(result, Err(SearchError::EmptyFileName)));
        assert_eq!(calls, 0, "no partial work on invalid input");
    }

    #[test]
    fn test_empty_root_rejected_before_traversal() {
        let result = search(Path::new(""), "a.txt");
        assert!(matches!(result, Err(SearchError::EmptyRoot)));
    }

    #[test]
    fn test_root_not_found() {
        let result = search(Path::new("/nonexistent/path/filehunt"), "a.txt");
        assert!(matches!(result, Err(SearchError::RootNotFound { .. })));
    }

    #[test]
    fn test_root_not_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "content").unwrap();
        let result = search(&file, "a.txt");
        assert!(matches!(result, Err(SearchError::NotADirectory { .. })));
    }

    #[test]
    fn test_empty_directory_yields_zero() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = search(dir.path(), "a.txt").unwrap();
        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.entries_visited, 0);
    }

    #[test]
    fn test_on_match_receives_running_count() {
        let dir = make_temp_tree();
        let mut seen: Vec<(PathBuf, usize)> = Vec::new();
        let outcome = search_tree(
            dir.path(),
            "a.txt",
            &TraverseConfig::default(),
            |path, count| seen.push((path.to_path_buf(), count)),
        )
        .unwrap();

        assert_eq!(seen.len(), outcome.matches.len());
        for (i, (path, count)) in seen.iter().enumerate() {
            assert_eq!(*count, i + 1, "running count starts at 1");
            assert_eq!(path, &outcome.matches[i], "callback order == outcome order");
        }
    }

    #[test]
    fn test_max_depth_limits_descent() {
        let dir = make_temp_tree();
        let config = TraverseConfig {
            max_depth: 1,
            ..Default::default()
        };
        let outcome = search_tree(dir.path(), "a.txt", &config, |_, _| {}).unwrap();
        assert_eq!(
            outcome.matches,
            vec![dir.path().join("a.txt")],
            "sub/a.txt lies below the depth limit"
        );
    }

    #[test]
    fn test_preset_cancel_flag_stops_immediately() {
        let dir = make_temp_tree();
        let config = TraverseConfig {
            cancel_flag: Some(Arc::new(AtomicBool::new(true))),
            ..Default::default()
        };
        let outcome = search_tree(dir.path(), "a.txt", &config, |_, _| {}).unwrap();
        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.entries_visited, 0, "cancel is checked before each entry");
    }
}
