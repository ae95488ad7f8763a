// FileHunt - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Search execution and result rendering

mod render;

use clap::Parser;
use filehunt::app::search::SearchManager;
use filehunt::core::model::{SearchProgress, SearchRequest};
use filehunt::core::traverse::TraverseConfig;
use filehunt::util;
use std::path::PathBuf;

/// FileHunt - recursive file-name search.
///
/// Point FileHunt at a file name and a start directory to walk the tree
/// and print every file or directory whose base name matches exactly.
#[derive(Parser, Debug)]
#[command(name = "FileHunt", version, about)]
struct Cli {
    /// Exact base name to search for (case-sensitive).
    name: String,

    /// Directory to start the search from.
    root: PathBuf,

    /// Emit one JSON object per event instead of plain text.
    #[arg(long = "json")]
    json: bool,

    /// Maximum directory recursion depth.
    #[arg(long = "max-depth")]
    max_depth: Option<usize>,

    /// Print match paths only, without the started/finished banner lines.
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "FileHunt starting"
    );

    let mut config = TraverseConfig::default();
    if let Some(depth) = cli.max_depth {
        config.max_depth = depth;
    }

    let mode = if cli.json {
        render::Mode::JsonLines
    } else {
        render::Mode::Text { quiet: cli.quiet }
    };
    let renderer = render::Renderer::new(mode);

    let request = SearchRequest::new(cli.root, cli.name);

    let mut manager = SearchManager::new();
    manager.start_search(request, config);

    // Drain the progress channel until the worker sends a terminal
    // message. recv() blocks, so the main thread sleeps between events.
    let Some(rx) = manager.progress_rx.take() else {
        tracing::error!("Search did not start");
        std::process::exit(1);
    };

    let mut invalid_input = false;
    while let Ok(msg) = rx.recv() {
        let terminal = msg.is_terminal();
        match msg {
            SearchProgress::Started => renderer.on_started(),
            SearchProgress::Match {
                path,
                matches_found,
            } => renderer.on_match(&path, matches_found),
            SearchProgress::Warning { message } => renderer.on_warning(&message),
            SearchProgress::Finished { summary } => renderer.on_finished(&summary),
            SearchProgress::Failed { error } => {
                renderer.on_invalid_input(&error);
                invalid_input = true;
            }
            // The CLI never requests cancellation; the arm exists so the
            // match stays exhaustive for library callers that do.
            SearchProgress::Cancelled => {}
        }
        if terminal {
            break;
        }
    }

    if invalid_input {
        std::process::exit(2);
    }
}
