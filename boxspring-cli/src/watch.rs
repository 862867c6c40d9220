//! Watch a scene file and re-run it on every modification.

use boxspring_core::run_source;
use notify::{Event, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// Run the scene once, then block re-running it whenever the file is
/// modified. A broken edit prints the error and keeps watching; the
/// next good save runs again.
pub fn watch_file(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let path: PathBuf = path.canonicalize()?;

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res| {
        // Silently ignore send failures - they can happen during shutdown
        let _ = tx.send(res);
    })?;
    watcher.watch(&path, RecursiveMode::NonRecursive)?;

    run_and_report(&path);
    println!("watching {} (ctrl-c to stop)", path.display());

    for event in rx {
        match event {
            Ok(Event {
                kind: notify::EventKind::Modify(_),
                paths,
                ..
            }) => {
                if paths.contains(&path) {
                    run_and_report(&path);
                }
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("File watcher error: {}", e);
            }
        }
    }

    Ok(())
}

fn run_and_report(path: &Path) {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            return;
        }
    };

    match run_source(&source) {
        Ok(states) => {
            for (i, state) in states.iter().enumerate() {
                println!(
                    "particle {}: pos = ({}, {}, {})  vel = ({}, {}, {})",
                    i,
                    state.position.x,
                    state.position.y,
                    state.position.z,
                    state.velocity.x,
                    state.velocity.y,
                    state.velocity.z
                );
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
        }
    }
}
