//! Persistence and mutation of the extension collection.
//!
//! Load chain at startup: persisted JSON, then the seed resource, then empty.
//! Every mutation marks the state dirty; the runtime flushes the full
//! collection back to disk as one write. Failures never surface to the user:
//! they are logged and the in-memory state stays authoritative.

use std::fs;
use std::path::Path;

use crate::state::{AppState, ExtensionItem};

/// What: Load the initial collection.
///
/// Inputs:
/// - `path`: Location of the persisted JSON collection
/// - `seed`: Seed resource locator used when nothing valid is persisted
/// - `fresh`: When `true`, skip the persisted copy and re-seed
///
/// Output:
/// - The decoded persisted collection when present and well-formed; else the
///   seed collection (persisted immediately so later runs skip the fetch);
///   else an empty collection with the failure logged.
pub async fn load_initial(path: &Path, seed: &str, fresh: bool) -> Vec<ExtensionItem> {
    if !fresh && let Ok(s) = fs::read_to_string(path) {
        match serde_json::from_str::<Vec<ExtensionItem>>(&s) {
            Ok(items) => {
                tracing::info!(path = %path.display(), count = items.len(), "loaded persisted extensions");
                return items;
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "persisted extensions malformed; falling back to seed"
                );
            }
        }
    }
    match crate::sources::fetch_seed(seed).await {
        Ok(items) => {
            tracing::info!(seed, count = items.len(), "seeded extensions");
            persist(path, &items);
            items
        }
        Err(e) => {
            tracing::error!(seed, error = %e, "failed to load seed resource");
            Vec::new()
        }
    }
}

/// Serialize and write the full collection, replacing any prior value.
///
/// Write failure (e.g. quota or permissions) is logged, not propagated; the
/// UI keeps reflecting the unsaved change for the rest of the session.
pub fn persist(path: &Path, items: &[ExtensionItem]) {
    match serde_json::to_string(items) {
        Ok(s) => {
            if let Some(dir) = path.parent() {
                let _ = fs::create_dir_all(dir);
            }
            match fs::write(path, &s) {
                Ok(()) => {
                    tracing::trace!(path = %path.display(), bytes = s.len(), "persisted extensions");
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to persist extensions");
                }
            }
        }
        Err(e) => tracing::warn!(error = %e, "failed to serialize extensions"),
    }
}

/// Set the active flag of the first record named `name` and mark the state
/// dirty. A missing name is a silent no-op; duplicates beyond the first are
/// left untouched.
pub fn set_active(app: &mut AppState, name: &str, value: bool) -> bool {
    let Some(it) = app.items.iter_mut().find(|it| it.name == name) else {
        return false;
    };
    it.is_active = value;
    app.items_dirty = true;
    true
}

/// Remove the first record named `name` and mark the state dirty. Exactly one
/// record is removed; a missing name is a silent no-op.
pub fn remove(app: &mut AppState, name: &str) -> bool {
    let Some(idx) = app.items.iter().position(|it| it.name == name) else {
        return false;
    };
    app.items.remove(idx);
    app.items_dirty = true;
    true
}

/// Flush the collection to disk if marked dirty. The flag is cleared either
/// way; persist failures are not retried within the session.
pub fn maybe_flush_items(app: &mut AppState) {
    if !app.items_dirty {
        return;
    }
    if app.dry_run {
        tracing::debug!("dry run: skipping persistence write");
    } else {
        persist(&app.items_path, &app.items);
    }
    app.items_dirty = false;
}
