//! Pure view derivation and the intent dispatcher.
//!
//! [`visible_items`] is the only place filter and query semantics live; it is
//! deterministic, side-effect free, and re-evaluated on every redraw. All
//! state mutation funnels through [`apply_action`].

use crate::state::{Action, AppState, ExtensionItem, Filter};

/// What: Derive the subset of `items` eligible for display.
///
/// Inputs:
/// - `items`: Full ordered collection
/// - `filter`: Category filter (all/active/inactive)
/// - `query`: Raw search text; trimmed and case-folded before matching
///
/// Output:
/// - References to the passing records, in their original relative order.
///
/// Details:
/// - A record passes the query when the folded `"name description"` string
///   contains the folded query as a substring; an empty query passes all.
pub fn visible_items<'a>(
    items: &'a [ExtensionItem],
    filter: Filter,
    query: &str,
) -> Vec<&'a ExtensionItem> {
    let q = query.trim().to_lowercase();
    items
        .iter()
        .filter(|it| {
            let matches_filter = match filter {
                Filter::All => true,
                Filter::Active => it.is_active,
                Filter::Inactive => !it.is_active,
            };
            let matches_query = q.is_empty()
                || format!("{} {}", it.name, it.description)
                    .to_lowercase()
                    .contains(&q);
            matches_filter && matches_query
        })
        .collect()
}

/// What: Apply one user intent to the state.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `action`: The intent to apply
///
/// Output:
/// - Mutates `app` in place. Collection mutations mark the state dirty for
///   the runtime's flush; theme toggles persist the mode immediately.
///
/// Details:
/// - Reselecting the current filter and toggling/removing an absent name are
///   idempotent no-ops.
pub fn apply_action(app: &mut AppState, action: Action) {
    match action {
        Action::SetFilter(f) => {
            if app.filter != f {
                app.filter = f;
                tracing::debug!(filter = f.as_config_key(), "filter changed");
            }
        }
        Action::SetQuery(q) => app.query = q,
        Action::ToggleActive(name) => {
            let flipped = app
                .items
                .iter()
                .find(|it| it.name == name)
                .map(|it| !it.is_active);
            if let Some(value) = flipped {
                crate::store::set_active(app, &name, value);
                tracing::debug!(name = %name, active = value, "toggled extension");
            }
        }
        Action::Remove(name) => {
            if crate::store::remove(app, &name) {
                tracing::debug!(name = %name, "removed extension");
            }
        }
        Action::ToggleTheme => {
            app.theme_mode = app.theme_mode.flipped();
            if !app.dry_run {
                crate::theme::save_mode(app.theme_mode);
            }
            tracing::debug!(theme = app.theme_mode.as_config_key(), "theme toggled");
        }
    }
}

/// Clamp the highlighted row to the current visible set: empty lists clear
/// the selection, otherwise the index is capped at the last row.
pub fn clamp_selection(app: &mut AppState, visible_len: usize) {
    if visible_len == 0 {
        app.selected = 0;
        app.list_state.select(None);
    } else {
        app.selected = app.selected.min(visible_len - 1);
        app.list_state.select(Some(app.selected));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, desc: &str, active: bool) -> ExtensionItem {
        ExtensionItem {
            name: name.to_string(),
            description: desc.to_string(),
            logo: format!("{name}.svg"),
            is_active: active,
        }
    }

    fn sample() -> Vec<ExtensionItem> {
        vec![
            item("DevLens", "Quickly inspect page layouts", true),
            item("StyleSpy", "Instantly analyze CSS styles", false),
            item("GridGuides", "Overlay alignment grids", true),
        ]
    }

    #[test]
    /// What: The all-filter with an empty query is the identity.
    ///
    /// - Input: Three records, filter `All`, empty query
    /// - Output: Same records, same order, same length
    fn all_empty_query_is_identity() {
        let items = sample();
        let vis = visible_items(&items, Filter::All, "");
        assert_eq!(vis.len(), items.len());
        for (v, it) in vis.iter().zip(items.iter()) {
            assert_eq!(*v, it);
        }
    }

    #[test]
    /// What: Active and inactive results partition the all-filter result.
    ///
    /// - Input: Mixed records under a shared query
    /// - Output: No overlap, no omission, flags match the filter
    fn active_inactive_partition() {
        let items = sample();
        let q = "s";
        let all = visible_items(&items, Filter::All, q);
        let active = visible_items(&items, Filter::Active, q);
        let inactive = visible_items(&items, Filter::Inactive, q);
        assert!(active.iter().all(|it| it.is_active));
        assert!(inactive.iter().all(|it| !it.is_active));
        assert_eq!(active.len() + inactive.len(), all.len());
        for it in all {
            let in_active = active.iter().any(|a| a.name == it.name);
            let in_inactive = inactive.iter().any(|a| a.name == it.name);
            assert!(in_active != in_inactive);
        }
    }

    #[test]
    /// What: Query matching is a case-insensitive substring over name and
    /// description, with surrounding whitespace ignored.
    ///
    /// - Input: Queries differing only in case and padding
    /// - Output: Identical results; substrings of either field match
    fn query_case_insensitive_substring() {
        let items = sample();
        let upper = visible_items(&items, Filter::All, "LENS");
        let lower = visible_items(&items, Filter::All, "lens");
        let padded = visible_items(&items, Filter::All, "  lens ");
        assert_eq!(upper.len(), 1);
        assert_eq!(upper[0].name, "DevLens");
        assert_eq!(upper, lower);
        assert_eq!(upper, padded);

        // Substring of a description only.
        let by_desc = visible_items(&items, Filter::All, "css");
        assert_eq!(by_desc.len(), 1);
        assert_eq!(by_desc[0].name, "StyleSpy");
    }

    #[test]
    /// What: The name/description concatenation is joined with a space, so a
    /// query spanning the boundary matches.
    ///
    /// - Input: Query `"devlens quickly"`
    /// - Output: The record matches across the join
    fn query_spans_name_description_join() {
        let items = sample();
        let vis = visible_items(&items, Filter::All, "devlens quickly");
        assert_eq!(vis.len(), 1);
        assert_eq!(vis[0].name, "DevLens");
    }

    #[test]
    /// What: Filtering preserves relative order (stable, no re-sorting).
    ///
    /// - Input: Records whose actives are non-adjacent
    /// - Output: Matches appear in original order
    fn filter_is_stable() {
        let items = sample();
        let vis = visible_items(&items, Filter::Active, "");
        let names: Vec<&str> = vis.iter().map(|it| it.name.as_str()).collect();
        assert_eq!(names, vec!["DevLens", "GridGuides"]);
    }

    #[test]
    /// What: Inactive filter with an empty query shows only disabled records.
    ///
    /// - Input: `[A active, B inactive]`, filter `Inactive`, query ""
    /// - Output: Visible = `[B]`
    fn inactive_scenario() {
        let items = vec![item("A", "", true), item("B", "", false)];
        let vis = visible_items(&items, Filter::Inactive, "");
        assert_eq!(vis.len(), 1);
        assert_eq!(vis[0].name, "B");
    }

    #[test]
    /// What: Toggling via the dispatcher moves a record across the
    /// active/inactive views.
    ///
    /// - Input: "B" starts inactive; toggle twice
    /// - Output: Present in the active view after the first toggle, absent
    ///   after the second
    fn toggle_moves_between_views() {
        let mut app = AppState {
            items: sample(),
            ..Default::default()
        };
        apply_action(&mut app, Action::ToggleActive("StyleSpy".into()));
        assert!(
            visible_items(&app.items, Filter::Active, "")
                .iter()
                .any(|it| it.name == "StyleSpy")
        );
        apply_action(&mut app, Action::ToggleActive("StyleSpy".into()));
        assert!(
            !visible_items(&app.items, Filter::Active, "")
                .iter()
                .any(|it| it.name == "StyleSpy")
        );
    }

    #[test]
    /// What: Reselecting the active filter is an idempotent no-op.
    ///
    /// - Input: Filter already `Active`; apply `SetFilter(Active)`
    /// - Output: State unchanged
    fn reselect_filter_is_noop() {
        let mut app = AppState {
            filter: Filter::Active,
            ..Default::default()
        };
        apply_action(&mut app, Action::SetFilter(Filter::Active));
        assert_eq!(app.filter, Filter::Active);
        assert!(!app.items_dirty);
    }

    #[test]
    /// What: Dry-run theme toggles flip the mode without touching the
    /// persisted slot.
    ///
    /// - Input: `dry_run = true`, state dir pointed at a scratch directory,
    ///   one `ToggleTheme`
    /// - Output: Mode flips to dark; no theme file is written
    fn dry_run_toggle_theme_skips_slot_write() {
        let dir = tempfile::tempdir().expect("temp dir");
        // Process-global variable; restored before the assertions run.
        unsafe { std::env::set_var("XDG_STATE_HOME", dir.path()) };
        let mut app = AppState {
            dry_run: true,
            ..Default::default()
        };
        apply_action(&mut app, Action::ToggleTheme);
        let slot = dir.path().join("extman").join("theme");
        unsafe { std::env::remove_var("XDG_STATE_HOME") };
        assert_eq!(app.theme_mode, crate::state::ThemeMode::Dark);
        assert!(!slot.exists(), "dry run wrote the theme slot");
    }

    #[test]
    /// What: Selection clamping clears on empty and caps at the last row.
    ///
    /// - Input: Selection past the end, then an empty visible set
    /// - Output: Capped index, then cleared selection
    fn selection_clamping() {
        let mut app = AppState {
            selected: 10,
            ..Default::default()
        };
        clamp_selection(&mut app, 3);
        assert_eq!(app.selected, 2);
        assert_eq!(app.list_state.selected(), Some(2));
        clamp_selection(&mut app, 0);
        assert_eq!(app.selected, 0);
        assert_eq!(app.list_state.selected(), None);
    }
}
