//! Event handling for extman's TUI.
//!
//! Terminal events become intents from [`crate::state::Action`] plus local
//! list navigation. No state semantics live here; the dispatcher in
//! [`crate::logic`] owns the transitions.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::logic::{apply_action, visible_items};
use crate::state::{Action, AppState};

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
/// Only key presses are handled; repeats and releases are ignored.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        match ke.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return true,
            KeyCode::Char('t') => apply_action(app, Action::ToggleTheme),
            _ => {}
        }
        return false;
    }

    match ke.code {
        // Esc clears the search, matching the search-first input model.
        KeyCode::Esc => apply_action(app, Action::SetQuery(String::new())),
        KeyCode::Char(c) => {
            let mut q = app.query.clone();
            q.push(c);
            apply_action(app, Action::SetQuery(q));
        }
        KeyCode::Backspace => {
            let mut q = app.query.clone();
            q.pop();
            apply_action(app, Action::SetQuery(q));
        }
        KeyCode::Tab => apply_action(app, Action::SetFilter(app.filter.next())),
        KeyCode::Up => move_selection(app, -1),
        KeyCode::Down => move_selection(app, 1),
        KeyCode::Enter => {
            if let Some(name) = selected_name(app) {
                apply_action(app, Action::ToggleActive(name));
            }
        }
        KeyCode::Delete => {
            if let Some(name) = selected_name(app) {
                apply_action(app, Action::Remove(name));
            }
        }
        _ => {}
    }
    false
}

/// Name of the highlighted record in the current visible set, if any.
fn selected_name(app: &AppState) -> Option<String> {
    let vis = visible_items(&app.items, app.filter, &app.query);
    vis.get(app.selected).map(|it| it.name.clone())
}

/// Move the highlight within the visible set, clamping at both ends.
fn move_selection(app: &mut AppState, delta: i64) {
    let len = visible_items(&app.items, app.filter, &app.query).len();
    if len == 0 {
        app.selected = 0;
        app.list_state.select(None);
        return;
    }
    let next = (app.selected as i64 + delta).clamp(0, len as i64 - 1) as usize;
    app.selected = next;
    app.list_state.select(Some(next));
}
