//! End-to-end properties of the filter engine, store, and theme resolution
//! exercised through the library API.

use extman::logic::{apply_action, visible_items};
use extman::state::{Action, AppState, ExtensionItem, Filter, ThemeMode};
use extman::store;
use extman::theme;
use extman::ui;

fn item(name: &str, desc: &str, active: bool) -> ExtensionItem {
    ExtensionItem {
        name: name.to_string(),
        description: desc.to_string(),
        logo: format!("./assets/images/logo-{}.svg", name.to_lowercase()),
        is_active: active,
    }
}

fn catalog() -> Vec<ExtensionItem> {
    vec![
        item("DevLens", "Quickly inspect page layouts and visualize element boundaries.", true),
        item("StyleSpy", "Instantly analyze and copy CSS from any webpage element.", true),
        item("SpeedBoost", "Optimizes browser resource usage to accelerate page loading.", false),
        item("JSONWizard", "Formats, validates, and prettifies JSON responses in-browser.", true),
        item("TabMaster Pro", "Organizes browser tabs into groups and sessions.", true),
        item("ViewportBuddy", "Simulates various screen resolutions directly within the browser.", false),
    ]
}

#[test]
fn identity_under_all_and_empty_query() {
    let items = catalog();
    let vis = visible_items(&items, Filter::All, "");
    assert_eq!(vis.len(), items.len());
    let names: Vec<&str> = vis.iter().map(|it| it.name.as_str()).collect();
    let expected: Vec<&str> = items.iter().map(|it| it.name.as_str()).collect();
    assert_eq!(names, expected);
}

#[test]
fn partition_under_shared_query() {
    let items = catalog();
    for q in ["", "browser", "o"] {
        let all = visible_items(&items, Filter::All, q);
        let active = visible_items(&items, Filter::Active, q);
        let inactive = visible_items(&items, Filter::Inactive, q);
        assert_eq!(active.len() + inactive.len(), all.len());
        assert!(active.iter().all(|it| it.is_active));
        assert!(inactive.iter().all(|it| !it.is_active));
    }
}

#[test]
fn any_substring_of_name_or_description_matches() {
    let items = catalog();
    for it in &items {
        // A mid-word slice of the name, case-scrambled.
        let slice: String = it.name.chars().skip(1).take(4).collect();
        let scrambled = slice.to_uppercase();
        let vis = visible_items(&items, Filter::All, &scrambled);
        assert!(
            vis.iter().any(|v| v.name == it.name),
            "query {scrambled:?} should match {}",
            it.name
        );
    }
}

#[test]
fn case_insensitive_equivalence() {
    let items = catalog();
    let upper = visible_items(&items, Filter::All, "JSON");
    let lower = visible_items(&items, Filter::All, "json");
    assert_eq!(upper, lower);
    assert!(!upper.is_empty());
}

#[test]
fn toggle_then_filter_round_trip() {
    let mut app = AppState {
        items: catalog(),
        dry_run: true,
        ..Default::default()
    };
    store::set_active(&mut app, "SpeedBoost", true);
    assert!(
        visible_items(&app.items, Filter::Active, "")
            .iter()
            .any(|it| it.name == "SpeedBoost")
    );
    store::set_active(&mut app, "SpeedBoost", false);
    assert!(
        !visible_items(&app.items, Filter::Active, "")
            .iter()
            .any(|it| it.name == "SpeedBoost")
    );
}

#[test]
fn remove_shrinks_by_exactly_one() {
    let mut app = AppState {
        items: catalog(),
        dry_run: true,
        ..Default::default()
    };
    let before = app.items.len();
    assert!(store::remove(&mut app, "StyleSpy"));
    assert_eq!(app.items.len(), before - 1);
    assert!(!store::remove(&mut app, "StyleSpy"));
    assert_eq!(app.items.len(), before - 1);
}

#[tokio::test]
async fn disk_round_trip_equals_original() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("extensions.json");
    let items = catalog();
    store::persist(&path, &items);
    let loaded = store::load_initial(&path, "/unused/seed.json", false).await;
    assert_eq!(loaded, items);
}

#[tokio::test]
async fn bundled_seed_resource_decodes() {
    let seed = concat!(env!("CARGO_MANIFEST_DIR"), "/data.json");
    let items = extman::sources::fetch_seed(seed).await.expect("bundled seed");
    assert!(!items.is_empty());
    assert!(items.iter().all(|it| !it.name.is_empty()));
}

#[test]
fn empty_state_messages() {
    assert_eq!(ui::empty_message(""), "No extensions available.");
    assert_eq!(ui::empty_message("x"), "No extensions match your search.");
    // Whitespace counts as an active search even though matching trims it.
    assert_eq!(ui::empty_message("   "), "No extensions match your search.");
}

#[test]
fn theme_resolution_prefers_saved_then_signal() {
    assert_eq!(
        theme::resolve_theme_mode(Some(ThemeMode::Light), true),
        ThemeMode::Light
    );
    assert_eq!(theme::resolve_theme_mode(None, true), ThemeMode::Dark);
    assert_eq!(theme::resolve_theme_mode(None, false), ThemeMode::Light);
}

#[test]
fn intent_dispatch_covers_collection_mutations() {
    let mut app = AppState {
        items: catalog(),
        dry_run: true,
        ..Default::default()
    };
    apply_action(&mut app, Action::SetQuery("grid".into()));
    assert_eq!(app.query, "grid");
    apply_action(&mut app, Action::SetFilter(Filter::Inactive));
    assert_eq!(app.filter, Filter::Inactive);
    apply_action(&mut app, Action::ToggleActive("ViewportBuddy".into()));
    assert!(
        app.items
            .iter()
            .find(|it| it.name == "ViewportBuddy")
            .map(|it| it.is_active)
            .expect("record exists")
    );
    let before = app.items.len();
    apply_action(&mut app, Action::Remove("DevLens".into()));
    assert_eq!(app.items.len(), before - 1);
    // Absent names are silent no-ops.
    apply_action(&mut app, Action::Remove("DevLens".into()));
    assert_eq!(app.items.len(), before - 1);
}
