//! Core application state types for extman's TUI.
//!
//! This module defines the serializable extension record, the filter and
//! theme enums, the closed set of user intents, and the central [`AppState`]
//! container mutated by the event and UI layers.

use ratatui::widgets::ListState;
use std::path::PathBuf;

/// A single extension record, the sole persisted entity.
///
/// `name` is the lookup key by convention only; uniqueness is not enforced
/// and all lookups use first-match semantics. The wire format keeps the seed
/// resource's `isActive` spelling.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExtensionItem {
    /// Display name and lookup key.
    pub name: String,
    /// One-line description, searchable together with the name.
    pub description: String,
    /// Resource locator for the extension's logo image.
    pub logo: String,
    /// Whether the extension is currently enabled.
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// Which subset of the collection is eligible for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Every record passes.
    #[default]
    All,
    /// Only records with `is_active = true`.
    Active,
    /// Only records with `is_active = false`.
    Inactive,
}

impl Filter {
    /// Pill display order in the header.
    pub const ORDER: [Self; 3] = [Self::All, Self::Active, Self::Inactive];

    /// Stable key used on disk and on the command line.
    pub fn as_config_key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Parse a config key back into a filter; unknown strings yield `None`.
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }

    /// Human-readable pill label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    /// Next filter in cycling order (Tab key).
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Active,
            Self::Active => Self::Inactive,
            Self::Inactive => Self::All,
        }
    }
}

/// Light/dark display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light palette.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl ThemeMode {
    /// Stable key persisted in the theme slot.
    pub fn as_config_key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted theme value; anything unrecognized yields `None`.
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other mode.
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Closed set of user intents consumed by [`crate::logic::apply_action`].
///
/// The event layer only translates terminal input into these; all state
/// mutation funnels through the single dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Select a filter pill. Reselecting the current filter is a no-op.
    SetFilter(Filter),
    /// Replace the free-text search query.
    SetQuery(String),
    /// Flip the active flag of the first record with this name.
    ToggleActive(String),
    /// Remove the first record with this name.
    Remove(String),
    /// Flip between light and dark mode and persist the preference.
    ToggleTheme,
}

/// Global application state owned by the runtime loop.
///
/// Mutated only on the event loop task; the persisted copy on disk is a
/// derived mirror written after every collection mutation.
#[derive(Debug)]
pub struct AppState {
    /// Full ordered collection of extension records.
    pub items: Vec<ExtensionItem>,
    /// Active category filter.
    pub filter: Filter,
    /// Free-text search query (raw, untrimmed).
    pub query: String,
    /// Resolved light/dark mode.
    pub theme_mode: ThemeMode,
    /// Index into the *visible* set that is currently highlighted.
    pub selected: usize,
    /// List selection state for the extensions list widget.
    pub list_state: ListState,
    /// Path where the collection is persisted as JSON.
    pub items_path: PathBuf,
    /// Dirty flag indicating `items` needs to be flushed to disk.
    pub items_dirty: bool,
    /// Seed resource locator (file path or http(s) URL).
    pub seed: String,
    /// When `true`, mutations are kept in memory but never written to disk.
    pub dry_run: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: Filter::All,
            query: String::new(),
            theme_mode: ThemeMode::Light,
            selected: 0,
            list_state: ListState::default(),
            items_path: crate::theme::state_dir().join("extensions.json"),
            items_dirty: false,
            seed: "data.json".to_string(),
            dry_run: false,
        }
    }
}
