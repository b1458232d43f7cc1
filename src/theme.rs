//! Theme handling for extman's TUI.
//!
//! Two fixed palettes (light and dark) in the Catppuccin style, a persisted
//! mode slot under the XDG state directory, and a best-effort terminal
//! dark-background detection used only when no preference has been saved.
//! Every failure path degrades to the light default; nothing here errors.

use ratatui::style::Color;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::state::ThemeMode;

/// Color palette used by rendering code.
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly offset background layer used behind panels.
    pub mantle: Color,
    /// Subtle surface color for component backgrounds.
    pub surface1: Color,
    /// Border color for unfocused panels.
    pub surface2: Color,
    /// Muted foreground for secondary annotations.
    pub overlay1: Color,
    /// Muted foreground for descriptions.
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Low-emphasis text (hints, logo locators, empty states).
    pub subtext0: Color,
    /// Accent for the search prompt.
    pub sapphire: Color,
    /// Accent for titles and the active filter pill.
    pub mauve: Color,
    /// Positive state color (enabled extensions).
    pub green: Color,
    /// Negative state color (disabled extensions, remove hint).
    pub red: Color,
    /// Selection highlight accent.
    pub lavender: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the palette for the given mode.
pub fn palette(mode: ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme {
            base: hex((0x1e, 0x1e, 0x2e)),
            mantle: hex((0x18, 0x18, 0x25)),
            surface1: hex((0x45, 0x47, 0x5a)),
            surface2: hex((0x58, 0x5b, 0x70)),
            overlay1: hex((0x7f, 0x84, 0x9c)),
            overlay2: hex((0x93, 0x99, 0xb2)),
            text: hex((0xcd, 0xd6, 0xf4)),
            subtext0: hex((0xa6, 0xad, 0xc8)),
            sapphire: hex((0x74, 0xc7, 0xec)),
            mauve: hex((0xcb, 0xa6, 0xf7)),
            green: hex((0xa6, 0xe3, 0xa1)),
            red: hex((0xf3, 0x8b, 0xa8)),
            lavender: hex((0xb4, 0xbe, 0xfe)),
        },
        ThemeMode::Light => Theme {
            base: hex((0xef, 0xf1, 0xf5)),
            mantle: hex((0xe6, 0xe9, 0xef)),
            surface1: hex((0xbc, 0xc0, 0xcc)),
            surface2: hex((0xac, 0xb0, 0xbe)),
            overlay1: hex((0x8c, 0x8f, 0xa1)),
            overlay2: hex((0x7c, 0x7f, 0x93)),
            text: hex((0x4c, 0x4f, 0x69)),
            subtext0: hex((0x6c, 0x6f, 0x85)),
            sapphire: hex((0x20, 0x9f, 0xb5)),
            mauve: hex((0x88, 0x39, 0xef)),
            green: hex((0x40, 0xa0, 0x2b)),
            red: hex((0xd2, 0x0f, 0x39)),
            lavender: hex((0x72, 0x87, 0xfd)),
        },
    }
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// State directory for persisted data (`$XDG_STATE_HOME/extman`), created on
/// first use.
pub fn state_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_STATE_HOME", &[".local", "state"]).join("extman");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Log directory under the state directory, created on first use.
pub fn logs_dir() -> PathBuf {
    let dir = state_dir().join("logs");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Path of the single persisted theme slot.
fn mode_path() -> PathBuf {
    state_dir().join("theme")
}

/// Read the persisted theme mode; absent or malformed content yields `None`.
pub fn load_saved_mode() -> Option<ThemeMode> {
    fs::read_to_string(mode_path())
        .ok()
        .and_then(|s| ThemeMode::from_config_key(&s))
}

/// Persist the theme mode. Write failure is logged and otherwise ignored; the
/// in-memory mode stays authoritative for the session.
pub fn save_mode(mode: ThemeMode) {
    let path = mode_path();
    if let Err(e) = fs::write(&path, mode.as_config_key()) {
        tracing::warn!(path = %path.display(), error = %e, "failed to persist theme mode");
    }
}

/// What: Decide whether a `COLORFGBG` value reports a dark background.
///
/// Inputs:
/// - `value`: Raw variable content, e.g. `"15;0"` (foreground;background)
///
/// Output:
/// - `true` when the background field is one of the dark ANSI color codes.
///
/// Details:
/// - Codes 0..=6 and 8 are the conventionally dark half of the 16-color set.
/// - Anything unparsable counts as not-dark so the light default wins.
pub fn colorfgbg_indicates_dark(value: &str) -> bool {
    let Some(bg) = value.rsplit(';').next() else {
        return false;
    };
    match bg.trim().parse::<u8>() {
        Ok(code) => matches!(code, 0..=6 | 8),
        Err(_) => false,
    }
}

/// Terminal analog of the OS dark-mode preference signal. Consulted only when
/// no theme has been persisted.
pub fn detect_dark_preference() -> bool {
    env::var("COLORFGBG")
        .map(|v| colorfgbg_indicates_dark(&v))
        .unwrap_or(false)
}

/// What: Resolve the startup theme mode.
///
/// Inputs:
/// - `saved`: A valid persisted or command-line preference, if any
/// - `os_prefers_dark`: The environment's dark-background signal
///
/// Output:
/// - The saved mode when present, else dark if the environment prefers it,
///   else light. No error path exists.
pub fn resolve_theme_mode(saved: Option<ThemeMode>, os_prefers_dark: bool) -> ThemeMode {
    saved.unwrap_or(if os_prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    })
}
