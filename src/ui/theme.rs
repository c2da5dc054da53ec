//! # Theme
//!
//! Colors used by the renderer, grouped by what they paint rather than by hue.
//! Rendering code never names a `Color` directly.
//!
//! Built-in themes:
//!
//! - **Midnight** (default) - plain ANSI colors, follows the terminal palette
//! - **Nord** - arctic, north-bluish palette
//! - **Paper** - dark text for light terminals

use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Name accepted by `--theme` and the config file.
    pub name: &'static str,

    /// Body text and file entries.
    pub fg: Color,
    /// Hints, footer, current directory, scroll indicator.
    pub fg_dim: Color,
    /// Panel borders and titles.
    pub accent: Color,
    /// Directory entries in the listing.
    pub directory: Color,
    /// Transient notices and load failures.
    pub error: Color,

    // -- Listing cursor --
    pub cursor_fg: Color,
    pub cursor_bg: Color,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Like [`Theme::by_name`], falling back to the default for unknown names.
    pub fn by_name_or_default(name: &str) -> &'static Theme {
        Self::by_name(name).unwrap_or_else(|| {
            tracing::warn!(theme = name, "unknown theme, using default");
            Self::default_theme()
        })
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

static BUILT_IN_THEMES: [Theme; 3] = [
    Theme {
        name: "Midnight",
        fg: Color::White,
        fg_dim: Color::Gray,
        accent: Color::Cyan,
        directory: Color::Blue,
        error: Color::Red,
        cursor_fg: Color::Black,
        cursor_bg: Color::Cyan,
    },
    Theme {
        name: "Nord",
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),
        directory: Color::Rgb(129, 161, 193),
        error: Color::Rgb(191, 97, 106),
        cursor_fg: Color::Rgb(46, 52, 64),
        cursor_bg: Color::Rgb(136, 192, 208),
    },
    Theme {
        name: "Paper",
        fg: Color::Rgb(40, 40, 40),
        fg_dim: Color::Rgb(120, 120, 120),
        accent: Color::Rgb(0, 95, 135),
        directory: Color::Rgb(0, 90, 190),
        error: Color::Rgb(175, 0, 0),
        cursor_fg: Color::Rgb(250, 250, 250),
        cursor_bg: Color::Rgb(0, 95, 135),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_midnight() {
        assert_eq!(Theme::default_theme().name, "Midnight");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("nord").is_some());
        assert!(Theme::by_name("PAPER").is_some());
        assert!(Theme::by_name("nonexistent").is_none());
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(Theme::by_name_or_default("nope").name, "Midnight");
        assert_eq!(Theme::by_name_or_default("nord").name, "Nord");
    }

    #[test]
    fn test_all_themes_have_distinct_names() {
        let mut names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count, "duplicate theme names found");
    }
}
