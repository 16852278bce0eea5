//! Theme provider for Storefront
//!
//! Two themes are supported, light and dark. The initial theme follows the
//! system color scheme and can be toggled at runtime.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{ThemeName, ThemeState};
//!
//! let mut theme = ThemeState::from_system(true);
//! assert_eq!(theme.theme_name, ThemeName::Dark);
//! assert_eq!(theme.colors.background, "#121212");
//!
//! theme.toggle();
//! assert_eq!(theme.theme_name, ThemeName::Light);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FFFFFF")
pub type Color = String;

// =============================================================================
// Theme Colors
// =============================================================================

/// Semantic colors used by every screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Screen background
    pub background: Color,
    /// Primary text
    pub text: Color,
    /// Card and input background
    pub card: Color,
    /// Borders and separators
    pub border: Color,
    /// Accent for buttons, spinners, and prices
    pub primary: Color,
}

/// Light theme colors
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        background: "#ffffff".to_string(),
        text: "#000000".to_string(),
        card: "#f0f0f0".to_string(),
        border: "#dddddd".to_string(),
        primary: "#6200ee".to_string(),
    }
}

/// Dark theme colors
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        background: "#121212".to_string(),
        text: "#ffffff".to_string(),
        card: "#1e1e1e".to_string(),
        border: "#333333".to_string(),
        primary: "#bb86fc".to_string(),
    }
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// The other theme
    pub fn toggled(&self) -> ThemeName {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Light,
        }
    }

    /// Colors for this theme
    pub fn colors(&self) -> ThemeColors {
        match self {
            ThemeName::Light => light_colors(),
            ThemeName::Dark => dark_colors(),
        }
    }
}

/// Status bar content style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBarStyle {
    /// Light glyphs, for dark backgrounds
    LightContent,
    /// Dark glyphs, for light backgrounds
    DarkContent,
}

// =============================================================================
// Theme State
// =============================================================================

/// Theme state for the application
///
/// Only the theme name is serialized; colors are rebuilt from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredTheme")]
pub struct ThemeState {
    /// Current theme name
    pub theme_name: ThemeName,
    /// Current colors
    #[serde(skip_serializing)]
    pub colors: ThemeColors,
}

#[derive(Deserialize)]
struct StoredTheme {
    #[serde(default)]
    theme_name: ThemeName,
}

impl From<StoredTheme> for ThemeState {
    fn from(stored: StoredTheme) -> Self {
        Self::new(stored.theme_name)
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeName::Light)
    }
}

impl ThemeState {
    /// Create a new theme state with the given theme
    pub fn new(theme_name: ThemeName) -> Self {
        Self { theme_name, colors: theme_name.colors() }
    }

    /// Initial theme from the system color scheme
    pub fn from_system(system_is_dark: bool) -> Self {
        Self::new(if system_is_dark { ThemeName::Dark } else { ThemeName::Light })
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme_name: ThemeName) {
        self.theme_name = theme_name;
        self.colors = theme_name.colors();
    }

    /// Switch between light and dark
    pub fn toggle(&mut self) {
        self.set_theme(self.theme_name.toggled());
    }

    /// Check if the dark theme is active
    pub fn is_dark(&self) -> bool {
        self.theme_name == ThemeName::Dark
    }

    /// Status bar style, the inverse of the current scheme
    pub fn status_bar_style(&self) -> StatusBarStyle {
        match self.theme_name {
            ThemeName::Light => StatusBarStyle::DarkContent,
            ThemeName::Dark => StatusBarStyle::LightContent,
        }
    }

    /// Placeholder text color for the search box
    pub fn placeholder_color(&self) -> &'static str {
        match self.theme_name {
            ThemeName::Light => "#666",
            ThemeName::Dark => "#888",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes() {
        let light = light_colors();
        assert_eq!(light.background, "#ffffff");
        assert_eq!(light.primary, "#6200ee");

        let dark = dark_colors();
        assert_eq!(dark.background, "#121212");
        assert_eq!(dark.card, "#1e1e1e");
        assert_eq!(dark.border, "#333333");
        assert_eq!(dark.primary, "#bb86fc");
    }

    #[test]
    fn test_theme_from_system() {
        assert_eq!(ThemeState::from_system(true).theme_name, ThemeName::Dark);
        assert_eq!(ThemeState::from_system(false).theme_name, ThemeName::Light);
    }

    #[test]
    fn test_toggle_swaps_colors() {
        let mut state = ThemeState::default();
        assert!(!state.is_dark());

        state.toggle();
        assert!(state.is_dark());
        assert_eq!(state.colors, dark_colors());

        state.toggle();
        assert_eq!(state.colors, light_colors());
    }

    #[test]
    fn test_status_bar_and_placeholder() {
        let light = ThemeState::new(ThemeName::Light);
        assert_eq!(light.status_bar_style(), StatusBarStyle::DarkContent);
        assert_eq!(light.placeholder_color(), "#666");

        let dark = ThemeState::new(ThemeName::Dark);
        assert_eq!(dark.status_bar_style(), StatusBarStyle::LightContent);
        assert_eq!(dark.placeholder_color(), "#888");
    }

    #[test]
    fn test_theme_state_serialization() {
        let state = ThemeState::new(ThemeName::Dark);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"theme_name":"dark"}"#);

        let restored: ThemeState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
        assert_eq!(restored.colors, dark_colors());
    }

    #[test]
    fn test_deserialized_theme_builds_its_palette() {
        let dark: ThemeState = serde_json::from_str(r#"{"theme_name":"dark"}"#).unwrap();
        assert_eq!(dark.colors.background, "#121212");

        let light: ThemeState = serde_json::from_str(r#"{"theme_name":"light"}"#).unwrap();
        assert_eq!(light.colors, light_colors());

        let missing: ThemeState = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.theme_name, ThemeName::Light);
    }
}
