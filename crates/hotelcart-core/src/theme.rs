//! # Theme Preference
//!
//! Light/dark preference with a fixed resolution order at startup.
//!
//! ## Resolution Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Persisted value under "theme"   ("light" | "dark")  ──► use it      │
//! │          │ absent or unrecognized                                       │
//! │          ▼                                                              │
//! │  2. Environment prefers dark?                           ──► Dark        │
//! │          │ no                                                           │
//! │          ▼                                                              │
//! │  3. Default                                             ──► Light       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Steps 1 and 2 apply the theme to the presentation context; the default
//! leaves the context alone, since light is what it already shows.
//! `toggle` flips, applies, then persists.

use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

/// Key the preference is persisted under.
pub const THEME_STORAGE_KEY: &str = "theme";

// =============================================================================
// Theme
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label of the toggle button: names the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Dark",
            Theme::Dark => "Light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ValidationError::NotAllowed {
                field: THEME_STORAGE_KEY.to_string(),
                allowed: vec!["light".to_string(), "dark".to_string()],
            }),
        }
    }
}

/// Where the startup theme came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeSource {
    Persisted,
    Ambient,
    Default,
}

// =============================================================================
// External collaborators
// =============================================================================

/// Durable string key-value surface.
pub trait PreferenceStore {
    type Error;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error>;

    fn save(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Whatever the theme is applied to (the document's `data-theme` attribute
/// in the browser).
pub trait PresentationContext {
    fn apply_theme(&mut self, theme: Theme);
}

/// In-memory preference store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        MemoryPreferences::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut prefs = MemoryPreferences::new();
        prefs.values.insert(key.to_string(), value.to_string());
        prefs
    }
}

impl PreferenceStore for MemoryPreferences {
    type Error = Infallible;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Controller
// =============================================================================

/// Pure resolution step: persisted value, then ambient signal, then light.
///
/// ## Example
/// ```rust
/// use hotelcart_core::theme::{resolve_theme, Theme, ThemeSource};
///
/// assert_eq!(resolve_theme(Some("light"), true), (Theme::Light, ThemeSource::Persisted));
/// assert_eq!(resolve_theme(None, true), (Theme::Dark, ThemeSource::Ambient));
/// assert_eq!(resolve_theme(Some("purple"), false), (Theme::Light, ThemeSource::Default));
/// ```
pub fn resolve_theme(persisted: Option<&str>, prefers_dark: bool) -> (Theme, ThemeSource) {
    if let Some(theme) = persisted.and_then(|v| v.parse::<Theme>().ok()) {
        return (theme, ThemeSource::Persisted);
    }
    if prefers_dark {
        return (Theme::Dark, ThemeSource::Ambient);
    }
    (Theme::Light, ThemeSource::Default)
}

/// Current theme plus how it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeController {
    theme: Theme,
    source: ThemeSource,
}

impl ThemeController {
    /// Resolves the startup theme and applies it when it was not the default.
    ///
    /// ## Errors
    /// Propagates the store's read error; the caller decides whether to fall
    /// back with [`ThemeController::from_ambient`].
    pub fn load<S, P>(store: &S, prefers_dark: bool, context: &mut P) -> Result<Self, S::Error>
    where
        S: PreferenceStore,
        P: PresentationContext,
    {
        let persisted = store.load(THEME_STORAGE_KEY)?;
        Ok(Self::resolved(persisted.as_deref(), prefers_dark, context))
    }

    /// Resolution without a persisted value.
    pub fn from_ambient<P: PresentationContext>(prefers_dark: bool, context: &mut P) -> Self {
        Self::resolved(None, prefers_dark, context)
    }

    fn resolved<P: PresentationContext>(
        persisted: Option<&str>,
        prefers_dark: bool,
        context: &mut P,
    ) -> Self {
        let (theme, source) = resolve_theme(persisted, prefers_dark);
        if source != ThemeSource::Default {
            context.apply_theme(theme);
        }
        ThemeController { theme, source }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn source(&self) -> ThemeSource {
        self.source
    }

    /// Flips the theme, applies it, and persists it.
    ///
    /// ## Errors
    /// Returns the store's write error. The flip and the apply have already
    /// happened by then and are kept.
    pub fn toggle<S, P>(&mut self, store: &mut S, context: &mut P) -> Result<Theme, S::Error>
    where
        S: PreferenceStore,
        P: PresentationContext,
    {
        self.theme = self.theme.toggled();
        context.apply_theme(self.theme);
        store.save(THEME_STORAGE_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Document {
        applied: Vec<Theme>,
    }

    impl PresentationContext for Document {
        fn apply_theme(&mut self, theme: Theme) {
            self.applied.push(theme);
        }
    }

    fn load(prefs: &MemoryPreferences, prefers_dark: bool) -> (ThemeController, Document) {
        let mut doc = Document::default();
        let controller = ThemeController::load(prefs, prefers_dark, &mut doc).unwrap();
        (controller, doc)
    }

    #[test]
    fn test_persisted_value_wins_over_ambient() {
        let prefs = MemoryPreferences::with_value(THEME_STORAGE_KEY, "light");
        let (controller, doc) = load(&prefs, true);

        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.source(), ThemeSource::Persisted);
        assert_eq!(doc.applied, vec![Theme::Light]);
    }

    #[test]
    fn test_ambient_dark_when_nothing_persisted() {
        let (controller, doc) = load(&MemoryPreferences::new(), true);

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(doc.applied, vec![Theme::Dark]);
    }

    #[test]
    fn test_default_light_leaves_context_untouched() {
        let (controller, doc) = load(&MemoryPreferences::new(), false);

        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.source(), ThemeSource::Default);
        assert!(doc.applied.is_empty());
    }

    #[test]
    fn test_unrecognized_persisted_value_is_ignored() {
        let prefs = MemoryPreferences::with_value(THEME_STORAGE_KEY, "sepia");
        let (controller, _) = load(&prefs, true);

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.source(), ThemeSource::Ambient);
    }

    #[test]
    fn test_toggle_applies_and_persists() {
        let mut prefs = MemoryPreferences::new();
        let (mut controller, mut doc) = load(&prefs, false);

        let theme = controller.toggle(&mut prefs, &mut doc).unwrap();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(doc.applied, vec![Theme::Dark]);
        assert_eq!(prefs.load(THEME_STORAGE_KEY), Ok(Some("dark".to_string())));

        let theme = controller.toggle(&mut prefs, &mut doc).unwrap();
        assert_eq!(theme, Theme::Light);
        assert_eq!(prefs.load(THEME_STORAGE_KEY), Ok(Some("light".to_string())));
    }

    #[test]
    fn test_labels_and_parsing() {
        assert_eq!(Theme::Light.toggle_label(), "Dark");
        assert_eq!(Theme::Dark.toggle_label(), "Light");
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
