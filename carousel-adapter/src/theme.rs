use alloc::string::String;

/// Storage key for the base theme ("light"/"dark").
pub const THEME_KEY: &str = "theme";
/// Storage keys for the optional custom accent colors.
pub const PRIMARY_KEY: &str = "theme_primary";
pub const SECONDARY_KEY: &str = "theme_secondary";
pub const ACCENT_KEY: &str = "theme_accent";

/// Host-provided durable key-value store.
///
/// In a browser this is the page's local storage; tests use a plain map.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value; anything unrecognized is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// The persisted appearance preferences read at page load: the base theme
/// plus optional custom primary/secondary/accent color strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemePrefs {
    pub theme: Theme,
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
}

impl ThemePrefs {
    /// Loads preferences from the store; a missing or unrecognized theme
    /// falls back to light.
    pub fn load(store: &impl PrefStore) -> Self {
        let theme = store
            .get(THEME_KEY)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default();
        Self {
            theme,
            primary: store.get(PRIMARY_KEY),
            secondary: store.get(SECONDARY_KEY),
            accent: store.get(ACCENT_KEY),
        }
    }

    pub fn has_custom_colors(&self) -> bool {
        self.primary.is_some() || self.secondary.is_some() || self.accent.is_some()
    }
}

/// Flips the theme and persists the new value. Returns the new theme.
pub fn toggle_theme(store: &mut impl PrefStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.set(THEME_KEY, next.as_str());
    next
}
