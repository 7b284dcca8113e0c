//! Theme values and the transition between them.
//!
//! DESIGN
//! ======
//! The persisted preference is never validated, so the value on screen is an
//! [`AppliedTheme`]: either a known [`Theme`] or the raw string that was read
//! back from storage. Only an exact `dark` counts as dark, and toggling from
//! anything other than an exact `light` lands on `light`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

/// The two visual modes a page can be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute/storage representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Exact, case-sensitive match against the attribute representation.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The theme value currently rendered on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppliedTheme {
    Known(Theme),
    /// A stored value that is neither `light` nor `dark`, rendered verbatim.
    Unrecognized(String),
}

impl Default for AppliedTheme {
    fn default() -> Self {
        Self::Known(Theme::Light)
    }
}

impl From<Theme> for AppliedTheme {
    fn from(theme: Theme) -> Self {
        Self::Known(theme)
    }
}

impl AppliedTheme {
    /// Resolve the value read from storage. Missing and empty values fall back
    /// to light; anything else is kept as-is.
    #[must_use]
    pub fn from_stored(value: Option<String>) -> Self {
        match value {
            Some(raw) if !raw.is_empty() => Theme::parse(&raw).map_or(Self::Unrecognized(raw), Self::Known),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(theme) => theme.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Known(Theme::Dark))
    }

    /// Theme reached by one toggle. Only an exact `light` goes to dark.
    #[must_use]
    pub fn toggled(&self) -> Theme {
        match self {
            Self::Known(Theme::Light) => Theme::Dark,
            Self::Known(Theme::Dark) | Self::Unrecognized(_) => Theme::Light,
        }
    }
}

impl fmt::Display for AppliedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
