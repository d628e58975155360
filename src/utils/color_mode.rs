//! App-wide color mode preference.
//!
//! Components read the preference through [`use_color_mode`]; anything that
//! only needs to know whether the app is dark reads [`COLOR_MODE`] directly.

use std::convert::Infallible;
use std::fmt::{ Display, Formatter };
use std::hash::{ Hash, Hasher };
use std::str::FromStr;

use dioxus::prelude::*;
use serde::{ Deserialize, Serialize };

/// The user's selected color scheme.
///
/// Only the name `"dark"` counts as dark. `System` and any other name fall
/// through to the light side. Values compare by name, so `Custom("dark")`
/// and `Dark` are the same preference.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorPreference {
    #[default]
    System,
    Light,
    Dark,
    Custom(String),
}

impl ColorPreference {
    pub fn is_dark(&self) -> bool {
        self.as_str() == "dark"
    }

    pub fn as_str(&self) -> &str {
        match self {
            ColorPreference::System => "system",
            ColorPreference::Light => "light",
            ColorPreference::Dark => "dark",
            ColorPreference::Custom(name) => name,
        }
    }

    /// Class for the root element, empty unless dark.
    pub fn css_class(&self) -> &'static str {
        if self.is_dark() { "dark" } else { "" }
    }
}

impl PartialEq for ColorPreference {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ColorPreference {}

impl Hash for ColorPreference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for ColorPreference {
    fn from(s: &str) -> Self {
        match s {
            "system" => ColorPreference::System,
            "light" => ColorPreference::Light,
            "dark" => ColorPreference::Dark,
            other => ColorPreference::Custom(other.to_string()),
        }
    }
}

impl From<String> for ColorPreference {
    fn from(s: String) -> Self {
        match s.as_str() {
            "system" | "light" | "dark" => ColorPreference::from(s.as_str()),
            _ => ColorPreference::Custom(s),
        }
    }
}

impl From<ColorPreference> for String {
    fn from(preference: ColorPreference) -> Self {
        match preference {
            ColorPreference::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl FromStr for ColorPreference {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ColorPreference::from(s))
    }
}

impl Display for ColorPreference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current preference, shared by every component in the app.
pub static COLOR_MODE: GlobalSignal<ColorPreference> = GlobalSignal::new(|| ColorPreference::default());

/// Handle over [`COLOR_MODE`].
#[derive(Clone, Copy, PartialEq)]
pub struct ColorMode {
    preference: Signal<ColorPreference>,
}

impl ColorMode {
    pub fn preference(&self) -> ColorPreference {
        self.preference.cloned()
    }

    pub fn is_dark(&self) -> bool {
        self.preference.read().is_dark()
    }

    pub fn set_preference(&self, preference: impl Into<ColorPreference>) {
        let preference = preference.into();
        log::debug!("Color mode preference set to {}", preference);
        let mut signal = self.preference;
        signal.set(preference);
    }

    /// Dark goes to light; everything else goes to dark.
    pub fn toggle(&self) {
        let next = if self.preference.peek().is_dark() {
            ColorPreference::Light
        } else {
            ColorPreference::Dark
        };
        self.set_preference(next);
    }
}

pub fn use_color_mode() -> ColorMode {
    use_hook(|| ColorMode { preference: COLOR_MODE.resolve() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_preferences() {
        assert_eq!(ColorPreference::from("dark"), ColorPreference::Dark);
        assert_eq!(ColorPreference::from("light"), ColorPreference::Light);
        assert_eq!(ColorPreference::from("system"), ColorPreference::System);
        assert_eq!("dark".parse::<ColorPreference>(), Ok(ColorPreference::Dark));
    }

    #[test]
    fn test_unknown_preference_is_kept_and_not_dark() {
        let sepia = ColorPreference::from("sepia");
        assert_eq!(sepia, ColorPreference::Custom("sepia".to_string()));
        assert!(!sepia.is_dark());
        assert_eq!(sepia.to_string(), "sepia");
    }

    #[test]
    fn test_only_dark_is_dark() {
        assert!(ColorPreference::Dark.is_dark());
        assert!(!ColorPreference::Light.is_dark());
        assert!(!ColorPreference::System.is_dark());
        assert!(!ColorPreference::from("Dark").is_dark());
    }

    #[test]
    fn test_custom_named_dark_is_dark() {
        let custom = ColorPreference::Custom("dark".to_string());
        assert!(custom.is_dark());
        assert_eq!(custom.css_class(), "dark");
        assert_eq!(custom, ColorPreference::Dark);

        let json = serde_json::to_string(&custom).unwrap();
        let parsed: ColorPreference = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, custom);
        assert!(parsed.is_dark());
    }

    #[test]
    fn test_css_class() {
        assert_eq!(ColorPreference::Dark.css_class(), "dark");
        assert_eq!(ColorPreference::System.css_class(), "");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&ColorPreference::Dark).unwrap();
        assert_eq!(json, "\"dark\"");

        let parsed: ColorPreference = serde_json::from_str("\"high-contrast\"").unwrap();
        assert_eq!(parsed, ColorPreference::Custom("high-contrast".to_string()));
    }

    #[test]
    fn test_default_is_system() {
        assert_eq!(ColorPreference::default(), ColorPreference::System);
    }
}
