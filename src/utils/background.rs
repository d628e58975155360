//! Theme-aware app background.
//!
//! There is a single [`ColorPair`] per app. Every caller of
//! [`use_app_background`] reads and writes the same pair, so an override made
//! by one component is seen by all of them.

use dioxus::prelude::*;
use serde::{ Deserialize, Serialize };

use crate::utils::color_mode::{ ColorPreference, COLOR_MODE };

pub const DEFAULT_DARK_BACKGROUND: &str = "#222";
pub const DEFAULT_LIGHT_BACKGROUND: &str = "#fff";

/// Background color for each side of the dark/light split.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub dark: String,
    pub light: String,
}

impl Default for ColorPair {
    fn default() -> Self {
        Self {
            dark: DEFAULT_DARK_BACKGROUND.to_string(),
            light: DEFAULT_LIGHT_BACKGROUND.to_string(),
        }
    }
}

/// Optional overrides passed to [`use_app_background`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundOptions {
    #[serde(default)]
    pub dark: Option<String>,
    #[serde(default)]
    pub light: Option<String>,
}

impl BackgroundOptions {
    pub fn is_empty(&self) -> bool {
        self.dark.is_none() && self.light.is_none()
    }
}

/// Argument of the background setter. Only one of the two fields is used
/// per call, picked by the preference at call time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundColors {
    pub dark: String,
    pub light: String,
}

impl ColorPair {
    pub fn select(&self, preference: &ColorPreference) -> &str {
        if preference.is_dark() { &self.dark } else { &self.light }
    }

    /// Overwrites every slot whose option is present. `None` leaves the pair
    /// untouched. Values are stored as given.
    pub fn apply_options(&mut self, options: Option<&BackgroundOptions>) {
        let Some(options) = options else {
            return;
        };
        if let Some(dark) = &options.dark {
            log::debug!("Dark background preset set to {}", dark);
            self.dark = dark.clone();
        }
        if let Some(light) = &options.light {
            log::debug!("Light background preset set to {}", light);
            self.light = light.clone();
        }
    }

    /// Writes exactly one slot: `dark` when the preference is dark,
    /// `light` otherwise.
    pub fn set_for(&mut self, preference: &ColorPreference, colors: BackgroundColors) {
        if preference.is_dark() {
            log::debug!("Dark background set to {}", colors.dark);
            self.dark = colors.dark;
        } else {
            log::debug!("Light background set to {} (preference: {})", colors.light, preference);
            self.light = colors.light;
        }
    }
}

pub static BACKGROUND_PRESETS: GlobalSignal<ColorPair> = GlobalSignal::new(|| ColorPair::default());

static BACKGROUND_COLOR: GlobalMemo<String> = Signal::global_memo(|| {
    BACKGROUND_PRESETS.read().select(&COLOR_MODE.read()).to_string()
});

#[derive(Clone, Copy, PartialEq)]
pub struct AppBackground {
    /// Background for the current preference. Recomputed when the preference
    /// or either preset changes.
    pub background_color: Memo<String>,
    /// Overwrites the preset of the preference active when it is called.
    pub set_background_color: Callback<BackgroundColors>,
}

/// Shared background color for the current color mode.
///
/// `options` are applied on the first render of the calling component only;
/// later renders leave the presets alone so values written through
/// `set_background_color` stick.
pub fn use_app_background(options: Option<BackgroundOptions>) -> AppBackground {
    use_hook(move || {
        if options.is_some() {
            BACKGROUND_PRESETS.write().apply_options(options.as_ref());
        }
    });

    let background_color = use_hook(|| BACKGROUND_COLOR.resolve());

    let set_background_color = use_callback(move |colors: BackgroundColors| {
        let preference = ColorPreference::clone(&COLOR_MODE.peek());
        BACKGROUND_PRESETS.write().set_for(&preference, colors);
    });

    AppBackground {
        background_color,
        set_background_color,
    }
}

/// Current background color, for use outside of component bodies.
pub fn app_background_color() -> String {
    BACKGROUND_COLOR.cloned()
}
