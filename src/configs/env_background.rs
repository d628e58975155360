use std::env::VarError;

use crate::error::ConfigError;
use crate::utils::{ BackgroundOptions, ColorPreference };

pub const BACKGROUND_JSON_VAR: &str = "APP_BACKGROUND";
pub const BACKGROUND_DARK_VAR: &str = "APP_BACKGROUND_DARK";
pub const BACKGROUND_LIGHT_VAR: &str = "APP_BACKGROUND_LIGHT";
pub const COLOR_MODE_VAR: &str = "APP_COLOR_MODE";

/// Startup configuration read from the environment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    /// `None` when no background variable is set, so the presets keep their
    /// defaults.
    pub background: Option<BackgroundOptions>,
    pub color_mode: Option<ColorPreference>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::load_with(|var| std::env::var(var))
    }

    /// Loads using `lookup` in place of the process environment. A variable
    /// that can't be used is logged and skipped.
    pub fn load_with<F>(lookup: F) -> Self where F: Fn(&str) -> Result<String, VarError> {
        let mut options = BackgroundOptions::default();

        match read_var(&lookup, BACKGROUND_JSON_VAR) {
            Ok(Some(json)) => {
                match serde_json::from_str::<BackgroundOptions>(&json) {
                    Ok(parsed) => {
                        options = parsed;
                    }
                    Err(e) => log::warn!("{}", ConfigError::json(BACKGROUND_JSON_VAR, e)),
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("{}", e),
        }

        match read_var(&lookup, BACKGROUND_DARK_VAR) {
            Ok(Some(dark)) => {
                options.dark = Some(dark);
            }
            Ok(None) => {}
            Err(e) => log::warn!("{}", e),
        }

        match read_var(&lookup, BACKGROUND_LIGHT_VAR) {
            Ok(Some(light)) => {
                options.light = Some(light);
            }
            Ok(None) => {}
            Err(e) => log::warn!("{}", e),
        }

        let color_mode = match read_var(&lookup, COLOR_MODE_VAR) {
            Ok(value) => value.map(ColorPreference::from),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        };

        let background = if options.is_empty() { None } else { Some(options) };
        log::info!("Loaded background config: {:?}, color mode: {:?}", background, color_mode);

        Self { background, color_mode }
    }
}

fn read_var<F>(lookup: &F, var: &str) -> Result<Option<String>, ConfigError>
    where F: Fn(&str) -> Result<String, VarError>
{
    match lookup(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::not_unicode(var)),
    }
}
