pub mod background;
pub mod color_mode;

pub use background::{
    app_background_color,
    use_app_background,
    AppBackground,
    BackgroundColors,
    BackgroundOptions,
    ColorPair,
    BACKGROUND_PRESETS,
};
pub use color_mode::{ use_color_mode, ColorMode, ColorPreference, COLOR_MODE };
