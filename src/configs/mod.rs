mod env_background;

pub use env_background::{
    AppConfig,
    BACKGROUND_DARK_VAR,
    BACKGROUND_JSON_VAR,
    BACKGROUND_LIGHT_VAR,
    COLOR_MODE_VAR,
};
