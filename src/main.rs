use dioxus::prelude::*;
use app_background::{ use_app_background, use_color_mode, AppConfig, Route };

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).ok();
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(AppConfig::from_env);
    let color_mode = use_color_mode();
    use_hook(|| {
        if let Some(preference) = config.color_mode.clone() {
            color_mode.set_preference(preference);
        }
    });
    let background = use_app_background(config.background.clone());

    let background_color = background.background_color.cloned();

    rsx! {
        div {
            class: color_mode.preference().css_class(),
            style: "background-color: {background_color}; min-height: 100vh;",
            Router::<Route> {}
        }
    }
}
