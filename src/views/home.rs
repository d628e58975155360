use dioxus::prelude::*;
use crate::utils::{ use_app_background, use_color_mode, BackgroundColors, ColorPair, BACKGROUND_PRESETS };

#[component]
pub fn Home() -> Element {
    let background = use_app_background(None);
    let color_mode = use_color_mode();
    let mut draft = use_signal(String::new);

    let current = background.background_color.cloned();
    let ColorPair { dark: dark_preset, light: light_preset } = BACKGROUND_PRESETS.cloned();
    let side = if color_mode.is_dark() { "dark" } else { "light" };

    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 {
                class: "text-2xl font-bold mb-4",
                "App background"
            }
            p {
                class: "text-gray-600 mb-4",
                "Current background: {current}"
            }
            ul {
                class: "mb-4 text-sm",
                li { "Dark preset: {dark_preset}" }
                li { "Light preset: {light_preset}" }
            }
            div {
                class: "flex items-center space-x-2",
                input {
                    class: "px-3 py-1 border rounded text-sm",
                    placeholder: "#333",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button {
                    class: "px-3 py-1 bg-blue-500 text-white rounded text-sm hover:bg-blue-600 transition duration-300 ease-in-out",
                    onclick: move |_| {
                        let color = draft();
                        background.set_background_color.call(BackgroundColors {
                            dark: color.clone(),
                            light: color,
                        });
                    },
                    "Set {side} background"
                }
            }
        }
    }
}
