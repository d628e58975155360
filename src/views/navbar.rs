use dioxus::prelude::*;
use crate::{
    routes::Route,
    utils::{ use_app_background, use_color_mode },
};

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let color_mode = use_color_mode();
    let is_dark = color_mode.is_dark();
    let preference = color_mode.preference();
    let nav_background = use_app_background(None).background_color.cloned();

    rsx! {
        div {
            nav {
                class: "shadow-lg border-b transition-colors duration-200",
                style: "background-color: {nav_background};",
                div {
                    id: "navbar",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    div {
                        class: "flex items-center space-x-6",
                        Link {
                            class: if is_dark {
                                "text-white hover:text-primary transition-colors"
                            } else {
                                "text-gray-800 hover:text-primary transition-colors"
                            },
                            to: Route::Home,
                            "Home"
                        }
                        span {
                            class: "text-sm text-gray-500",
                            "Mode: {preference}"
                        }
                    }
                    button {
                        class: if is_dark {
                            "p-2 rounded-lg bg-gray-700 hover:bg-gray-600 transition-colors"
                        } else {
                            "p-2 rounded-lg bg-gray-200 hover:bg-gray-300 transition-colors"
                        },
                        onclick: move |_| color_mode.toggle(),
                        if is_dark {
                            "🌞"
                        } else {
                            "🌙"
                        }
                    }
                }
            }
            Outlet::<Route> {}
        }
    }
}
