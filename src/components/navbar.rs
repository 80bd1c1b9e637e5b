use crate::Route;
use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsHouseDoorFill, BsShieldLock},
    Icon,
};

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let mut show_labels = use_signal(|| true);
    let nav = navigator();

    // Get current path to highlight active link
    let route = use_route::<Route>();

    let is_home = matches!(route, Route::Home {});
    let is_obfuscate = matches!(route, Route::Obfuscate {});

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        // Main layout container - sidebar + content
        div { class: "flex h-screen w-full overflow-hidden bg-gray-900",
            // Sidebar
            div {
                class: "sidebar bg-gray-800 text-white transition-all duration-300 border-r border-gray-700",
                class: if show_labels() { "w-60" } else { "w-20" },
                // App title/logo
                div {
                    class: "flex items-center p-4 border-b border-gray-700",
                    class: if show_labels() { "justify-between" } else { "justify-center" },
                    div { class: "flex items-center",
                        span { class: "text-blue-400 text-2xl mr-2", "🛡" }
                        if show_labels() {
                            span { class: "font-bold text-lg text-white", "JS Obfuscator" }
                        }
                    }
                    // Toggle sidebar width button
                    button {
                        class: "text-gray-400 hover:text-white p-1 rounded-full transition-colors duration-200",
                        onclick: move |_| show_labels.set(!show_labels()),
                        span {
                            class: "block transition-all",
                            class: if show_labels() { "" } else { "rotate-180" },
                            "←"
                        }
                    }
                }
                // Navigation links
                nav { class: "mt-6 px-2",
                    // Home link
                    div {
                        class: "flex items-center py-3 px-3 mb-2 rounded-lg transition-all duration-200 cursor-pointer",
                        class: if !show_labels() { "justify-center" } else { "" },
                        class: if is_home { "bg-blue-600 text-white" } else { "text-gray-400 hover:bg-gray-700 hover:text-white" },
                        onclick: move |_| {
                            nav.replace(Route::Home {});
                        },
                        div { class: if show_labels() { "mr-3" } else { "" },
                            Icon {
                                icon: BsHouseDoorFill,
                                width: 20,
                                height: 20,
                            }
                        }
                        if show_labels() {
                            span { "Home" }
                        }
                    }
                    // Obfuscate link
                    div {
                        class: "flex items-center py-3 px-3 mb-2 rounded-lg transition-all duration-200 cursor-pointer",
                        class: if !show_labels() { "justify-center" } else { "" },
                        class: if is_obfuscate { "bg-blue-600 text-white" } else { "text-gray-400 hover:bg-gray-700 hover:text-white" },
                        onclick: move |_| {
                            nav.replace(Route::Obfuscate {});
                        },
                        div { class: if show_labels() { "mr-3" } else { "" },
                            Icon { icon: BsShieldLock, width: 20, height: 20 }
                        }
                        if show_labels() {
                            span { "Obfuscate" }
                        }
                    }
                }
            }
            // Main content area
            div { class: "flex-1 overflow-auto bg-gray-900 p-6", Outlet::<Route> {} }
        }
    }
}
