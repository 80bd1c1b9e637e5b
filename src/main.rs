#![recursion_limit = "256"]

use dioxus::prelude::*;

use components::Navbar;
use views::{Home, Obfuscate};

mod components;
mod server;
mod views;

// Add the common module to the root
pub mod common;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Home {},
    #[route("/obfuscate")]
    Obfuscate {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    // Launch the app based on target platform
    #[cfg(feature = "desktop")]
    {
        LaunchBuilder::desktop().launch(App);
    }

    #[cfg(feature = "web")]
    {
        LaunchBuilder::web().launch(App);
    }

    #[cfg(not(any(feature = "desktop", feature = "web")))]
    {
        LaunchBuilder::new().launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }

        Router::<Route> {}
    }
}
