use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod diagnostics;
mod error;
mod player;
mod utils;

use components::AppView;
use player::use_player_provider;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The player outlives route changes, so it is provided above the router.
    use_player_provider();

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Stylesheet { href: "https://fonts.googleapis.com/css2?family=Inter:wght@500;600&family=Lexend:wght@500;600&display=swap" }
        document::Meta { name: "theme-color", content: "#8257e5" }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: APP_CSS }

        Router::<AppView> {}
    }
}
