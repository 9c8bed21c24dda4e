use crate::components::{AppView, Header, Player};
use dioxus::prelude::*;

/// Layout shared by every route: header and page on the left, player on the right.
#[component]
pub fn AppShell() -> Element {
    rsx! {
        div { class: "flex min-h-screen bg-gray-50 text-gray-500",
            main { class: "flex-1 min-w-0",
                Header {}
                div { class: "h-[calc(100vh-6rem)] overflow-y-auto", Outlet::<AppView> {} }
            }
            Player {}
        }
    }
}
