use crate::components::{Icon, IconName};
use dioxus::prelude::*;

#[component]
pub fn LoadingState() -> Element {
    rsx! {
        div { class: "flex items-center justify-center gap-3 py-24 text-violet-500",
            Icon { name: IconName::Loader, class: "w-6 h-6" }
            span { "Carregando episódios..." }
        }
    }
}

#[component]
pub fn ErrorState(#[props(into)] heading: String, message: String) -> Element {
    rsx! {
        div { class: "mx-16 my-12 rounded-2xl border border-rose-300 bg-rose-50 px-6 py-4 text-rose-700",
            strong { class: "block font-lexend mb-1", "{heading}" }
            p { class: "text-sm break-words", "{message}" }
        }
    }
}
