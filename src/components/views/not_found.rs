use crate::components::{page_title, AppView};
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let title = page_title("Página não encontrada");

    rsx! {
        document::Title { "{title}" }
        div { class: "px-16 py-24 text-center",
            h1 { class: "font-lexend text-2xl text-gray-800 mb-4", "Página não encontrada" }
            p { class: "mb-8", "Nada por aqui em {path}." }
            Link {
                to: AppView::Home {},
                class: "inline-block px-6 py-3 rounded-xl bg-violet-500 text-white hover:brightness-90 transition",
                "Voltar para o início"
            }
        }
    }
}
