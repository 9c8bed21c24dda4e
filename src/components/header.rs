use crate::components::AppView;
use crate::utils::format_header_date;
use chrono::Local;
use dioxus::prelude::*;

#[component]
pub fn Header() -> Element {
    let today = format_header_date(Local::now().date_naive());

    rsx! {
        header { class: "h-24 flex items-center gap-8 px-16 py-8 bg-white border-b border-gray-100",
            Link { to: AppView::Home {}, class: "flex items-center gap-2",
                div { class: "w-9 h-9 rounded-xl bg-gradient-to-br from-violet-500 to-violet-700 flex items-center justify-center text-white font-lexend font-bold",
                    "P"
                }
                span { class: "font-lexend text-xl font-semibold text-violet-700", "Podcastr" }
            }
            p { class: "py-1 pl-8 border-l border-gray-100", "O melhor para você ouvir, sempre" }
            span { class: "ml-auto capitalize", "{today}" }
        }
    }
}
