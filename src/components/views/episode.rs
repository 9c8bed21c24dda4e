use crate::api::{Episode, PodcastClient};
use crate::components::views::{ErrorState, LoadingState};
use crate::components::{page_title, AppView, Icon, IconName};
use crate::player::use_player;
use dioxus::prelude::*;

#[component]
pub fn EpisodeDetail(slug: String) -> Element {
    // Re-fetch when navigating between episodes without leaving the route.
    let episode = use_resource(use_reactive((&slug,), |(slug,)| async move {
        let client = PodcastClient::from_config();
        match client.get_episode(&slug).await {
            Ok(episode) => Ok(episode),
            Err(err) if err.is_not_found() => Err(format!("Episódio \"{slug}\" não encontrado.")),
            Err(err) => Err(err.to_string()),
        }
    }));
    let fallback_title = page_title("Episódio");

    match episode() {
        None => rsx! {
            LoadingState {}
        },
        Some(Err(message)) => rsx! {
            document::Title { "{fallback_title}" }
            ErrorState { heading: "Não foi possível carregar o episódio", message }
        },
        Some(Ok(episode)) => rsx! {
            EpisodeBody { episode }
        },
    }
}

#[component]
fn EpisodeBody(episode: Episode) -> Element {
    let mut player = use_player();
    let title = page_title(&episode.title);
    let selected = episode.clone();

    rsx! {
        document::Title { "{title}" }
        div { class: "max-w-3xl mx-auto px-8 py-12",
            div { class: "relative",
                Link {
                    to: AppView::Home {},
                    class: "absolute left-0 top-1/2 -translate-x-1/2 -translate-y-1/2 z-10 w-12 h-12 rounded-xl bg-violet-500 text-white flex items-center justify-center hover:brightness-90 transition",
                    Icon { name: IconName::ArrowLeft, class: "w-6 h-6" }
                }
                img {
                    class: "w-full h-40 rounded-2xl object-cover",
                    src: "{episode.thumbnail}",
                    alt: "{episode.title}",
                }
                button {
                    r#type: "button",
                    class: "absolute right-0 top-1/2 translate-x-1/2 -translate-y-1/2 z-10 w-12 h-12 rounded-xl bg-emerald-500 text-white flex items-center justify-center hover:brightness-90 transition",
                    onclick: move |_| player.play(selected.clone()),
                    Icon { name: IconName::Play, class: "w-6 h-6" }
                }
            }

            header { class: "pb-4 border-b border-gray-100",
                h1 { class: "mt-8 mb-6 font-lexend text-3xl text-gray-800", "{episode.title}" }
                span { class: "inline-block text-sm", "{episode.members}" }
                span { class: "inline-block ml-4 pl-4 text-sm border-l border-gray-200",
                    "{episode.published_at}"
                }
                span { class: "inline-block ml-4 pl-4 text-sm border-l border-gray-200",
                    "{episode.formatted_duration}"
                }
            }

            div {
                class: "mt-8 leading-8 text-gray-800 space-y-6",
                dangerous_inner_html: "{episode.description}",
            }
        }
    }
}
