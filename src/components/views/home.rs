use crate::api::{Episode, EpisodeQuery, PodcastClient};
use crate::components::views::{ErrorState, LoadingState};
use crate::components::{page_title, AppView, Icon, IconName};
use crate::config::CONFIG;
use crate::player::use_player;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let episodes = use_resource(move || async move {
        PodcastClient::from_config()
            .list_episodes(&EpisodeQuery::latest())
            .await
            .map_err(|err| err.to_string())
    });
    let title = page_title("Home");

    rsx! {
        document::Title { "{title}" }
        {
            match episodes() {
                None => rsx! {
                    LoadingState {}
                },
                Some(Err(message)) => rsx! {
                    ErrorState { heading: "Não foi possível carregar os episódios", message }
                },
                Some(Ok(list)) => rsx! {
                    EpisodeListing { episodes: list }
                },
            }
        }
    }
}

#[component]
fn EpisodeListing(episodes: Vec<Episode>) -> Element {
    let split = CONFIG.latest_count.min(episodes.len());
    let (latest, all) = episodes.split_at(split);

    rsx! {
        div { class: "px-16 h-full",
            section {
                h1 { class: "mt-12 mb-6 font-lexend text-2xl text-gray-800", "Últimos lançamentos" }
                ul { class: "grid grid-cols-2 gap-6",
                    for (index , episode) in latest.iter().enumerate() {
                        LatestEpisodeCard {
                            key: "{episode.id}",
                            episode: episode.clone(),
                            playlist: episodes.clone(),
                            index,
                        }
                    }
                }
            }

            section { class: "pb-8",
                h2 { class: "mt-12 mb-6 font-lexend text-2xl text-gray-800", "Todos os episódios" }
                table { class: "w-full",
                    thead {
                        tr { class: "text-left text-xs uppercase text-gray-200 font-lexend",
                            th { class: "px-4 py-3 border-b border-gray-100" }
                            th { class: "px-4 py-3 border-b border-gray-100", "Podcast" }
                            th { class: "px-4 py-3 border-b border-gray-100", "Integrantes" }
                            th { class: "px-4 py-3 border-b border-gray-100", "Data" }
                            th { class: "px-4 py-3 border-b border-gray-100", "Duração" }
                            th { class: "px-4 py-3 border-b border-gray-100" }
                        }
                    }
                    tbody {
                        for (index , episode) in all.iter().enumerate() {
                            EpisodeRow {
                                key: "{episode.id}",
                                episode: episode.clone(),
                                playlist: episodes.clone(),
                                index: index + split,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LatestEpisodeCard(episode: Episode, playlist: Vec<Episode>, index: usize) -> Element {
    let mut player = use_player();

    rsx! {
        li { class: "relative flex items-center p-5 bg-white border border-gray-100 rounded-3xl",
            img {
                class: "w-24 h-24 rounded-2xl object-cover",
                src: "{episode.thumbnail}",
                alt: "{episode.title}",
            }
            div { class: "flex-1 ml-4 min-w-0",
                Link {
                    class: "block font-lexend font-semibold text-gray-800 leading-6 hover:underline",
                    to: AppView::EpisodeDetail {
                        slug: episode.id.clone(),
                    },
                    "{episode.title}"
                }
                p { class: "mt-2 text-sm truncate", "{episode.members}" }
                span { class: "inline-block mt-2 text-sm", "{episode.published_at}" }
                span { class: "inline-block mt-2 ml-2 pl-2 text-sm border-l border-gray-200",
                    "{episode.formatted_duration}"
                }
            }
            button {
                r#type: "button",
                class: "absolute right-8 bottom-8 w-10 h-10 rounded-xl border border-gray-100 bg-white flex items-center justify-center text-emerald-500 hover:brightness-95 transition",
                onclick: move |_| player.play_list(playlist.clone(), index),
                Icon { name: IconName::Play, class: "w-5 h-5" }
            }
        }
    }
}

#[component]
fn EpisodeRow(episode: Episode, playlist: Vec<Episode>, index: usize) -> Element {
    let mut player = use_player();

    rsx! {
        tr { class: "text-sm",
            td { class: "w-20 px-4 py-3 border-b border-gray-100",
                img {
                    class: "w-10 h-10 rounded-lg object-cover",
                    src: "{episode.thumbnail}",
                    alt: "{episode.title}",
                }
            }
            td { class: "px-4 py-3 border-b border-gray-100",
                Link {
                    class: "font-lexend font-semibold text-gray-800 leading-6 hover:underline",
                    to: AppView::EpisodeDetail {
                        slug: episode.id.clone(),
                    },
                    "{episode.title}"
                }
            }
            td { class: "px-4 py-3 border-b border-gray-100", "{episode.members}" }
            td { class: "w-28 px-4 py-3 border-b border-gray-100", "{episode.published_at}" }
            td { class: "px-4 py-3 border-b border-gray-100", "{episode.formatted_duration}" }
            td { class: "px-4 py-3 border-b border-gray-100",
                button {
                    r#type: "button",
                    class: "w-8 h-8 rounded-lg border border-gray-100 bg-white flex items-center justify-center text-emerald-500 hover:brightness-95 transition",
                    onclick: move |_| player.play_list(playlist.clone(), index),
                    Icon { name: IconName::Play, class: "w-4 h-4" }
                }
            }
        }
    }
}
