use crate::components::{
    current_time, seek_to, use_playback_sync, Icon, IconName, AUDIO_ELEMENT_ID,
};
use crate::player::use_player;
use crate::utils::format_time;
use dioxus::prelude::*;

mod controls;

use controls::{NextButton, PlayPauseButton, PrevButton, RepeatButton, ShuffleButton};

/// Side panel with the current episode, progress bar and transport controls.
#[component]
pub fn Player() -> Element {
    let mut player = use_player();
    let mut progress = use_signal(|| 0u32);

    use_playback_sync(player);

    let state = player.snapshot();
    let episode = state.current_episode().cloned();
    let duration = episode.as_ref().map(|ep| ep.duration).unwrap_or(0);

    let on_seek = move |e: Event<FormData>| {
        if let Ok(amount) = e.value().parse::<f64>() {
            let amount = amount.clamp(0.0, duration as f64);
            seek_to(amount);
            progress.set(amount as u32);
        }
    };

    rsx! {
        aside { class: "w-[26.5rem] h-screen flex flex-col items-center justify-between px-16 py-12 bg-violet-600 text-white",
            header { class: "flex items-center gap-4",
                Icon { name: IconName::Headphones, class: "w-8 h-8" }
                strong { class: "font-lexend font-semibold", "Tocando agora" }
            }

            {
                match episode.as_ref() {
                    Some(ep) => rsx! {
                        div { class: "text-center",
                            img {
                                class: "w-[18rem] h-[18rem] rounded-3xl object-cover",
                                src: "{ep.thumbnail}",
                                alt: "{ep.title}",
                            }
                            strong { class: "block mt-8 font-lexend text-xl leading-7", "{ep.title}" }
                            span { class: "block mt-4 opacity-60 leading-6", "{ep.members}" }
                        }
                    },
                    None => rsx! {
                        div { class: "w-full h-80 border-2 border-dashed border-violet-300 rounded-3xl bg-gradient-to-br from-violet-500/80 to-black/0 p-16 flex items-center justify-center text-center",
                            strong { "Selecione um podcast para ouvir" }
                        }
                    },
                }
            }

            footer { class: if episode.is_none() { "w-full self-stretch opacity-50" } else { "w-full self-stretch" },
                div { class: "flex items-center gap-2 text-sm",
                    span { class: "inline-block w-16 text-center", "{format_time(progress())}" }
                    div { class: "flex-1",
                        if episode.is_some() {
                            input {
                                class: "w-full accent-emerald-400",
                                r#type: "range",
                                min: "0",
                                max: "{duration}",
                                step: "1",
                                value: "{progress()}",
                                oninput: on_seek,
                            }
                        } else {
                            div { class: "w-full h-1 rounded bg-violet-300" }
                        }
                    }
                    span { class: "inline-block w-16 text-center", "{format_time(duration)}" }
                }

                if let Some(ep) = episode.as_ref() {
                    audio {
                        id: AUDIO_ELEMENT_ID,
                        src: "{ep.url}",
                        autoplay: true,
                        r#loop: state.is_looping,
                        onplay: move |_| player.set_playing_state(true),
                        onpause: move |_| player.set_playing_state(false),
                        onended: move |_| player.handle_episode_ended(),
                        onloadedmetadata: move |_| {
                            seek_to(0.0);
                            progress.set(0);
                        },
                        ontimeupdate: move |_| {
                            spawn(async move {
                                let time = current_time().await;
                                progress.set(time.floor().max(0.0) as u32);
                            });
                        },
                    }
                }

                div { class: "flex items-center justify-center gap-6 mt-10",
                    ShuffleButton {}
                    PrevButton {}
                    PlayPauseButton {}
                    NextButton {}
                    RepeatButton {}
                }
            }
        }
    }
}
