use crate::components::{Icon, IconName};
use crate::player::use_player;
use dioxus::prelude::*;

const TOGGLE_IDLE: &str = "p-2 text-violet-200 hover:text-white transition-colors disabled:opacity-50 disabled:cursor-not-allowed";
const TOGGLE_ACTIVE: &str = "p-2 text-emerald-400 hover:text-emerald-300 transition-colors disabled:opacity-50 disabled:cursor-not-allowed";
const TRANSPORT: &str = "p-2 text-white hover:brightness-90 transition disabled:opacity-50 disabled:cursor-not-allowed";

/// Shuffle toggle. Pointless with a single episode, so it is disabled then.
#[component]
pub(super) fn ShuffleButton() -> Element {
    let mut player = use_player();
    let state = player.snapshot();
    let disabled = state.current_episode().is_none() || state.episode_list.len() == 1;

    rsx! {
        button {
            id: "shuffle-btn",
            r#type: "button",
            disabled,
            class: if state.is_shuffling { TOGGLE_ACTIVE } else { TOGGLE_IDLE },
            onclick: move |_| player.switch_shuffle(),
            Icon { name: IconName::Shuffle, class: "w-5 h-5" }
        }
    }
}

#[component]
pub(super) fn PrevButton() -> Element {
    let mut player = use_player();
    let state = player.snapshot();
    let disabled = state.current_episode().is_none() || !state.has_prev();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            disabled,
            class: TRANSPORT,
            onclick: move |_| player.play_previous(),
            Icon { name: IconName::Previous, class: "w-5 h-5" }
        }
    }
}

#[component]
pub(super) fn PlayPauseButton() -> Element {
    let mut player = use_player();
    let state = player.snapshot();
    let has_episode = state.current_episode().is_some();

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            disabled: !has_episode,
            class: "w-16 h-16 rounded-2xl bg-violet-400 flex items-center justify-center hover:brightness-95 transition disabled:opacity-50 disabled:cursor-not-allowed",
            onclick: move |_| player.switch_play(),
            if state.is_playing {
                Icon { name: IconName::Pause, class: "w-6 h-6 text-white" }
            } else {
                Icon { name: IconName::Play, class: "w-6 h-6 text-white" }
            }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let mut player = use_player();
    let state = player.snapshot();
    let disabled = state.current_episode().is_none() || !state.has_next();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            disabled,
            class: TRANSPORT,
            onclick: move |_| player.play_next(),
            Icon { name: IconName::Next, class: "w-5 h-5" }
        }
    }
}

/// Loop toggle. Repeats the current episode and lets next/previous wrap.
#[component]
pub(super) fn RepeatButton() -> Element {
    let mut player = use_player();
    let state = player.snapshot();

    rsx! {
        button {
            id: "repeat-btn",
            r#type: "button",
            disabled: state.current_episode().is_none(),
            class: if state.is_looping { TOGGLE_ACTIVE } else { TOGGLE_IDLE },
            onclick: move |_| player.switch_loop(),
            Icon { name: IconName::Repeat, class: "w-5 h-5" }
        }
    }
}
