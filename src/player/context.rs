use dioxus::prelude::*;

use crate::api::Episode;
use crate::player::PlayerState;

/// Handle to the shared player state. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct PlayerController {
    state: Signal<PlayerState>,
}

impl PlayerController {
    pub fn new(state: Signal<PlayerState>) -> Self {
        Self { state }
    }

    /// Subscribes the calling scope to every player change.
    pub fn snapshot(&self) -> PlayerState {
        (self.state)()
    }

    /// Reactive read of the play flag alone.
    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing
    }

    pub fn play(&mut self, episode: Episode) {
        self.state.with_mut(|state| state.play(episode));
    }

    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        self.state.with_mut(|state| state.play_list(list, index));
    }

    pub fn play_next(&mut self) {
        self.state
            .with_mut(|state| state.play_next_with(&mut rand::thread_rng()));
    }

    pub fn play_previous(&mut self) {
        self.state.with_mut(|state| state.play_previous());
    }

    pub fn switch_play(&mut self) {
        self.state.with_mut(|state| state.switch_play());
    }

    pub fn switch_loop(&mut self) {
        self.state.with_mut(|state| state.switch_loop());
    }

    pub fn switch_shuffle(&mut self) {
        self.state.with_mut(|state| state.switch_shuffle());
    }

    /// Mirrors the audio element's own play/pause events. Skips the write
    /// when nothing changes so the sync effect is not re-triggered.
    pub fn set_playing_state(&mut self, playing: bool) {
        if self.state.peek().playing_state_differs(playing) {
            self.state.with_mut(|state| state.set_playing_state(playing));
        }
    }

    pub fn handle_episode_ended(&mut self) {
        self.state
            .with_mut(|state| state.handle_episode_ended_with(&mut rand::thread_rng()));
    }
}

/// Install the player at the root of the tree.
pub fn use_player_provider() -> PlayerController {
    let state = use_signal(PlayerState::default);
    use_context_provider(|| PlayerController::new(state))
}

pub fn use_player() -> PlayerController {
    use_context::<PlayerController>()
}
