use rand::Rng;

use crate::api::Episode;

/// Playlist and transport flags shared by every page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerState {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
}

impl PlayerState {
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    fn wraps(&self) -> bool {
        self.is_looping && self.episode_list.len() > 1
    }

    pub fn has_prev(&self) -> bool {
        self.current_episode_index > 0 || self.wraps()
    }

    pub fn has_next(&self) -> bool {
        self.current_episode_index + 1 < self.episode_list.len() || self.is_shuffling || self.wraps()
    }

    /// Play a single episode, replacing the playlist.
    pub fn play(&mut self, episode: Episode) {
        self.episode_list = vec![episode];
        self.current_episode_index = 0;
        self.is_playing = true;
    }

    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        self.current_episode_index = index.min(list.len().saturating_sub(1));
        self.episode_list = list;
        self.is_playing = true;
    }

    pub fn play_next_with<R: Rng>(&mut self, rng: &mut R) {
        let len = self.episode_list.len();
        if len == 0 {
            return;
        }
        if self.is_shuffling {
            self.current_episode_index = rng.gen_range(0..len);
        } else if self.current_episode_index + 1 < len {
            self.current_episode_index += 1;
        } else if self.is_looping {
            self.current_episode_index = 0;
        }
    }

    pub fn play_previous(&mut self) {
        if self.current_episode_index > 0 {
            self.current_episode_index -= 1;
        } else if self.wraps() {
            self.current_episode_index = self.episode_list.len() - 1;
        }
    }

    pub fn switch_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn switch_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn switch_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    pub fn set_playing_state(&mut self, state: bool) {
        self.is_playing = state;
    }

    /// Whether mirroring an audio play/pause event would change anything.
    /// Writing an unchanged flag would wake the sync effect for nothing.
    pub fn playing_state_differs(&self, state: bool) -> bool {
        self.is_playing != state
    }

    /// Drop the playlist. Loop and shuffle preferences are kept.
    pub fn clear(&mut self) {
        self.episode_list.clear();
        self.current_episode_index = 0;
        self.is_playing = false;
    }

    /// The audio element finished the current episode.
    pub fn handle_episode_ended_with<R: Rng>(&mut self, rng: &mut R) {
        if self.has_next() {
            // `pause` fires before `ended`, so the flag is already false here.
            self.play_next_with(rng);
            self.is_playing = true;
        } else {
            self.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn episode(id: &str) -> Episode {
        Episode {
            id: id.to_string(),
            title: format!("Episode {id}"),
            duration: 60,
            ..Default::default()
        }
    }

    fn playlist(count: usize) -> Vec<Episode> {
        (0..count).map(|i| episode(&i.to_string())).collect()
    }

    #[test]
    fn empty_player_has_nothing_to_navigate() {
        let state = PlayerState::default();
        assert!(state.current_episode().is_none());
        assert!(!state.has_prev());
        assert!(!state.has_next());
        assert!(!state.is_playing);
    }

    #[test]
    fn play_replaces_list_with_single_episode() {
        let mut state = PlayerState::default();
        state.play_list(playlist(3), 2);
        state.play(episode("solo"));

        assert_eq!(state.episode_list.len(), 1);
        assert_eq!(state.current_episode_index, 0);
        assert_eq!(state.current_episode().unwrap().id, "solo");
        assert!(state.is_playing);
    }

    #[test]
    fn play_list_starts_at_given_index() {
        let mut state = PlayerState::default();
        state.play_list(playlist(4), 2);
        assert_eq!(state.current_episode().unwrap().id, "2");
        assert!(state.has_prev());
        assert!(state.has_next());
        assert!(state.is_playing);
    }

    #[test]
    fn play_list_clamps_out_of_range_index() {
        let mut state = PlayerState::default();
        state.play_list(playlist(3), 10);
        assert_eq!(state.current_episode_index, 2);

        state.play_list(Vec::new(), 4);
        assert_eq!(state.current_episode_index, 0);
        assert!(state.current_episode().is_none());
    }

    #[test]
    fn next_and_previous_stop_at_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut state = PlayerState::default();
        state.play_list(playlist(2), 0);

        state.play_previous();
        assert_eq!(state.current_episode_index, 0);

        state.play_next_with(&mut rng);
        assert_eq!(state.current_episode_index, 1);
        assert!(!state.has_next());

        state.play_next_with(&mut rng);
        assert_eq!(state.current_episode_index, 1);

        state.play_previous();
        assert_eq!(state.current_episode_index, 0);
    }

    #[test]
    fn shuffling_always_has_next_and_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut state = PlayerState::default();
        state.play_list(playlist(5), 4);
        assert!(!state.has_next());

        state.switch_shuffle();
        assert!(state.has_next());

        let mut seen = [false; 5];
        for _ in 0..200 {
            state.play_next_with(&mut rng);
            assert!(state.current_episode_index < 5);
            seen[state.current_episode_index] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn shuffle_on_empty_list_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = PlayerState::default();
        state.switch_shuffle();
        state.play_next_with(&mut rng);
        assert_eq!(state.current_episode_index, 0);
    }

    #[test]
    fn looping_wraps_both_directions() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut state = PlayerState::default();
        state.play_list(playlist(3), 2);
        state.switch_loop();

        assert!(state.has_next());
        state.play_next_with(&mut rng);
        assert_eq!(state.current_episode_index, 0);

        assert!(state.has_prev());
        state.play_previous();
        assert_eq!(state.current_episode_index, 2);
    }

    #[test]
    fn looping_a_single_episode_does_not_enable_navigation() {
        let mut state = PlayerState::default();
        state.play(episode("solo"));
        state.switch_loop();
        assert!(!state.has_next());
        assert!(!state.has_prev());
    }

    #[test]
    fn toggles_flip_flags() {
        let mut state = PlayerState::default();
        state.switch_play();
        assert!(state.is_playing);
        state.switch_play();
        assert!(!state.is_playing);

        state.switch_loop();
        assert!(state.is_looping);
        state.switch_shuffle();
        assert!(state.is_shuffling);

        state.set_playing_state(true);
        assert!(state.is_playing);
        state.set_playing_state(false);
        assert!(!state.is_playing);
    }

    #[test]
    fn ended_advances_when_there_is_a_next_episode() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = PlayerState::default();
        state.play_list(playlist(3), 0);

        state.handle_episode_ended_with(&mut rng);
        assert_eq!(state.current_episode_index, 1);
        assert!(state.is_playing);
    }

    #[test]
    fn ended_on_last_episode_clears_but_keeps_preferences() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = PlayerState::default();
        state.play_list(playlist(2), 1);

        state.handle_episode_ended_with(&mut rng);
        assert!(state.episode_list.is_empty());
        assert!(state.current_episode().is_none());
        assert!(!state.is_playing);

        let mut state = PlayerState {
            is_shuffling: true,
            ..Default::default()
        };
        state.play(episode("solo"));
        state.set_playing_state(false);
        state.handle_episode_ended_with(&mut rng);
        assert_eq!(state.current_episode().unwrap().id, "solo");
        assert!(state.is_playing);

        state.switch_shuffle();
        state.handle_episode_ended_with(&mut rng);
        assert!(state.current_episode().is_none());
        assert!(!state.is_shuffling);
    }

    #[test]
    fn ended_resumes_playback_after_the_pause_event() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut state = PlayerState::default();
        state.play_list(playlist(3), 0);

        state.set_playing_state(false);
        state.handle_episode_ended_with(&mut rng);
        assert_eq!(state.current_episode_index, 1);
        assert!(state.is_playing);

        let mut state = PlayerState {
            is_shuffling: true,
            ..Default::default()
        };
        state.play(episode("solo"));
        state.set_playing_state(false);
        state.handle_episode_ended_with(&mut rng);
        assert_eq!(state.current_episode_index, 0);
        assert!(state.is_playing);
    }

    #[test]
    fn unchanged_playing_flag_needs_no_write() {
        let mut state = PlayerState::default();
        assert!(!state.playing_state_differs(false));
        assert!(state.playing_state_differs(true));

        state.play(episode("a"));
        assert!(!state.playing_state_differs(true));
        assert!(state.playing_state_differs(false));
    }
}
