//! Imperative access to the player's `<audio>` element.
//! The element itself is rendered by `Player`; these helpers only poke at it.

use dioxus::prelude::*;

use crate::player::PlayerController;

#[cfg(target_arch = "wasm32")]
use dioxus::logger::tracing::warn;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

pub const AUDIO_ELEMENT_ID: &str = "podcastr-audio";

/// Keep the element's play/pause state in line with the player's flag.
pub fn use_playback_sync(player: PlayerController) {
    let is_playing = use_memo(move || player.is_playing());
    use_effect(move || {
        if is_playing() {
            play_audio();
        } else {
            pause_audio();
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn audio_element() -> Option<HtmlAudioElement> {
    window()?
        .document()?
        .get_element_by_id(AUDIO_ELEMENT_ID)?
        .dyn_into::<HtmlAudioElement>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
pub fn play_audio() {
    let Some(audio) = audio_element() else {
        return;
    };
    match audio.play() {
        Ok(promise) => {
            spawn(async move {
                // Autoplay policies reject the promise until the user interacts with the page.
                if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                    warn!("audio play() was rejected: {err:?}");
                }
            });
        }
        Err(err) => warn!("audio play() failed: {err:?}"),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn pause_audio() {
    if let Some(audio) = audio_element() {
        if let Err(err) = audio.pause() {
            warn!("audio pause() failed: {err:?}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn seek_to(seconds: f64) {
    if let Some(audio) = audio_element() {
        audio.set_current_time(seconds.max(0.0));
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn current_time() -> f64 {
    audio_element()
        .map(|audio| audio.current_time())
        .filter(|time| time.is_finite())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn audio_script(body: &str) -> String {
    format!(
        r#"(function () {{
            const audio = document.getElementById("{AUDIO_ELEMENT_ID}");
            if (!audio) return false;
            {body}
            return true;
        }})();"#
    )
}

#[cfg(not(target_arch = "wasm32"))]
const PLAY_BODY: &str = "audio.play().catch(() => {});";
#[cfg(not(target_arch = "wasm32"))]
const PAUSE_BODY: &str = "audio.pause();";

/// Script run by the sync effect for a given play flag.
#[cfg(not(target_arch = "wasm32"))]
fn sync_script(is_playing: bool) -> String {
    audio_script(if is_playing { PLAY_BODY } else { PAUSE_BODY })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn play_audio() {
    let _ = document::eval(&sync_script(true));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn pause_audio() {
    let _ = document::eval(&sync_script(false));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn seek_to(seconds: f64) {
    let position = seconds.max(0.0);
    let _ = document::eval(&audio_script(&format!("audio.currentTime = {position};")));
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn current_time() -> f64 {
    let eval = document::eval(&format!(
        r#"const audio = document.getElementById("{AUDIO_ELEMENT_ID}");
        return audio && Number.isFinite(audio.currentTime) ? audio.currentTime : 0;"#
    ));
    eval.join::<f64>().await.unwrap_or(0.0)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn script_guards_against_missing_element() {
        let script = audio_script("audio.pause();");
        assert!(script.contains(r#"document.getElementById("podcastr-audio")"#));
        assert!(script.contains("if (!audio) return false;"));
        assert!(script.contains("audio.pause();"));
    }

    #[test]
    fn sync_script_follows_playing_flag() {
        let playing = sync_script(true);
        assert!(playing.contains("audio.play()"));
        assert!(!playing.contains("audio.pause()"));

        let paused = sync_script(false);
        assert!(paused.contains("audio.pause();"));
        assert!(!paused.contains("audio.play()"));
    }
}
