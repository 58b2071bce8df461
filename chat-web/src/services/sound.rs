//! Optional audio cues: one on send, one looping while a reply is awaited.

use log::debug;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

use crate::utils::constants::{BOT_SOUND, USER_SOUND};

pub struct SoundCues {
    sent: Option<HtmlAudioElement>,
    waiting: Option<HtmlAudioElement>,
}

impl SoundCues {
    pub fn new() -> Self {
        Self {
            sent: HtmlAudioElement::new_with_src(USER_SOUND).ok(),
            waiting: HtmlAudioElement::new_with_src(BOT_SOUND).ok(),
        }
    }

    pub fn play_sent(&self) {
        if let Some(audio) = &self.sent {
            play(audio);
        }
    }

    pub fn set_waiting(&self, waiting: bool) {
        let Some(audio) = &self.waiting else {
            return;
        };
        if waiting {
            play(audio);
        } else {
            let _ = audio.pause();
            audio.set_current_time(0.0);
        }
    }
}

/// Start playback; a refused autoplay is swallowed.
fn play(audio: &HtmlAudioElement) {
    let Ok(promise) = audio.play() else {
        return;
    };
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            debug!("audio cue not played: {:?}", err);
        }
    });
}
