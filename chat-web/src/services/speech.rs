//! Text-to-speech playback of answers

use js_sys::Reflect;
use lib_core::voice::{SPEECH_LANG, SPEECH_PITCH, SPEECH_RATE};
use wasm_bindgen::JsValue;
use web_sys::SpeechSynthesisUtterance;

/// Speak `text`, interrupting anything already playing.
///
/// Returns `false` when the browser has no speech synthesis.
pub fn speak(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    if !Reflect::has(&window, &JsValue::from_str("speechSynthesis")).unwrap_or(false) {
        return false;
    }
    let Ok(synth) = window.speech_synthesis() else {
        return false;
    };

    synth.cancel();
    match SpeechSynthesisUtterance::new_with_text(text) {
        Ok(utterance) => {
            utterance.set_lang(SPEECH_LANG);
            utterance.set_rate(SPEECH_RATE);
            utterance.set_pitch(SPEECH_PITCH);
            synth.speak(&utterance);
            true
        }
        Err(err) => {
            log::warn!("could not create utterance: {:?}", err);
            false
        }
    }
}
