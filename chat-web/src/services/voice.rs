//! Voice input strategies
//!
//! - [`NativeRecognition`]: the browser's `SpeechRecognition`, reached through a
//!   small JavaScript shim since web-sys only exposes it as an unstable API.
//! - [`RecorderFallback`]: `MediaRecorder` capture uploaded to the backend for
//!   transcription.
//!
//! The strategy is chosen once by [`select`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use leptos::task::spawn_local;
use lib_core::notices;
use lib_core::voice::{
    TranscriptionOutcome, VoiceEvent, VoiceInput, VoiceStrategyKind, VoiceSupport, SPEECH_LANG,
};
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobEvent, BlobPropertyBag, MediaRecorder, MediaRecorderOptions, MediaStream,
    MediaStreamConstraints, MediaStreamTrack, RecordingState,
};

use crate::state::chat::ChatContext;
use crate::utils::constants::RECORDER_MIME;
use crate::utils::url::secure_context;

// ============================================================================
// SPEECH RECOGNITION SHIM (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasSpeechRecognition() {
    return ('webkitSpeechRecognition' in window) || ('SpeechRecognition' in window);
}

export function hasMediaRecorder() {
    return !!navigator.mediaDevices && typeof MediaRecorder !== 'undefined';
}

export function createRecognizer(lang, onResult, onError, onEnd) {
    const SR = window.SpeechRecognition || window.webkitSpeechRecognition;
    const recognition = new SR();
    recognition.lang = lang;
    recognition.interimResults = false;
    recognition.continuous = false;
    recognition.onresult = (e) => onResult(e.results[0][0].transcript);
    recognition.onerror = (e) => onError(String(e.error));
    recognition.onend = () => onEnd();
    return recognition;
}

export function startRecognizer(recognition) {
    recognition.start();
}

export function stopRecognizer(recognition) {
    recognition.stop();
}
")]
extern "C" {
    #[wasm_bindgen(js_name = hasSpeechRecognition)]
    fn has_speech_recognition() -> bool;

    #[wasm_bindgen(js_name = hasMediaRecorder)]
    fn has_media_recorder() -> bool;

    #[wasm_bindgen(js_name = createRecognizer)]
    fn create_recognizer(
        lang: &str,
        on_result: &Closure<dyn FnMut(String)>,
        on_error: &Closure<dyn FnMut(String)>,
        on_end: &Closure<dyn FnMut()>,
    ) -> JsValue;

    #[wasm_bindgen(js_name = startRecognizer, catch)]
    fn start_recognizer(recognition: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = stopRecognizer, catch)]
    fn stop_recognizer(recognition: &JsValue) -> Result<(), JsValue>;
}

/// Feature detection for the current page.
pub fn detect_support() -> VoiceSupport {
    VoiceSupport {
        secure_context: secure_context(),
        native_recognition: has_speech_recognition(),
        media_recorder: has_media_recorder(),
    }
}

/// Pick the voice input for this page.
pub fn select(ctx: ChatContext) -> Rc<dyn VoiceInput> {
    let support = detect_support();
    info!("voice input: {:?}", support.strategy());
    match support.strategy() {
        VoiceStrategyKind::NativeRecognition => Rc::new(NativeRecognition::new(ctx)),
        VoiceStrategyKind::Recorder => Rc::new(RecorderFallback::new(ctx, support)),
    }
}

// ============================================================================
// NATIVE RECOGNITION
// ============================================================================

pub struct NativeRecognition {
    ctx: ChatContext,
    recognition: JsValue,
    listening: Rc<Cell<bool>>,
    _on_result: Closure<dyn FnMut(String)>,
    _on_error: Closure<dyn FnMut(String)>,
    _on_end: Closure<dyn FnMut()>,
}

impl NativeRecognition {
    fn new(ctx: ChatContext) -> Self {
        let listening = Rc::new(Cell::new(false));

        let on_result = Closure::<dyn FnMut(String)>::new(move |text: String| {
            ctx.voice_event(VoiceEvent::Recognized(text.clone()));
            ctx.spawn(move |c| async move {
                c.submit_voice_text(&text).await;
            });
        });

        let on_error = Closure::<dyn FnMut(String)>::new(move |code: String| {
            warn!("speech recognition error: {}", code);
            ctx.voice_event(VoiceEvent::RecognitionError(code));
        });

        let on_end = {
            let listening = listening.clone();
            Closure::<dyn FnMut()>::new(move || {
                listening.set(false);
                ctx.voice_event(VoiceEvent::SessionEnded);
                ctx.expire_voice_status(VoiceStrategyKind::NativeRecognition);
            })
        };

        let recognition = create_recognizer(SPEECH_LANG, &on_result, &on_error, &on_end);

        Self {
            ctx,
            recognition,
            listening,
            _on_result: on_result,
            _on_error: on_error,
            _on_end: on_end,
        }
    }
}

impl VoiceInput for NativeRecognition {
    fn toggle(&self) {
        if self.listening.get() {
            if let Err(err) = stop_recognizer(&self.recognition) {
                debug!("stop recognition: {:?}", err);
            }
            return;
        }

        match start_recognizer(&self.recognition) {
            Ok(()) => {
                self.listening.set(true);
                self.ctx.voice_event(VoiceEvent::ListeningStarted);
            }
            Err(err) => {
                warn!("speech recognition did not start: {:?}", err);
                self.ctx.voice_event(VoiceEvent::StartFailed {
                    secure: secure_context(),
                });
            }
        }
    }
}

// ============================================================================
// RECORDER FALLBACK
// ============================================================================

/// A recording in progress (or the last one), with the handlers it owns.
struct Recording {
    recorder: MediaRecorder,
    _on_data: Closure<dyn FnMut(BlobEvent)>,
    _on_stop: Closure<dyn FnMut()>,
}

pub struct RecorderFallback {
    ctx: ChatContext,
    support: VoiceSupport,
    recording: Rc<RefCell<Option<Recording>>>,
}

impl RecorderFallback {
    fn new(ctx: ChatContext, support: VoiceSupport) -> Self {
        Self {
            ctx,
            support,
            recording: Rc::new(RefCell::new(None)),
        }
    }
}

impl VoiceInput for RecorderFallback {
    fn toggle(&self) {
        if let Some(reason) = self.support.recorder_blocker() {
            self.ctx.voice_event(VoiceEvent::Blocked(reason));
            return;
        }

        if let Some(current) = self.recording.borrow().as_ref() {
            if current.recorder.state() != RecordingState::Inactive {
                if let Err(err) = current.recorder.stop() {
                    warn!("could not stop recorder: {:?}", err);
                }
                return;
            }
        }

        spawn_local(start_recording(self.ctx, self.recording.clone()));
    }
}

async fn request_microphone() -> Result<MediaStream, JsValue> {
    let devices = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .navigator()
        .media_devices()?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_audio(&JsValue::TRUE);
    let stream = JsFuture::from(devices.get_user_media_with_constraints(&constraints)?).await?;
    stream.dyn_into()
}

fn new_recorder(stream: &MediaStream) -> Result<MediaRecorder, JsValue> {
    let options = MediaRecorderOptions::new();
    options.set_mime_type(RECORDER_MIME);
    MediaRecorder::new_with_media_stream_and_media_recorder_options(stream, &options)
        .or_else(|_| MediaRecorder::new_with_media_stream(stream))
}

fn release(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        track.unchecked_into::<MediaStreamTrack>().stop();
    }
}

async fn start_recording(ctx: ChatContext, slot: Rc<RefCell<Option<Recording>>>) {
    let stream = match request_microphone().await {
        Ok(stream) => stream,
        Err(err) => {
            warn!("microphone unavailable: {:?}", err);
            ctx.voice_event(VoiceEvent::PermissionDenied);
            return;
        }
    };
    let recorder = match new_recorder(&stream) {
        Ok(recorder) => recorder,
        Err(err) => {
            warn!("recorder unavailable: {:?}", err);
            release(&stream);
            ctx.voice_event(VoiceEvent::PermissionDenied);
            return;
        }
    };

    let chunks: Rc<RefCell<Vec<Blob>>> = Rc::new(RefCell::new(Vec::new()));

    let on_data = {
        let chunks = chunks.clone();
        Closure::<dyn FnMut(BlobEvent)>::new(move |ev: BlobEvent| {
            if let Some(data) = ev.data().filter(|d| d.size() > 0.0) {
                chunks.borrow_mut().push(data);
            }
        })
    };

    let on_stop = {
        let recorder = recorder.clone();
        let stream = stream.clone();
        Closure::<dyn FnMut()>::new(move || {
            let mime = Some(recorder.mime_type())
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| RECORDER_MIME.to_string());
            let parts = chunks.take();
            spawn_local(finish_recording(ctx, stream.clone(), mime, parts));
        })
    };

    recorder.set_ondataavailable(Some(on_data.as_ref().unchecked_ref()));
    recorder.set_onstop(Some(on_stop.as_ref().unchecked_ref()));

    if let Err(err) = recorder.start() {
        warn!("recorder did not start: {:?}", err);
        release(&stream);
        ctx.voice_event(VoiceEvent::PermissionDenied);
        return;
    }

    ctx.voice_event(VoiceEvent::RecordingStarted);
    *slot.borrow_mut() = Some(Recording {
        recorder,
        _on_data: on_data,
        _on_stop: on_stop,
    });
}

async fn finish_recording(ctx: ChatContext, stream: MediaStream, mime: String, chunks: Vec<Blob>) {
    let parts = Array::new();
    for chunk in &chunks {
        parts.push(chunk);
    }
    let options = BlobPropertyBag::new();
    options.set_type(&mime);

    ctx.voice_event(VoiceEvent::Transcribing);
    let outcome = match Blob::new_with_blob_sequence_and_options(&parts, &options) {
        Ok(audio) => ctx.controller().transcribe(audio, &mime).await,
        Err(err) => {
            warn!("could not assemble recording: {:?}", err);
            TranscriptionOutcome::Failed(notices::VOICE_STT_FAILED.to_string())
        }
    };

    if let TranscriptionOutcome::Recognized(text) = &outcome {
        let text = text.clone();
        ctx.spawn(move |c| async move {
            c.submit_voice_text(&text).await;
        });
    }
    ctx.voice_event(VoiceEvent::Transcribed(outcome));

    release(&stream);
    ctx.voice_event(VoiceEvent::SessionEnded);
    ctx.expire_voice_status(VoiceStrategyKind::Recorder);
}
